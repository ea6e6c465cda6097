//! Integration tests for the income tax engine.
//!
//! This test suite covers:
//! - Reference households across every marital status
//! - Family quotient cap and exceptional contribution
//! - Rejected declarations
//! - Schedules loaded from YAML
//! - The simulator facade and its report

use rust_decimal::Decimal;
use std::str::FromStr;

use impot_engine::calculation::TaxEngine;
use impot_engine::config::ScheduleLoader;
use impot_engine::error::EngineError;
use impot_engine::models::{ComputationResult, Household, MaritalStatus};
use impot_engine::schedule::FiscalSchedule;
use impot_engine::simulator::{LegacyMaritalStatus, Simulator, TaxCalculator};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn compute(household: Household) -> ComputationResult {
    TaxEngine::default()
        .compute(&household)
        .expect("computation should succeed")
}

fn rejection_reason(household: Household) -> String {
    match TaxEngine::default().compute(&household) {
        Err(EngineError::InvalidHousehold { reason }) => reason,
        other => panic!("expected InvalidHousehold, got {:?}", other),
    }
}

// =============================================================================
// Reference Households
// =============================================================================

#[test]
fn test_scenario_a_single_without_children() {
    let result = compute(Household::new(MaritalStatus::Single, 30_000, 0));

    assert_eq!(result.allowance, 3_000);
    assert_eq!(result.reference_income, 27_000);
    assert_eq!(result.fiscal_parts, decimal("1.0"));
    assert_eq!(result.gross_tax_household, decimal("1728"));
    assert_eq!(result.discount, decimal("91"));
    assert_eq!(result.net_tax, 1_637);
}

#[test]
fn test_scenario_b_married_with_two_children() {
    let result =
        compute(Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0));

    assert_eq!(result.fiscal_parts, decimal("3.0"));
    assert_eq!(result.gross_tax_declarants, decimal("5472"));
    assert_eq!(result.gross_tax_household, decimal("3203"));
    assert_eq!(result.tax_before_discount, result.gross_tax_household);
    assert_eq!(result.net_tax, 3_203);
}

#[test]
fn test_civil_union_is_taxed_like_marriage() {
    let married =
        compute(Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0));
    let civil_union =
        compute(Household::new(MaritalStatus::CivilUnion, 50_000, 20_000).with_children(2, 0));

    assert_eq!(married.net_tax, civil_union.net_tax);
    assert_eq!(married.fiscal_parts, civil_union.fiscal_parts);
}

#[test]
fn test_divorced_and_single_are_taxed_alike() {
    let single = compute(Household::new(MaritalStatus::Single, 20_000, 0));
    let divorced = compute(Household::new(MaritalStatus::Divorced, 20_000, 0));

    assert_eq!(single.reference_income, 18_000);
    assert_eq!(single.tax_before_discount, decimal("738"));
    assert_eq!(single.discount, decimal("539"));
    assert_eq!(single.net_tax, 199);
    assert_eq!(divorced.net_tax, single.net_tax);
}

#[test]
fn test_quotient_cap_engaged_for_isolated_parent() {
    let result = compute(
        Household::new(MaritalStatus::Single, 100_000, 0)
            .with_children(1, 0)
            .with_isolated_parent(true),
    );

    assert_eq!(result.gross_tax_household, decimal("13572"));
    assert_eq!(result.net_tax, 17_611);
}

#[test]
fn test_exceptional_contribution_for_high_income() {
    let result = compute(Household::new(MaritalStatus::Single, 600_000, 0));

    assert_eq!(result.exceptional_contribution, decimal("10933"));
    assert_eq!(result.net_tax, 251_701);
}

#[test]
fn test_discount_is_clamped_to_tax() {
    let result = compute(Household::new(MaritalStatus::Married, 20_000, 10_000));

    assert_eq!(result.discount, result.tax_before_discount);
    assert_eq!(result.net_tax, 0);
}

#[test]
fn test_more_children_never_increase_tax() {
    let mut previous = i64::MAX;
    for children in 0..=7 {
        let result = compute(
            Household::new(MaritalStatus::Married, 60_000, 45_000).with_children(children, 0),
        );
        assert!(
            result.net_tax <= previous,
            "{} children: {} > {}",
            children,
            result.net_tax,
            previous
        );
        previous = result.net_tax;
    }
}

// =============================================================================
// Rejected Declarations
// =============================================================================

#[test]
fn test_scenario_c_isolated_parent_cannot_be_married() {
    let reason = rejection_reason(
        Household::new(MaritalStatus::Married, 40_000, 30_000)
            .with_children(1, 0)
            .with_isolated_parent(true),
    );
    assert!(reason.contains("isolated parent"));
}

#[test]
fn test_scenario_d_single_cannot_declare_second_income() {
    let reason = rejection_reason(Household::new(MaritalStatus::Single, 40_000, 1));
    assert!(reason.contains("declarant 2"));
}

#[test]
fn test_scenario_e_too_many_children() {
    let reason =
        rejection_reason(Household::new(MaritalStatus::Married, 40_000, 0).with_children(9, 0));
    assert!(reason.contains("cannot exceed 7"));
}

#[test]
fn test_negative_income_is_rejected() {
    let reason = rejection_reason(Household::new(MaritalStatus::Single, -1, 0));
    assert!(reason.contains("negative"));
}

#[test]
fn test_more_disabled_than_dependent_children_is_rejected() {
    let reason =
        rejection_reason(Household::new(MaritalStatus::Single, 40_000, 0).with_children(1, 2));
    assert!(reason.contains("disabled"));
}

#[test]
fn test_income_sum_beyond_i64_is_a_computation_error() {
    let mut simulator = Simulator::default();
    simulator.set_income_declarant1(i64::MAX);
    simulator.set_income_declarant2(1);
    simulator.set_marital_status(Some(MaritalStatus::CivilUnion));

    let err = simulator.compute_net_tax().unwrap_err();
    assert!(matches!(err, EngineError::ComputationError { .. }));
    assert!(matches!(simulator.net_tax(), Err(EngineError::NoResultAvailable)));
}

// =============================================================================
// Schedules
// =============================================================================

#[test]
fn test_yaml_schedule_matches_built_in() {
    let loader = ScheduleLoader::load("./config/schedules").expect("Failed to load schedules");
    let loaded = loader.get(2024).unwrap();

    assert_eq!(loaded, &FiscalSchedule::year_2024());

    let household = Household::new(MaritalStatus::Widowed, 40_000, 0).with_children(1, 0);
    let from_yaml = TaxEngine::new(loaded.clone()).compute(&household).unwrap();
    let built_in = TaxEngine::default().compute(&household).unwrap();
    assert_eq!(from_yaml, built_in);
    assert_eq!(from_yaml.net_tax, 367);
}

#[test]
fn test_unknown_year_is_reported() {
    let err = FiscalSchedule::for_year(1999).unwrap_err();
    assert!(matches!(err, EngineError::ScheduleNotFound { year: 1999 }));
}

// =============================================================================
// Simulator
// =============================================================================

#[test]
fn test_simulator_full_session() {
    let mut simulator = Simulator::default();
    simulator.set_income_declarant1(80_000);
    simulator.set_income_declarant2(40_000);
    simulator.set_legacy_marital_status(Some(LegacyMaritalStatus::Marie));
    simulator.set_dependent_children(3);
    simulator.set_disabled_children(1);

    let result = simulator.compute_net_tax().unwrap();
    assert_eq!(result.net_tax, 10_177);
    assert_eq!(simulator.fiscal_parts().unwrap(), decimal("4.5"));
    assert_eq!(simulator.tax_before_discount().unwrap(), decimal("10177"));

    let report = simulator.render_result().unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[4], "Marital status : Marié(e)");
    assert_eq!(lines[10], "Fiscal parts : 4.5");
    assert_eq!(lines[16], "Net income tax : 10177");
}

#[test]
fn test_simulator_recomputes_after_change() {
    let mut simulator = Simulator::default();
    simulator.set_income_declarant1(30_000);
    simulator.set_marital_status(Some(MaritalStatus::Single));
    assert_eq!(simulator.compute_net_tax().unwrap().net_tax, 1_637);

    simulator.set_income_declarant1(0);
    assert!(matches!(simulator.net_tax(), Err(EngineError::NoResultAvailable)));
    assert_eq!(simulator.compute_net_tax().unwrap().net_tax, 0);
    assert_eq!(simulator.allowance().unwrap(), 495);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_result_serializes_to_json() {
    let result = compute(Household::new(MaritalStatus::Single, 30_000, 0));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["net_tax"], 1_637);
    assert_eq!(json["household"]["marital_status"], "single");
    assert_eq!(json["audit_trace"]["steps"].as_array().unwrap().len(), 9);

    let back: ComputationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.net_tax, result.net_tax);
    assert_eq!(back.fiscal_parts, result.fiscal_parts);
}
