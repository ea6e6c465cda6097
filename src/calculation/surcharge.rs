//! Exceptional contribution on high incomes (CEHR).

use rust_decimal::Decimal;

use crate::models::{AuditStep, MaritalStatus};
use crate::schedule::FiscalSchedule;

use super::common::round_half_up;

/// The result of the exceptional contribution calculation.
#[derive(Debug, Clone)]
pub struct SurchargeResult {
    /// The contribution, rounded to a whole euro.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the exceptional contribution on the reference income.
///
/// Couples are assessed on the couple table, every other status on the
/// single table.
pub fn calculate_exceptional_contribution(
    reference_income: i64,
    status: MaritalStatus,
    schedule: &FiscalSchedule,
    step_number: u32,
) -> SurchargeResult {
    let is_couple = status.is_couple();
    let raw = schedule.surcharge(Decimal::from(reference_income), is_couple);
    let contribution = round_half_up(raw);

    let audit_step = AuditStep {
        step_number,
        rule_id: "exceptional_contribution".to_string(),
        rule_name: "Exceptional Contribution on High Incomes".to_string(),
        clause_ref: "CGI art. 223 sexies".to_string(),
        input: serde_json::json!({
            "reference_income": reference_income,
            "is_couple": is_couple
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string()
        }),
        reasoning: format!(
            "{} table on {} gives {} (rounded to {})",
            if is_couple { "Couple" } else { "Single" },
            reference_income,
            raw.normalize(),
            contribution.normalize()
        ),
    };

    SurchargeResult {
        contribution,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_contribution_below_threshold() {
        let result = calculate_exceptional_contribution(
            250_000,
            MaritalStatus::Single,
            &FiscalSchedule::current(),
            5,
        );
        assert_eq!(result.contribution, Decimal::ZERO);
    }

    #[test]
    fn test_single_contribution_is_rounded() {
        // 250000 * 3% + 85829 * 4% = 10933.16
        let result = calculate_exceptional_contribution(
            585_829,
            MaritalStatus::Divorced,
            &FiscalSchedule::current(),
            5,
        );
        assert_eq!(result.contribution, Decimal::from(10_933));
        assert!(result.audit_step.reasoning.starts_with("Single table"));
    }

    #[test]
    fn test_couple_uses_couple_table() {
        // 500000 * 3% + 171658 * 4% = 21866.32
        let result = calculate_exceptional_contribution(
            1_171_658,
            MaritalStatus::CivilUnion,
            &FiscalSchedule::current(),
            5,
        );
        assert_eq!(result.contribution, Decimal::from(21_866));
        assert_eq!(result.audit_step.input["is_couple"], true);
    }
}
