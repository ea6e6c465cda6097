//! Allowance calculation.
//!
//! Each declarant's net income is reduced by a flat-rate allowance bounded
//! by the schedule. The second declarant only receives one when the
//! household is a couple.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, Household, MaritalStatus};
use crate::schedule::FiscalSchedule;

use super::common::to_whole_euros;

/// The result of the allowance calculation.
#[derive(Debug, Clone)]
pub struct AllowanceResult {
    /// Allowance granted to the first declarant.
    pub declarant1: Decimal,
    /// Allowance granted to the second declarant (zero for lone declarants).
    pub declarant2: Decimal,
    /// Total allowance, in whole euros.
    pub total: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the total allowance of a household.
///
/// # Arguments
///
/// * `household` - The household whose incomes receive the allowance
/// * `status` - The validated marital status; only couples get a second allowance
/// * `schedule` - The schedule providing the allowance rate and bounds
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `AllowanceResult` with each declarant's allowance, the
/// whole-euro total and an audit step.
///
/// # Errors
///
/// Returns `ComputationError` if the total does not fit in an `i64`.
///
/// # Tax Code Reference
///
/// Article 83-3° of the Code général des impôts.
///
/// # Examples
///
/// ```
/// use impot_engine::calculation::calculate_allowance;
/// use impot_engine::models::{Household, MaritalStatus};
/// use impot_engine::schedule::FiscalSchedule;
///
/// let household = Household::new(MaritalStatus::Married, 50_000, 20_000);
/// let schedule = FiscalSchedule::year_2024();
///
/// let result = calculate_allowance(&household, MaritalStatus::Married, &schedule, 1).unwrap();
/// assert_eq!(result.total, 7_000);
/// ```
pub fn calculate_allowance(
    household: &Household,
    status: MaritalStatus,
    schedule: &FiscalSchedule,
    step_number: u32,
) -> EngineResult<AllowanceResult> {
    let declarant1 = schedule.allowance(household.income_declarant1);
    let declarant2 = if status.is_couple() {
        schedule.allowance(household.income_declarant2)
    } else {
        Decimal::ZERO
    };
    let total = to_whole_euros(declarant1 + declarant2, "allowance")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "allowance".to_string(),
        rule_name: "Flat-rate Allowance".to_string(),
        clause_ref: "CGI art. 83-3°".to_string(),
        input: serde_json::json!({
            "income_declarant1": household.income_declarant1,
            "income_declarant2": household.income_declarant2,
            "is_couple": status.is_couple()
        }),
        output: serde_json::json!({
            "allowance_declarant1": declarant1.normalize().to_string(),
            "allowance_declarant2": declarant2.normalize().to_string(),
            "total": total
        }),
        reasoning: if status.is_couple() {
            format!(
                "Allowance {} + {} = {}",
                declarant1.normalize(),
                declarant2.normalize(),
                total
            )
        } else {
            format!("Allowance {} for a single declarant", total)
        },
    };

    Ok(AllowanceResult {
        declarant1,
        declarant2,
        total,
        audit_step,
    })
}
