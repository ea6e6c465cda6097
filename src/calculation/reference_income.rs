//! Fiscal reference income.

use crate::models::AuditStep;

/// The result of the reference income calculation.
#[derive(Debug, Clone)]
pub struct ReferenceIncomeResult {
    /// Net income minus allowance, never negative.
    pub reference_income: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Subtracts the allowance from the household's total net income.
///
/// A household whose allowance exceeds its income has a reference income
/// of zero.
pub fn calculate_reference_income(
    total_income: i64,
    allowance: i64,
    step_number: u32,
) -> ReferenceIncomeResult {
    let reference_income = (total_income - allowance).max(0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "reference_income".to_string(),
        rule_name: "Fiscal Reference Income".to_string(),
        clause_ref: "CGI art. 1417-IV".to_string(),
        input: serde_json::json!({
            "total_income": total_income,
            "allowance": allowance
        }),
        output: serde_json::json!({
            "reference_income": reference_income
        }),
        reasoning: format!(
            "max(0, {} - {}) = {}",
            total_income, allowance, reference_income
        ),
    };

    ReferenceIncomeResult {
        reference_income,
        audit_step,
    }
}
