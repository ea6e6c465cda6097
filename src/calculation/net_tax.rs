//! Net income tax.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::common::to_whole_euros;

/// The result of the net tax calculation.
#[derive(Debug, Clone)]
pub struct NetTaxResult {
    /// Tax owed, in whole euros, never negative.
    pub net_tax: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Subtracts the discount and adds the exceptional contribution.
///
/// # Errors
///
/// Returns `ComputationError` if the rounded tax does not fit in an `i64`.
pub fn calculate_net_tax(
    tax_before_discount: Decimal,
    discount: Decimal,
    exceptional_contribution: Decimal,
    step_number: u32,
) -> EngineResult<NetTaxResult> {
    let amount = tax_before_discount - discount + exceptional_contribution;
    let net_tax = to_whole_euros(amount, "net tax")?.max(0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_tax".to_string(),
        rule_name: "Net Income Tax".to_string(),
        clause_ref: "CGI art. 197".to_string(),
        input: serde_json::json!({
            "tax_before_discount": tax_before_discount.normalize().to_string(),
            "discount": discount.normalize().to_string(),
            "exceptional_contribution": exceptional_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_tax": net_tax
        }),
        reasoning: format!(
            "{} - {} + {} = {}",
            tax_before_discount.normalize(),
            discount.normalize(),
            exceptional_contribution.normalize(),
            net_tax
        ),
    };

    Ok(NetTaxResult {
        net_tax,
        audit_step,
    })
}
