//! Discount (décote) on low tax amounts.

use rust_decimal::Decimal;

use crate::models::{AuditStep, MaritalStatus};
use crate::schedule::FiscalSchedule;

/// The result of the discount calculation.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// Discount granted, never above the tax before discount.
    pub discount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the discount granted on the capped tax.
pub fn calculate_discount(
    tax_before_discount: Decimal,
    status: MaritalStatus,
    schedule: &FiscalSchedule,
    step_number: u32,
) -> DiscountResult {
    let is_couple = status.is_couple();
    let discount = schedule.discount(tax_before_discount, is_couple);

    let audit_step = AuditStep {
        step_number,
        rule_id: "discount".to_string(),
        rule_name: "Discount".to_string(),
        clause_ref: "CGI art. 197-I-4-a".to_string(),
        input: serde_json::json!({
            "tax_before_discount": tax_before_discount.normalize().to_string(),
            "is_couple": is_couple
        }),
        output: serde_json::json!({
            "discount": discount.normalize().to_string()
        }),
        reasoning: if discount.is_zero() {
            format!(
                "No discount on a tax of {}",
                tax_before_discount.normalize()
            )
        } else {
            format!(
                "Discount of {} on a tax of {}",
                discount.normalize(),
                tax_before_discount.normalize()
            )
        },
    };

    DiscountResult {
        discount,
        audit_step,
    }
}
