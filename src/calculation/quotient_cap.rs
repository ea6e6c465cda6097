//! Family quotient cap (plafonnement du quotient familial).
//!
//! The tax saved thanks to the parts added on top of the declarants' own
//! parts is limited to a fixed amount per extra half part.

use rust_decimal::Decimal;

use crate::models::AuditStep;
use crate::schedule::FiscalSchedule;

const HALF_PART: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The result of applying the quotient cap.
#[derive(Debug, Clone)]
pub struct QuotientCapResult {
    /// Tax retained after the cap, before the discount.
    pub tax_before_discount: Decimal,
    /// Tax saved by the extra parts before capping.
    pub reduction: Decimal,
    /// Maximum saving allowed; `None` when there was no saving to cap.
    pub allowed_reduction: Option<Decimal>,
    /// Whether the cap reduced the benefit.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the quotient cap to the two gross tax figures.
///
/// # Arguments
///
/// * `gross_tax_declarants` - Gross tax on the declarants' own parts
/// * `gross_tax_household` - Gross tax on every part of the household
/// * `base_parts` - The declarants' own parts
/// * `parts` - The household's parts
/// * `schedule` - The schedule providing the cap per half part
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `QuotientCapResult` with the tax retained before the discount,
/// whether the cap engaged, and an audit step.
pub fn apply_quotient_cap(
    gross_tax_declarants: Decimal,
    gross_tax_household: Decimal,
    base_parts: Decimal,
    parts: Decimal,
    schedule: &FiscalSchedule,
    step_number: u32,
) -> QuotientCapResult {
    let reduction = gross_tax_declarants - gross_tax_household;

    let (tax_before_discount, allowed_reduction, capped, reasoning) = if reduction <= Decimal::ZERO
    {
        (
            gross_tax_household,
            None,
            false,
            "Extra parts bring no saving, nothing to cap".to_string(),
        )
    } else {
        let extra_half_parts = (parts - base_parts) / HALF_PART;
        let allowed = extra_half_parts * schedule.half_part_cap();
        if reduction > allowed {
            (
                gross_tax_declarants - allowed,
                Some(allowed),
                true,
                format!(
                    "Saving {} exceeds {} half parts x {} = {}, tax set to {} - {}",
                    reduction.normalize(),
                    extra_half_parts.normalize(),
                    schedule.half_part_cap().normalize(),
                    allowed.normalize(),
                    gross_tax_declarants.normalize(),
                    allowed.normalize()
                ),
            )
        } else {
            (
                gross_tax_household,
                Some(allowed),
                false,
                format!(
                    "Saving {} within allowed {}",
                    reduction.normalize(),
                    allowed.normalize()
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "quotient_cap".to_string(),
        rule_name: "Family Quotient Cap".to_string(),
        clause_ref: "CGI art. 197-I-2".to_string(),
        input: serde_json::json!({
            "gross_tax_declarants": gross_tax_declarants.normalize().to_string(),
            "gross_tax_household": gross_tax_household.normalize().to_string(),
            "base_parts": base_parts.normalize().to_string(),
            "parts": parts.normalize().to_string()
        }),
        output: serde_json::json!({
            "reduction": reduction.normalize().to_string(),
            "allowed_reduction": allowed_reduction.map(|a| a.normalize().to_string()),
            "capped": capped,
            "tax_before_discount": tax_before_discount.normalize().to_string()
        }),
        reasoning,
    };

    QuotientCapResult {
        tax_before_discount,
        reduction,
        allowed_reduction,
        capped,
        audit_step,
    }
}
