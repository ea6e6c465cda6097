//! Gross income tax through the family quotient.
//!
//! The reference income is divided by a number of parts, the income tax
//! table is applied to one part, and the result is multiplied back. The
//! engine runs this twice: once with the declarants' own parts and once
//! with the full household's parts, so the quotient cap can compare them.

use rust_decimal::Decimal;

use crate::models::AuditStep;
use crate::schedule::FiscalSchedule;

use super::common::round_half_up;

/// Which parts count the gross tax is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrossTaxBasis {
    /// The declarants' own parts, ignoring children.
    Declarants,
    /// Every part of the household.
    Household,
}

impl GrossTaxBasis {
    fn rule_id(&self) -> &'static str {
        match self {
            Self::Declarants => "gross_tax_declarants",
            Self::Household => "gross_tax_household",
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            Self::Declarants => "Gross Tax (Declarants Only)",
            Self::Household => "Gross Tax (Full Household)",
        }
    }
}

/// The result of a gross tax calculation.
#[derive(Debug, Clone)]
pub struct GrossTaxResult {
    /// Reference income attributed to one part.
    pub per_part_income: Decimal,
    /// Gross tax for all parts, rounded to a whole euro.
    pub gross_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the gross tax of `reference_income` spread over `parts`.
///
/// # Arguments
///
/// * `reference_income` - The household's fiscal reference income
/// * `parts` - The number of parts the income is spread over
/// * `basis` - Whether `parts` are the declarants' own or the household's
/// * `schedule` - The schedule providing the income tax table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `GrossTaxResult` with the per-part income, the rounded gross
/// tax and an audit step.
///
/// # Examples
///
/// ```
/// use impot_engine::calculation::{calculate_gross_tax, GrossTaxBasis};
/// use impot_engine::schedule::FiscalSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = FiscalSchedule::year_2024();
/// let parts = Decimal::from(3);
/// let result = calculate_gross_tax(63_000, parts, GrossTaxBasis::Household, &schedule, 7);
/// assert_eq!(result.gross_tax, Decimal::from(3_203));
/// ```
pub fn calculate_gross_tax(
    reference_income: i64,
    parts: Decimal,
    basis: GrossTaxBasis,
    schedule: &FiscalSchedule,
    step_number: u32,
) -> GrossTaxResult {
    let per_part_income = Decimal::from(reference_income) / parts;
    let tax_per_part = schedule.income_tax(per_part_income);
    let gross_tax = round_half_up(tax_per_part * parts);

    let audit_step = AuditStep {
        step_number,
        rule_id: basis.rule_id().to_string(),
        rule_name: basis.rule_name().to_string(),
        clause_ref: "CGI art. 197-I-1".to_string(),
        input: serde_json::json!({
            "reference_income": reference_income,
            "parts": parts.normalize().to_string()
        }),
        output: serde_json::json!({
            "per_part_income": per_part_income.round_dp(2).normalize().to_string(),
            "tax_per_part": tax_per_part.round_dp(2).normalize().to_string(),
            "gross_tax": gross_tax.normalize().to_string()
        }),
        reasoning: format!(
            "{} per part over {} parts, {} per part x {} = {}",
            per_part_income.round_dp(2).normalize(),
            parts.normalize(),
            tax_per_part.round_dp(2).normalize(),
            parts.normalize(),
            gross_tax.normalize()
        ),
    };

    GrossTaxResult {
        per_part_income,
        gross_tax,
        audit_step,
    }
}
