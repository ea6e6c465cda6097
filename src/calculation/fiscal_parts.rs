//! Fiscal parts (quotient familial) calculation.
//!
//! The household's parts start from the declarants' own parts and grow
//! with its children:
//!
//! | Condition | Increase |
//! |-----------|----------|
//! | first and second child | 0.5 each |
//! | third child onward | 1 each |
//! | isolated parent with at least one child | 0.5 |
//! | widowed with at least one child | 1 |
//! | each disabled child | 0.5 |

use rust_decimal::Decimal;

use crate::models::{AuditStep, Household, MaritalStatus};

const HALF_PART: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The result of the fiscal parts calculation.
#[derive(Debug, Clone)]
pub struct FiscalPartsResult {
    /// Parts of the declarants alone.
    pub base_parts: Decimal,
    /// Parts of the full household.
    pub parts: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the parts added by `children` dependent children.
///
/// # Examples
///
/// ```
/// use impot_engine::calculation::child_parts;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(child_parts(1), Decimal::from_str("0.5").unwrap());
/// assert_eq!(child_parts(2), Decimal::ONE);
/// assert_eq!(child_parts(4), Decimal::from(3));
/// ```
pub fn child_parts(children: i32) -> Decimal {
    if children <= 2 {
        Decimal::from(children) * HALF_PART
    } else {
        Decimal::ONE + Decimal::from(children - 2)
    }
}

/// Calculates the household's fiscal parts.
///
/// # Arguments
///
/// * `household` - The household whose children are counted
/// * `status` - The validated marital status giving the base parts
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `FiscalPartsResult` with both the declarants' parts and the
/// household's parts.
pub fn calculate_fiscal_parts(
    household: &Household,
    status: MaritalStatus,
    step_number: u32,
) -> FiscalPartsResult {
    let children = household.dependent_children;
    let has_children = children > 0;

    let base_parts = status.base_parts();
    let children_increase = child_parts(children);
    let isolated_increase = if household.isolated_parent && has_children {
        HALF_PART
    } else {
        Decimal::ZERO
    };
    let widowed_increase = if status == MaritalStatus::Widowed && has_children {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };
    let disability_increase = Decimal::from(household.disabled_children) * HALF_PART;

    let parts =
        base_parts + children_increase + isolated_increase + widowed_increase + disability_increase;

    let audit_step = AuditStep {
        step_number,
        rule_id: "fiscal_parts".to_string(),
        rule_name: "Fiscal Parts".to_string(),
        clause_ref: "CGI art. 194-195".to_string(),
        input: serde_json::json!({
            "marital_status": status,
            "dependent_children": children,
            "disabled_children": household.disabled_children,
            "isolated_parent": household.isolated_parent
        }),
        output: serde_json::json!({
            "base_parts": base_parts.normalize().to_string(),
            "children": children_increase.normalize().to_string(),
            "isolated_parent": isolated_increase.normalize().to_string(),
            "widowed": widowed_increase.normalize().to_string(),
            "disability": disability_increase.normalize().to_string(),
            "parts": parts.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} + {} = {} parts",
            base_parts.normalize(),
            children_increase.normalize(),
            isolated_increase.normalize(),
            widowed_increase.normalize(),
            disability_increase.normalize(),
            parts.normalize()
        ),
    };

    FiscalPartsResult {
        base_parts,
        parts,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parts(household: &Household) -> Decimal {
        let status = household.marital_status.unwrap();
        calculate_fiscal_parts(household, status, 4).parts
    }

    #[test]
    fn test_child_parts_table() {
        let expected = ["0", "0.5", "1", "2", "3", "4", "5", "6"];
        for (children, want) in expected.iter().enumerate() {
            assert_eq!(child_parts(children as i32), dec(want), "{} children", children);
        }
    }

    #[test]
    fn test_single_without_children_has_one_part() {
        assert_eq!(parts(&Household::default()), dec("1"));
    }

    #[test]
    fn test_married_with_two_children_has_three_parts() {
        let household = Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0);
        assert_eq!(parts(&household), dec("3"));
    }

    #[test]
    fn test_isolated_parent_adds_half_part_only_with_children() {
        let with_child = Household::new(MaritalStatus::Single, 30_000, 0)
            .with_children(1, 0)
            .with_isolated_parent(true);
        assert_eq!(parts(&with_child), dec("2"));

        let without_child =
            Household::new(MaritalStatus::Single, 30_000, 0).with_isolated_parent(true);
        assert_eq!(parts(&without_child), dec("1"));
    }

    #[test]
    fn test_widowed_with_child_adds_full_part() {
        let household = Household::new(MaritalStatus::Widowed, 40_000, 0).with_children(1, 0);
        assert_eq!(parts(&household), dec("2.5"));

        let no_child = Household::new(MaritalStatus::Widowed, 40_000, 0);
        assert_eq!(parts(&no_child), dec("1"));
    }

    #[test]
    fn test_disabled_children_add_half_part_each() {
        let household = Household::new(MaritalStatus::Married, 80_000, 40_000).with_children(3, 1);
        assert_eq!(parts(&household), dec("4.5"));
    }

    #[test]
    fn test_increments_are_cumulative() {
        let household = Household::new(MaritalStatus::Widowed, 40_000, 0)
            .with_children(3, 2)
            .with_isolated_parent(true);
        // 1 + 2 + 0.5 + 1 + 1
        assert_eq!(parts(&household), dec("5.5"));
    }

    #[test]
    fn test_audit_step_records_breakdown() {
        let household = Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0);
        let result = calculate_fiscal_parts(&household, MaritalStatus::Married, 4);

        assert_eq!(result.base_parts, dec("2"));
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.output["parts"], "3");
        assert_eq!(result.audit_step.input["marital_status"], "married");
    }
}
