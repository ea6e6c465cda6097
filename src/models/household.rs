//! Household model.
//!
//! A [`Household`] gathers everything a tax return declares about the
//! people it covers. It is filled field by field by the caller and only
//! checked when a computation starts.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MaritalStatus;

/// The maximum number of dependent children a declaration may carry.
pub const MAX_DEPENDENT_CHILDREN: i32 = 7;

/// A tax household (foyer fiscal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Net income of the first declarant, in whole euros.
    pub income_declarant1: i64,
    /// Net income of the second declarant, in whole euros.
    pub income_declarant2: i64,
    /// Declared marital status; `None` once a caller clears it.
    pub marital_status: Option<MaritalStatus>,
    /// Number of dependent children.
    pub dependent_children: i32,
    /// Number of dependent children with a disability.
    pub disabled_children: i32,
    /// Whether the declarant raises the children alone.
    pub isolated_parent: bool,
}

impl Default for Household {
    fn default() -> Self {
        Self {
            income_declarant1: 0,
            income_declarant2: 0,
            marital_status: Some(MaritalStatus::Single),
            dependent_children: 0,
            disabled_children: 0,
            isolated_parent: false,
        }
    }
}

impl Household {
    /// Creates a household with the given status and declarant incomes.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::models::{Household, MaritalStatus};
    ///
    /// let household = Household::new(MaritalStatus::Married, 50_000, 20_000);
    /// assert_eq!(household.total_income().unwrap(), 70_000);
    /// assert!(household.is_valid());
    /// ```
    pub fn new(status: MaritalStatus, income_declarant1: i64, income_declarant2: i64) -> Self {
        Self {
            income_declarant1,
            income_declarant2,
            marital_status: Some(status),
            ..Self::default()
        }
    }

    /// Sets the number of dependent and disabled children.
    pub fn with_children(mut self, dependent: i32, disabled: i32) -> Self {
        self.dependent_children = dependent;
        self.disabled_children = disabled;
        self
    }

    /// Marks the declarant as an isolated parent.
    pub fn with_isolated_parent(mut self, isolated: bool) -> Self {
        self.isolated_parent = isolated;
        self
    }

    /// Combined net income of both declarants.
    ///
    /// # Errors
    ///
    /// Returns `ComputationError` when the sum does not fit in an `i64`.
    pub fn total_income(&self) -> EngineResult<i64> {
        let total = i128::from(self.income_declarant1) + i128::from(self.income_declarant2);
        i64::try_from(total).map_err(|err| {
            EngineError::computation(
                format!("total net income {} does not fit in a whole-euro amount", total),
                err,
            )
        })
    }

    /// Returns true when the household satisfies every declaration invariant.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the declaration invariants, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHousehold` when an income is negative, the marital
    /// status is unset, a child count is out of range, an isolated parent
    /// is part of a couple, or a lone declarant reports a second income.
    pub fn validate(&self) -> EngineResult<MaritalStatus> {
        if self.income_declarant1 < 0 {
            return Err(EngineError::invalid_household(
                "net income of declarant 1 cannot be negative",
            ));
        }
        if self.income_declarant2 < 0 {
            return Err(EngineError::invalid_household(
                "net income of declarant 2 cannot be negative",
            ));
        }

        let status = self
            .marital_status
            .ok_or_else(|| EngineError::invalid_household("marital status is not set"))?;

        if self.dependent_children < 0 {
            return Err(EngineError::invalid_household(
                "number of dependent children cannot be negative",
            ));
        }
        if self.dependent_children > MAX_DEPENDENT_CHILDREN {
            return Err(EngineError::invalid_household(format!(
                "number of dependent children cannot exceed {}",
                MAX_DEPENDENT_CHILDREN
            )));
        }
        if self.disabled_children < 0 {
            return Err(EngineError::invalid_household(
                "number of disabled children cannot be negative",
            ));
        }
        if self.disabled_children > self.dependent_children {
            return Err(EngineError::invalid_household(
                "number of disabled children cannot exceed the number of dependent children",
            ));
        }
        if self.isolated_parent && status.is_couple() {
            return Err(EngineError::invalid_household(format!(
                "an isolated parent cannot be {}",
                status.label()
            )));
        }
        if status.is_alone() && self.income_declarant2 > 0 {
            return Err(EngineError::invalid_household(format!(
                "a {} household cannot declare income for declarant 2",
                status.label()
            )));
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(household: &Household) -> String {
        match household.validate() {
            Err(EngineError::InvalidHousehold { reason }) => reason,
            other => panic!("Expected InvalidHousehold, got {:?}", other),
        }
    }

    #[test]
    fn test_default_household_is_single_and_valid() {
        let household = Household::default();
        assert_eq!(household.marital_status, Some(MaritalStatus::Single));
        assert_eq!(household.total_income().unwrap(), 0);
        assert!(household.is_valid());
    }

    #[test]
    fn test_total_income_overflow_is_an_error() {
        let household = Household::new(MaritalStatus::Married, i64::MAX, 1);
        assert!(household.is_valid());

        match household.total_income() {
            Err(EngineError::ComputationError { message, .. }) => {
                assert!(message.contains("9223372036854775808"));
            }
            other => panic!("Expected ComputationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_returns_status() {
        let household = Household::new(MaritalStatus::CivilUnion, 10, 20);
        assert_eq!(household.validate().unwrap(), MaritalStatus::CivilUnion);
    }

    #[test]
    fn test_negative_income_is_rejected() {
        let household = Household::new(MaritalStatus::Single, -1, 0);
        assert!(reason(&household).contains("declarant 1"));

        let household = Household::new(MaritalStatus::Married, 0, -1);
        assert!(reason(&household).contains("declarant 2"));
    }

    #[test]
    fn test_unset_status_is_rejected() {
        let household = Household {
            marital_status: None,
            ..Household::default()
        };
        assert_eq!(reason(&household), "marital status is not set");
    }

    #[test]
    fn test_child_count_bounds() {
        let household = Household::default().with_children(-1, 0);
        assert!(reason(&household).contains("dependent children cannot be negative"));

        let household = Household::default().with_children(MAX_DEPENDENT_CHILDREN, 0);
        assert!(household.is_valid());

        let household = Household::default().with_children(MAX_DEPENDENT_CHILDREN + 1, 0);
        assert!(reason(&household).contains("cannot exceed 7"));
    }

    #[test]
    fn test_disabled_children_bounds() {
        let household = Household::default().with_children(2, -1);
        assert!(reason(&household).contains("disabled children cannot be negative"));

        let household = Household::default().with_children(2, 3);
        assert!(reason(&household).contains("cannot exceed the number of dependent children"));

        let household = Household::default().with_children(2, 2);
        assert!(household.is_valid());
    }

    #[test]
    fn test_isolated_parent_cannot_be_a_couple() {
        for status in [MaritalStatus::Married, MaritalStatus::CivilUnion] {
            let household = Household::new(status, 30_000, 0)
                .with_children(1, 0)
                .with_isolated_parent(true);
            assert!(!household.is_valid(), "{:?}", status);
        }

        let household = Household::new(MaritalStatus::Divorced, 30_000, 0)
            .with_children(1, 0)
            .with_isolated_parent(true);
        assert!(household.is_valid());
    }

    #[test]
    fn test_lone_declarant_cannot_have_second_income() {
        for status in [
            MaritalStatus::Single,
            MaritalStatus::Divorced,
            MaritalStatus::Widowed,
        ] {
            let household = Household::new(status, 30_000, 1);
            assert!(reason(&household).contains("declarant 2"), "{:?}", status);
        }
    }

    #[test]
    fn test_deserialize_household() {
        let json = r#"{
            "income_declarant1": 50000,
            "income_declarant2": 20000,
            "marital_status": "married",
            "dependent_children": 2,
            "disabled_children": 0,
            "isolated_parent": false
        }"#;

        let household: Household = serde_json::from_str(json).unwrap();
        assert_eq!(
            household,
            Household::new(MaritalStatus::Married, 50_000, 20_000).with_children(2, 0)
        );
    }
}
