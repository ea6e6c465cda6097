//! Marital status of a tax household.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The marital situation declared by the household.
///
/// Each status carries the number of fiscal parts granted to the
/// declarants themselves, before any child-related increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Not married, not in a civil union.
    Single,
    /// Married couple filing jointly.
    Married,
    /// Civil union (PACS) filing jointly.
    CivilUnion,
    /// Divorced or separated.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// All variants, in declaration order.
    pub const ALL: [MaritalStatus; 5] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::CivilUnion,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    /// Returns the fiscal parts of the declarants alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::models::MaritalStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(MaritalStatus::Married.base_parts(), Decimal::TWO);
    /// assert_eq!(MaritalStatus::Widowed.base_parts(), Decimal::ONE);
    /// ```
    pub fn base_parts(&self) -> Decimal {
        if self.is_couple() {
            Decimal::TWO
        } else {
            Decimal::ONE
        }
    }

    /// Returns the label used on the printed report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Célibataire",
            Self::Married => "Marié(e)",
            Self::CivilUnion => "Pacsé(e)",
            Self::Divorced => "Divorcé(e)",
            Self::Widowed => "Veuf/Veuve",
        }
    }

    /// Returns true for a couple taxed jointly (married or civil union).
    pub fn is_couple(&self) -> bool {
        matches!(self, Self::Married | Self::CivilUnion)
    }

    /// Returns true when a single declarant files (single, divorced, widowed).
    pub fn is_alone(&self) -> bool {
        !self.is_couple()
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
