//! Configuration types for fiscal schedules.
//!
//! This module contains the strongly-typed structures deserialized from
//! YAML schedule files. They carry raw parameters only; a
//! [`FiscalSchedule`](crate::schedule::FiscalSchedule) is built from them
//! once they have been validated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::BracketTable;

/// Flat-rate allowance deducted from each declarant's net income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceParameters {
    /// Fraction of net income granted as allowance (e.g. 0.10).
    pub rate: Decimal,
    /// Lowest allowance granted per declarant.
    pub minimum: Decimal,
    /// Highest allowance granted per declarant.
    pub maximum: Decimal,
}

/// Discount parameters for one household kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBand {
    /// Tax amount from which no discount is granted.
    pub threshold: Decimal,
    /// Discount base before the rate is applied.
    pub cap: Decimal,
}

/// Discount (décote) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountParameters {
    /// Rate applied to the tax before discount.
    pub rate: Decimal,
    /// Parameters for single declarants.
    pub single: DiscountBand,
    /// Parameters for couples.
    pub couple: DiscountBand,
}

/// The three progressive tables of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBrackets {
    /// Income tax brackets, applied per fiscal part.
    pub income_tax: BracketTable,
    /// Exceptional contribution brackets for single declarants.
    pub surcharge_single: BracketTable,
    /// Exceptional contribution brackets for couples.
    pub surcharge_couple: BracketTable,
}

/// A complete schedule file.
///
/// # Example
///
/// ```
/// use impot_engine::config::ScheduleConfig;
///
/// let yaml = r#"
/// name: "Barème test"
/// year: 2030
/// allowance: { rate: "0.10", minimum: 500, maximum: 15000 }
/// discount:
///   rate: "0.45"
///   single: { threshold: 2000, cap: 900 }
///   couple: { threshold: 3300, cap: 1500 }
/// half_part_cap: 1800
/// brackets:
///   income_tax:
///     - { lower_bound: 0, upper_bound: 12000, rate: "0" }
///     - { lower_bound: 12000, rate: "0.2" }
///   surcharge_single:
///     - { lower_bound: 0, rate: "0" }
///   surcharge_couple:
///     - { lower_bound: 0, rate: "0" }
/// "#;
///
/// let config: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.year, 2030);
/// assert_eq!(config.brackets.income_tax.segments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Human-readable name of the schedule.
    pub name: String,
    /// Year the schedule applies to.
    pub year: i32,
    /// Allowance parameters.
    pub allowance: AllowanceParameters,
    /// Discount parameters.
    pub discount: DiscountParameters,
    /// Maximum tax reduction granted per extra half part.
    pub half_part_cap: Decimal,
    /// Progressive tables.
    pub brackets: ScheduleBrackets,
}
