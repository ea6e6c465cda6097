//! Fiscal schedules and progressive bracket tables.
//!
//! # Example
//!
//! ```
//! use impot_engine::schedule::FiscalSchedule;
//! use rust_decimal::Decimal;
//!
//! let schedule = FiscalSchedule::current();
//! assert_eq!(schedule.year(), 2024);
//! assert_eq!(schedule.income_tax(Decimal::from(11_294)), Decimal::ZERO);
//! ```

mod bracket;
mod fiscal_schedule;

pub use bracket::{BracketSegment, BracketTable};
pub use fiscal_schedule::{CURRENT_YEAR, FiscalSchedule};
