//! Simulator facade.
//!
//! Front-ends that declare a household one field at a time and then read
//! the outcome back go through [`TaxCalculator`]. [`Simulator`] keeps the
//! last result so its accessors can be called repeatedly.

mod calculator;
mod legacy;

pub use calculator::{Simulator, TaxCalculator};
pub use legacy::LegacyMaritalStatus;
