//! Calculation logic for the income tax engine.
//!
//! Each step of the computation lives in its own module and returns its
//! value together with the audit step that records it: allowance,
//! reference income, fiscal parts, exceptional contribution, gross tax,
//! family quotient cap, discount and net tax. [`TaxEngine`] chains them.

mod allowance;
mod common;
mod discount;
mod engine;
mod fiscal_parts;
mod gross_tax;
mod net_tax;
mod quotient_cap;
mod reference_income;
mod surcharge;

pub use allowance::{AllowanceResult, calculate_allowance};
pub use common::{round_half_up, to_whole_euros};
pub use discount::{DiscountResult, calculate_discount};
pub use engine::TaxEngine;
pub use fiscal_parts::{FiscalPartsResult, calculate_fiscal_parts, child_parts};
pub use gross_tax::{GrossTaxBasis, GrossTaxResult, calculate_gross_tax};
pub use net_tax::{NetTaxResult, calculate_net_tax};
pub use quotient_cap::{QuotientCapResult, apply_quotient_cap};
pub use reference_income::{ReferenceIncomeResult, calculate_reference_income};
pub use surcharge::{SurchargeResult, calculate_exceptional_contribution};
