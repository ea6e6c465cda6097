//! Core data models for the income tax engine.
//!
//! This module contains the household declaration, the marital status
//! enumeration and the computation result.

mod computation_result;
mod household;
mod marital_status;

pub use computation_result::{AuditStep, AuditTrace, ComputationResult};
pub use household::{Household, MAX_DEPENDENT_CHILDREN};
pub use marital_status::MaritalStatus;
