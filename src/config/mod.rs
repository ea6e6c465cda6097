//! Schedule configuration for the income tax engine.
//!
//! This module provides functionality to load fiscal schedules from YAML
//! files: allowance and discount parameters, the family quotient cap and
//! the progressive tables.
//!
//! # Example
//!
//! ```no_run
//! use impot_engine::config::ScheduleLoader;
//!
//! let loader = ScheduleLoader::load("./config/schedules").unwrap();
//! println!("Loaded years: {:?}", loader.years());
//! ```

mod loader;
mod types;

pub use loader::ScheduleLoader;
pub use types::{
    AllowanceParameters, DiscountBand, DiscountParameters, ScheduleBrackets, ScheduleConfig,
};
