//! French personal income tax engine
//!
//! This crate computes the income tax owed by a household from its
//! declared net incomes, marital status and children: allowance, fiscal
//! reference income, family quotient with its cap, discount and the
//! exceptional contribution on high incomes. Every computation carries an
//! audit trace of the rules applied.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod simulator;
