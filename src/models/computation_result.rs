//! Computation result models for the income tax engine.
//!
//! This module contains the [`ComputationResult`] type, which captures every
//! intermediate and final quantity of a tax computation together with an
//! audit trace of the rules that produced them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Household;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the tax code article for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit trace of a computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete result of an income tax computation.
///
/// A result is only ever built once the whole pipeline has run, so every
/// field is populated. Amounts declared as `i64` are whole euros; the
/// `Decimal` tax figures are whole euros as well for the built-in schedules
/// but keep decimal precision for schedules with fractional cap amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// The household the computation was run for.
    pub household: Household,
    /// Name of the fiscal schedule applied.
    pub schedule_name: String,
    /// Year of the fiscal schedule applied.
    pub schedule_year: i32,
    /// Total allowance deducted from net income.
    pub allowance: i64,
    /// Fiscal reference income (net income minus allowance, floored at 0).
    pub reference_income: i64,
    /// Fiscal parts of the household, children included.
    pub fiscal_parts: Decimal,
    /// Gross tax computed on the declarants' own parts.
    pub gross_tax_declarants: Decimal,
    /// Gross tax computed on the full household's parts.
    pub gross_tax_household: Decimal,
    /// Gross tax after the family quotient cap, before the discount.
    pub tax_before_discount: Decimal,
    /// Discount (décote) granted on low tax amounts.
    pub discount: Decimal,
    /// Exceptional contribution on high incomes.
    pub exceptional_contribution: Decimal,
    /// Final tax owed, never negative.
    pub net_tax: i64,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl ComputationResult {
    /// Renders the fixed-format diagnostic report.
    ///
    /// The report is meant for terminals and logs; it is not a stable
    /// machine-readable format.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComputationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let household = &self.household;
        let status = household
            .marital_status
            .map(|s| s.label())
            .unwrap_or("-");

        writeln!(f, "Income tax computation ({}):", self.schedule_name)?;
        writeln!(f, "--------------------------------------------------")?;
        writeln!(f, "Net income declarant 1 : {}", household.income_declarant1)?;
        writeln!(f, "Net income declarant 2 : {}", household.income_declarant2)?;
        writeln!(f, "Marital status : {}", status)?;
        writeln!(f, "Allowance : {}", self.allowance)?;
        writeln!(f, "Fiscal reference income : {}", self.reference_income)?;
        writeln!(f, "Dependent children : {}", household.dependent_children)?;
        writeln!(f, "Disabled children : {}", household.disabled_children)?;
        writeln!(f, "Isolated parent : {}", household.isolated_parent)?;
        writeln!(f, "Fiscal parts : {:.1}", self.fiscal_parts)?;
        writeln!(
            f,
            "Exceptional contribution on high incomes : {}",
            self.exceptional_contribution.normalize()
        )?;
        writeln!(
            f,
            "Gross tax, declarants only : {}",
            self.gross_tax_declarants.normalize()
        )?;
        writeln!(
            f,
            "Gross tax, full household : {}",
            self.gross_tax_household.normalize()
        )?;
        writeln!(
            f,
            "Tax after quotient cap, before discount : {}",
            self.tax_before_discount.normalize()
        )?;
        writeln!(f, "Discount : {}", self.discount.normalize())?;
        writeln!(f, "Net income tax : {}", self.net_tax)
    }
}
