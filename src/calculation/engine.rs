//! The income tax computation pipeline.

use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, ComputationResult, Household};
use crate::schedule::FiscalSchedule;

use super::{
    GrossTaxBasis, apply_quotient_cap, calculate_allowance, calculate_discount,
    calculate_exceptional_contribution, calculate_fiscal_parts, calculate_gross_tax,
    calculate_net_tax, calculate_reference_income,
};

/// Computes the income tax of households against one fiscal schedule.
///
/// The engine holds no per-household state: computing the same household
/// twice yields identical results.
#[derive(Debug, Clone, Default)]
pub struct TaxEngine {
    schedule: FiscalSchedule,
}

impl TaxEngine {
    /// Creates an engine applying `schedule`.
    pub fn new(schedule: FiscalSchedule) -> Self {
        Self { schedule }
    }

    /// Returns the schedule this engine applies.
    pub fn schedule(&self) -> &FiscalSchedule {
        &self.schedule
    }

    /// Computes the income tax of `household`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHousehold` if the household fails validation, and
    /// `ComputationError` if an amount overflows a whole-euro integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::calculation::TaxEngine;
    /// use impot_engine::models::{Household, MaritalStatus};
    ///
    /// let engine = TaxEngine::default();
    /// let household = Household::new(MaritalStatus::Single, 30_000, 0);
    ///
    /// let result = engine.compute(&household).unwrap();
    /// assert_eq!(result.reference_income, 27_000);
    /// assert_eq!(result.net_tax, 1_637);
    /// ```
    pub fn compute(&self, household: &Household) -> EngineResult<ComputationResult> {
        let status = match household.validate() {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "Household rejected");
                return Err(err);
            }
        };

        let schedule = &self.schedule;
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut step_number: u32 = 1;

        let allowance = calculate_allowance(household, status, schedule, step_number)?;
        debug!(total = allowance.total, "Allowance computed");
        steps.push(allowance.audit_step);
        step_number += 1;

        let total_income = household.total_income().map_err(|err| {
            warn!(error = %err, "Computation failed");
            err
        })?;
        let reference = calculate_reference_income(total_income, allowance.total, step_number);
        let reference_income = reference.reference_income;
        debug!(reference_income, "Reference income computed");
        steps.push(reference.audit_step);
        step_number += 1;

        let parts = calculate_fiscal_parts(household, status, step_number);
        debug!(base_parts = %parts.base_parts, parts = %parts.parts, "Fiscal parts computed");
        steps.push(parts.audit_step);
        step_number += 1;

        let surcharge =
            calculate_exceptional_contribution(reference_income, status, schedule, step_number);
        debug!(contribution = %surcharge.contribution, "Exceptional contribution computed");
        steps.push(surcharge.audit_step);
        step_number += 1;

        let declarants = calculate_gross_tax(
            reference_income,
            parts.base_parts,
            GrossTaxBasis::Declarants,
            schedule,
            step_number,
        );
        debug!(gross_tax = %declarants.gross_tax, "Gross tax on declarants' parts computed");
        steps.push(declarants.audit_step);
        step_number += 1;

        let full_household = calculate_gross_tax(
            reference_income,
            parts.parts,
            GrossTaxBasis::Household,
            schedule,
            step_number,
        );
        debug!(gross_tax = %full_household.gross_tax, "Gross tax on household parts computed");
        steps.push(full_household.audit_step);
        step_number += 1;

        let cap = apply_quotient_cap(
            declarants.gross_tax,
            full_household.gross_tax,
            parts.base_parts,
            parts.parts,
            schedule,
            step_number,
        );
        debug!(
            capped = cap.capped,
            tax_before_discount = %cap.tax_before_discount,
            "Quotient cap applied"
        );
        steps.push(cap.audit_step);
        step_number += 1;

        let discount = calculate_discount(cap.tax_before_discount, status, schedule, step_number);
        debug!(discount = %discount.discount, "Discount computed");
        steps.push(discount.audit_step);
        step_number += 1;

        let net = calculate_net_tax(
            cap.tax_before_discount,
            discount.discount,
            surcharge.contribution,
            step_number,
        )?;
        debug!(net_tax = net.net_tax, "Net tax computed");
        steps.push(net.audit_step);

        info!(
            schedule = %schedule.name(),
            marital_status = %status,
            reference_income,
            net_tax = net.net_tax,
            "Income tax computed"
        );

        Ok(ComputationResult {
            household: household.clone(),
            schedule_name: schedule.name().to_string(),
            schedule_year: schedule.year(),
            allowance: allowance.total,
            reference_income,
            fiscal_parts: parts.parts,
            gross_tax_declarants: declarants.gross_tax,
            gross_tax_household: full_household.gross_tax,
            tax_before_discount: cap.tax_before_discount,
            discount: discount.discount,
            exceptional_contribution: surcharge.contribution,
            net_tax: net.net_tax,
            audit_trace: AuditTrace { steps },
        })
    }
}
