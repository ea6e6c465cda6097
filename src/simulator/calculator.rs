//! The stateful calculator interface and its implementation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::TaxEngine;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComputationResult, Household, MaritalStatus};

use super::LegacyMaritalStatus;

/// A calculator filled field by field, then asked for the tax.
///
/// Setters never validate; the household is checked when
/// [`compute_net_tax`](TaxCalculator::compute_net_tax) runs. Accessors read
/// the last successful computation and fail with `NoResultAvailable`
/// when there is none.
pub trait TaxCalculator {
    /// Sets the net income of the first declarant.
    fn set_income_declarant1(&mut self, income: i64);
    /// Sets the net income of the second declarant.
    fn set_income_declarant2(&mut self, income: i64);
    /// Sets the marital status.
    fn set_marital_status(&mut self, status: Option<MaritalStatus>);
    /// Sets the number of dependent children.
    fn set_dependent_children(&mut self, children: i32);
    /// Sets the number of disabled children.
    fn set_disabled_children(&mut self, children: i32);
    /// Sets whether the declarant raises the children alone.
    fn set_isolated_parent(&mut self, isolated: bool);

    /// Returns the declared net income of the first declarant.
    fn income_declarant1(&self) -> i64;
    /// Returns the declared net income of the second declarant.
    fn income_declarant2(&self) -> i64;

    /// Runs the computation and retains its result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHousehold` for inconsistent inputs and
    /// `ComputationError` for internal failures.
    fn compute_net_tax(&mut self) -> EngineResult<ComputationResult>;

    /// Returns the last computed result.
    fn result(&self) -> EngineResult<&ComputationResult>;

    /// Total allowance of the last computation.
    fn allowance(&self) -> EngineResult<i64> {
        Ok(self.result()?.allowance)
    }

    /// Reference income of the last computation.
    fn reference_income(&self) -> EngineResult<i64> {
        Ok(self.result()?.reference_income)
    }

    /// Fiscal parts of the last computation.
    fn fiscal_parts(&self) -> EngineResult<Decimal> {
        Ok(self.result()?.fiscal_parts)
    }

    /// Tax before discount of the last computation.
    fn tax_before_discount(&self) -> EngineResult<Decimal> {
        Ok(self.result()?.tax_before_discount)
    }

    /// Discount of the last computation.
    fn discount(&self) -> EngineResult<Decimal> {
        Ok(self.result()?.discount)
    }

    /// Exceptional contribution of the last computation.
    fn exceptional_contribution(&self) -> EngineResult<Decimal> {
        Ok(self.result()?.exceptional_contribution)
    }

    /// Net tax of the last computation.
    fn net_tax(&self) -> EngineResult<i64> {
        Ok(self.result()?.net_tax)
    }

    /// Renders the report of the last computation.
    fn render_result(&self) -> EngineResult<String> {
        Ok(self.result()?.render())
    }
}

/// The default [`TaxCalculator`], backed by a [`TaxEngine`].
///
/// # Examples
///
/// ```
/// use impot_engine::models::MaritalStatus;
/// use impot_engine::simulator::{Simulator, TaxCalculator};
///
/// let mut simulator = Simulator::default();
/// simulator.set_income_declarant1(30_000);
/// simulator.set_marital_status(Some(MaritalStatus::Single));
///
/// simulator.compute_net_tax().unwrap();
/// assert_eq!(simulator.net_tax().unwrap(), 1_637);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    engine: TaxEngine,
    household: Household,
    last_result: Option<ComputationResult>,
}

impl Simulator {
    /// Creates a simulator computing with `engine`.
    pub fn new(engine: TaxEngine) -> Self {
        Self {
            engine,
            household: Household::default(),
            last_result: None,
        }
    }

    /// Returns the household as currently declared.
    pub fn household(&self) -> &Household {
        &self.household
    }

    /// Sets the marital status from a legacy code.
    pub fn set_legacy_marital_status(&mut self, status: Option<LegacyMaritalStatus>) {
        self.set_marital_status(status.map(MaritalStatus::from));
    }

    fn update(&mut self, apply: impl FnOnce(&mut Household)) {
        apply(&mut self.household);
        self.last_result = None;
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(TaxEngine::default())
    }
}

impl TaxCalculator for Simulator {
    fn set_income_declarant1(&mut self, income: i64) {
        self.update(|h| h.income_declarant1 = income);
    }

    fn set_income_declarant2(&mut self, income: i64) {
        self.update(|h| h.income_declarant2 = income);
    }

    fn set_marital_status(&mut self, status: Option<MaritalStatus>) {
        self.update(|h| h.marital_status = status);
    }

    fn set_dependent_children(&mut self, children: i32) {
        self.update(|h| h.dependent_children = children);
    }

    fn set_disabled_children(&mut self, children: i32) {
        self.update(|h| h.disabled_children = children);
    }

    fn set_isolated_parent(&mut self, isolated: bool) {
        self.update(|h| h.isolated_parent = isolated);
    }

    fn income_declarant1(&self) -> i64 {
        self.household.income_declarant1
    }

    fn income_declarant2(&self) -> i64 {
        self.household.income_declarant2
    }

    fn compute_net_tax(&mut self) -> EngineResult<ComputationResult> {
        self.last_result = None;
        let result = self.engine.compute(&self.household)?;
        debug!(net_tax = result.net_tax, "Simulator result stored");
        self.last_result = Some(result.clone());
        Ok(result)
    }

    fn result(&self) -> EngineResult<&ComputationResult> {
        self.last_result
            .as_ref()
            .ok_or(EngineError::NoResultAvailable)
    }
}
