//! Fiscal schedules.
//!
//! A [`FiscalSchedule`] bundles every statutory parameter of one tax year:
//! the allowance, the discount, the family quotient cap and the three
//! progressive tables. Schedules are validated once when built and are
//! immutable afterwards, so they can be shared freely between callers.

use rust_decimal::Decimal;

use crate::calculation::round_half_up;
use crate::config::{
    AllowanceParameters, DiscountBand, DiscountParameters, ScheduleBrackets, ScheduleConfig,
};
use crate::error::{EngineError, EngineResult};

use super::{BracketSegment, BracketTable};

/// The year of the most recent built-in schedule.
pub const CURRENT_YEAR: i32 = 2024;

/// A validated, immutable set of tax parameters for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalSchedule {
    config: ScheduleConfig,
}

impl FiscalSchedule {
    /// Builds a schedule from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` if a rate is outside `[0, 1]`, an amount is
    /// negative, the allowance bounds are inverted, a discount band could
    /// yield a negative discount, or a bracket table is malformed.
    pub fn new(config: ScheduleConfig) -> EngineResult<Self> {
        let schedule = Self { config };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Returns the built-in schedule for a year.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleNotFound` when no schedule is built in for `year`.
    pub fn for_year(year: i32) -> EngineResult<Self> {
        match year {
            2024 => Ok(Self::year_2024()),
            _ => Err(EngineError::ScheduleNotFound { year }),
        }
    }

    /// Returns the built-in schedule of the current year.
    pub fn current() -> Self {
        Self::year_2024()
    }

    /// The 2024 schedule, applied to 2023 income.
    pub fn year_2024() -> Self {
        let euros = |v: i64| Decimal::from(v);
        let rate = |mantissa: i64, scale: u32| Decimal::new(mantissa, scale);
        let segment = |lower: i64, upper: Option<i64>, r: Decimal| {
            BracketSegment::new(euros(lower), upper.map(euros), r)
        };

        Self {
            config: ScheduleConfig {
                name: "Barème 2024".to_string(),
                year: 2024,
                allowance: AllowanceParameters {
                    rate: rate(10, 2),
                    minimum: euros(495),
                    maximum: euros(14171),
                },
                discount: DiscountParameters {
                    rate: rate(4525, 4),
                    single: DiscountBand {
                        threshold: euros(1929),
                        cap: euros(873),
                    },
                    couple: DiscountBand {
                        threshold: euros(3191),
                        cap: euros(1444),
                    },
                },
                half_part_cap: euros(1759),
                brackets: ScheduleBrackets {
                    income_tax: BracketTable::new(vec![
                        segment(0, Some(11294), Decimal::ZERO),
                        segment(11294, Some(28797), rate(11, 2)),
                        segment(28797, Some(82341), rate(30, 2)),
                        segment(82341, Some(177106), rate(41, 2)),
                        segment(177106, None, rate(45, 2)),
                    ]),
                    surcharge_single: BracketTable::new(vec![
                        segment(0, Some(250_000), Decimal::ZERO),
                        segment(250_000, Some(500_000), rate(3, 2)),
                        segment(500_000, Some(1_000_000), rate(4, 2)),
                        segment(1_000_000, None, rate(4, 2)),
                    ]),
                    surcharge_couple: BracketTable::new(vec![
                        segment(0, Some(500_000), Decimal::ZERO),
                        segment(500_000, Some(1_000_000), rate(3, 2)),
                        segment(1_000_000, None, rate(4, 2)),
                    ]),
                },
            },
        }
    }

    fn validate(&self) -> EngineResult<()> {
        let c = &self.config;
        let invalid = |message: String| EngineError::InvalidSchedule {
            name: c.name.clone(),
            message,
        };
        let unit_range = |value: Decimal| value >= Decimal::ZERO && value <= Decimal::ONE;

        if c.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if !unit_range(c.allowance.rate) {
            return Err(invalid(format!(
                "allowance rate {} outside [0, 1]",
                c.allowance.rate
            )));
        }
        if c.allowance.minimum < Decimal::ZERO || c.allowance.minimum > c.allowance.maximum {
            return Err(invalid(format!(
                "allowance bounds [{}, {}] are inconsistent",
                c.allowance.minimum, c.allowance.maximum
            )));
        }
        if !unit_range(c.discount.rate) {
            return Err(invalid(format!(
                "discount rate {} outside [0, 1]",
                c.discount.rate
            )));
        }
        for (kind, band) in [("single", &c.discount.single), ("couple", &c.discount.couple)] {
            if band.threshold < Decimal::ZERO || band.cap < Decimal::ZERO {
                return Err(invalid(format!("{} discount amounts are negative", kind)));
            }
            // The discount shrinks as the tax grows: it must still be
            // non-negative just below the threshold.
            if band.cap < band.threshold * c.discount.rate {
                return Err(invalid(format!(
                    "{} discount cap {} is below threshold {} x rate {}",
                    kind, band.cap, band.threshold, c.discount.rate
                )));
            }
        }
        if c.half_part_cap < Decimal::ZERO {
            return Err(invalid(format!(
                "half part cap {} is negative",
                c.half_part_cap
            )));
        }
        for (table_name, table) in [
            ("income_tax", &c.brackets.income_tax),
            ("surcharge_single", &c.brackets.surcharge_single),
            ("surcharge_couple", &c.brackets.surcharge_couple),
        ] {
            table
                .validate()
                .map_err(|message| invalid(format!("{} brackets: {}", table_name, message)))?;
        }

        Ok(())
    }

    /// Returns the schedule name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the year the schedule applies to.
    pub fn year(&self) -> i32 {
        self.config.year
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the maximum reduction granted per extra half part.
    pub fn half_part_cap(&self) -> Decimal {
        self.config.half_part_cap
    }

    /// Computes the allowance granted on one declarant's net income.
    ///
    /// The rate is applied, then clamped to the schedule bounds; amounts
    /// inside the bounds are rounded to a whole euro.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::schedule::FiscalSchedule;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = FiscalSchedule::year_2024();
    /// assert_eq!(schedule.allowance(30_000), Decimal::from(3_000));
    /// assert_eq!(schedule.allowance(0), Decimal::from(495));
    /// assert_eq!(schedule.allowance(1_000_000), Decimal::from(14_171));
    /// ```
    pub fn allowance(&self, net_income: i64) -> Decimal {
        let params = &self.config.allowance;
        let allowance = Decimal::from(net_income) * params.rate;
        if allowance < params.minimum {
            params.minimum
        } else if allowance > params.maximum {
            params.maximum
        } else {
            round_half_up(allowance)
        }
    }

    /// Applies the income tax table to a per-part income (unrounded).
    pub fn income_tax(&self, per_part_income: Decimal) -> Decimal {
        self.config.brackets.income_tax.compute_amount(per_part_income)
    }

    /// Applies the exceptional contribution table (unrounded).
    pub fn surcharge(&self, reference_income: Decimal, is_couple: bool) -> Decimal {
        let table = if is_couple {
            &self.config.brackets.surcharge_couple
        } else {
            &self.config.brackets.surcharge_single
        };
        table.compute_amount(reference_income)
    }

    /// Computes the discount (décote) granted on a tax amount.
    ///
    /// No discount is granted on a non-positive tax or from the threshold
    /// upward. The discount never exceeds the tax it reduces.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::schedule::FiscalSchedule;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = FiscalSchedule::year_2024();
    /// assert_eq!(schedule.discount(Decimal::from(1728), false), Decimal::from(91));
    /// assert_eq!(schedule.discount(Decimal::from(1929), false), Decimal::ZERO);
    /// ```
    pub fn discount(&self, tax_before_discount: Decimal, is_couple: bool) -> Decimal {
        let params = &self.config.discount;
        let band = if is_couple {
            &params.couple
        } else {
            &params.single
        };

        if tax_before_discount <= Decimal::ZERO || tax_before_discount >= band.threshold {
            return Decimal::ZERO;
        }

        let discount = round_half_up(band.cap - tax_before_discount * params.rate);
        discount.min(tax_before_discount)
    }
}

impl Default for FiscalSchedule {
    fn default() -> Self {
        Self::current()
    }
}
