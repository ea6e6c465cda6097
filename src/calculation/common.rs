//! Rounding and conversion helpers shared by the pipeline steps.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds a value to a whole euro, halves away from zero.
///
/// Every rounding point of the computation goes through this function.
///
/// # Examples
///
/// ```
/// use impot_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("1727.5").unwrap()), Decimal::from(1728));
/// assert_eq!(round_half_up(Decimal::from_str("91.08").unwrap()), Decimal::from(91));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value and converts it to a whole-euro integer.
///
/// # Errors
///
/// Returns `ComputationError` when the rounded value does not fit in an `i64`.
pub fn to_whole_euros(value: Decimal, quantity: &str) -> EngineResult<i64> {
    i64::try_from(round_half_up(value)).map_err(|err| {
        EngineError::computation(
            format!("{} {} does not fit in a whole-euro amount", quantity, value),
            err,
        )
    })
}
