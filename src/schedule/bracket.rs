//! Progressive bracket tables.
//!
//! A [`BracketTable`] is an ordered list of [`BracketSegment`]s. The amount
//! owed on a value is the sum of what each segment takes from the part of
//! the value that falls inside `[lower_bound, upper_bound)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rate segment of a progressive table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSegment {
    /// Inclusive lower bound of the segment.
    pub lower_bound: Decimal,
    /// Exclusive upper bound; `None` means the segment is unbounded.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied inside the segment, between 0 and 1.
    pub rate: Decimal,
}

impl BracketSegment {
    /// Creates a segment.
    pub fn new(lower_bound: Decimal, upper_bound: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Returns what this segment takes from `value`.
    ///
    /// Values at or below the lower bound contribute nothing.
    pub fn amount_for(&self, value: Decimal) -> Decimal {
        if value <= self.lower_bound {
            return Decimal::ZERO;
        }
        let top = match self.upper_bound {
            Some(upper) => value.min(upper),
            None => value,
        };
        (top - self.lower_bound) * self.rate
    }
}

/// An ordered sequence of segments forming a progressive table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable {
    segments: Vec<BracketSegment>,
}

impl BracketTable {
    /// Creates a table from its segments, lowest first.
    pub fn new(segments: Vec<BracketSegment>) -> Self {
        Self { segments }
    }

    /// Returns the segments of the table.
    pub fn segments(&self) -> &[BracketSegment] {
        &self.segments
    }

    /// Computes the amount owed on `value` across all segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use impot_engine::schedule::{BracketSegment, BracketTable};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let table = BracketTable::new(vec![
    ///     BracketSegment::new(Decimal::ZERO, Some(Decimal::from(100)), Decimal::ZERO),
    ///     BracketSegment::new(Decimal::from(100), None, Decimal::from_str("0.5").unwrap()),
    /// ]);
    /// assert_eq!(table.compute_amount(Decimal::from(300)), Decimal::from(100));
    /// ```
    pub fn compute_amount(&self, value: Decimal) -> Decimal {
        self.segments.iter().map(|s| s.amount_for(value)).sum()
    }

    /// Checks that the table is a well-formed progressive table.
    ///
    /// The first segment starts at zero, each segment starts where the
    /// previous one ends, only the last one may be unbounded and every rate
    /// lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        let first = self.segments.first().ok_or("table has no segments")?;
        if !first.lower_bound.is_zero() {
            return Err(format!(
                "first segment starts at {} instead of 0",
                first.lower_bound
            ));
        }

        let last_index = self.segments.len() - 1;
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.rate < Decimal::ZERO || segment.rate > Decimal::ONE {
                return Err(format!(
                    "segment {} has rate {} outside [0, 1]",
                    index, segment.rate
                ));
            }
            match segment.upper_bound {
                Some(upper) if upper <= segment.lower_bound => {
                    return Err(format!(
                        "segment {} has upper bound {} not above lower bound {}",
                        index, upper, segment.lower_bound
                    ));
                }
                None if index != last_index => {
                    return Err(format!("segment {} is unbounded but not last", index));
                }
                _ => {}
            }
            if index > 0 {
                let previous = &self.segments[index - 1];
                if previous.upper_bound != Some(segment.lower_bound) {
                    return Err(format!(
                        "segment {} starts at {} but segment {} ends at {:?}",
                        index,
                        segment.lower_bound,
                        index - 1,
                        previous.upper_bound
                    ));
                }
            }
        }

        Ok(())
    }
}
