//! Inflation multiplier service
//!
//! Converts an amount between two years by compounding the annual rates of
//! every year after the earlier one, up to and including the later one.

use serde::Serialize;
use tracing::debug;

use crate::error::{InflationError, InflationResult};
use crate::models::{parse_amount, Direction, RateTable, YearPair};

/// How a spanned year with no recorded rate is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRatePolicy {
    /// Count the year as 0% inflation
    #[default]
    TreatAsZero,
    /// Fail with `InflationError::MissingRate`
    Reject,
}

/// Informational conditions that are not errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Both years are the same, so nothing changes
    SameYear,
}

/// The result of converting an amount between two years
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub from_year: i32,
    pub to_year: i32,
    /// Cumulative growth factor over the span
    pub multiplier: f64,
    pub final_amount: f64,
    /// Percent change from `amount` to `final_amount`
    pub percent_change: f64,
}

impl Conversion {
    pub fn years(&self) -> YearPair {
        YearPair::new(self.from_year, self.to_year)
    }

    pub fn direction(&self) -> Direction {
        self.years().direction()
    }

    /// True for a rise or no change, false for a fall
    pub fn is_increase(&self) -> bool {
        self.percent_change >= 0.0
    }

    pub fn advisory(&self) -> Option<Advisory> {
        (self.from_year == self.to_year).then_some(Advisory::SameYear)
    }
}

/// Computes multipliers and conversions over a rate table
pub struct MultiplierEngine<'a> {
    table: &'a RateTable,
    policy: MissingRatePolicy,
}

impl<'a> MultiplierEngine<'a> {
    /// Create an engine that counts unknown rates as 0%
    pub fn new(table: &'a RateTable) -> Self {
        Self {
            table,
            policy: MissingRatePolicy::default(),
        }
    }

    /// Set how unknown rates inside a span are handled
    pub fn with_missing_rate_policy(mut self, policy: MissingRatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cumulative multiplier between two years
    ///
    /// The product of `1 + rate / 100` for every year after the earlier year
    /// up to and including the later one, in ascending order. The order of
    /// the years does not change the result.
    pub fn multiplier(&self, from_year: i32, to_year: i32) -> InflationResult<f64> {
        self.table.require_year(from_year)?;
        self.table.require_year(to_year)?;

        if from_year == to_year {
            return Ok(1.0);
        }

        let (start, end) = YearPair::new(from_year, to_year).span();
        let mut multiplier = 1.0;
        for year in (start + 1)..=end {
            let rate = match self.table.rate(year) {
                Some(rate) => rate,
                None => match self.policy {
                    MissingRatePolicy::TreatAsZero => {
                        debug!(year, "no inflation rate recorded, counting as 0%");
                        0.0
                    }
                    MissingRatePolicy::Reject => return Err(InflationError::MissingRate(year)),
                },
            };
            multiplier *= 1.0 + rate / 100.0;
        }

        debug!(start, end, multiplier, "computed cumulative multiplier");
        Ok(multiplier)
    }

    /// Convert an already-parsed amount between two years
    pub fn compute_amount(
        &self,
        amount: f64,
        from_year: i32,
        to_year: i32,
    ) -> InflationResult<Conversion> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InflationError::invalid_amount(amount.to_string()));
        }

        let multiplier = self.multiplier(from_year, to_year)?;
        let final_amount = match YearPair::new(from_year, to_year).direction() {
            Direction::Forward => amount * multiplier,
            Direction::Backward => amount / multiplier,
            Direction::Unchanged => amount,
        };

        let percent_change = if amount == 0.0 {
            0.0
        } else {
            ((final_amount - amount) / amount) * 100.0
        };

        if !final_amount.is_finite() || !percent_change.is_finite() {
            return Err(InflationError::NotComputable(format!(
                "{} converted from {} to {} is out of range",
                amount, from_year, to_year
            )));
        }

        Ok(Conversion {
            amount,
            from_year,
            to_year,
            multiplier,
            final_amount,
            percent_change,
        })
    }

    /// Parse a raw amount input and convert it between two years
    ///
    /// Accepts grouping separators and a peso prefix, see [`parse_amount`].
    pub fn compute(
        &self,
        amount_input: &str,
        from_year: i32,
        to_year: i32,
    ) -> InflationResult<Conversion> {
        let amount = parse_amount(amount_input)?;
        self.compute_amount(amount, from_year, to_year)
    }
}
