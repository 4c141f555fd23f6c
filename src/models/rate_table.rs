//! Yearly inflation rate table
//!
//! An immutable mapping from calendar year to the average annual inflation
//! rate for that year, in percent. A year may be present with an unknown
//! rate (e.g. the current, unfinished year).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{InflationError, InflationResult};

/// Built-in Philippine average inflation by year
const BUILTIN_RATES_JSON: &str = include_str!("../../data/inflation_by_year.json");

/// Markers accepted as "unknown rate" in CSV sources
const UNKNOWN_MARKERS: [&str; 4] = ["", "-", "—", "n/a"];

/// Annual inflation rates keyed by year
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<i32, Option<f64>>,
}

impl RateTable {
    /// The built-in Philippine data set
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data file is malformed.
    pub fn builtin() -> InflationResult<Self> {
        Self::from_json_str(BUILTIN_RATES_JSON)
    }

    /// Build a table from `(year, rate)` pairs
    pub fn from_entries<I>(entries: I) -> InflationResult<Self>
    where
        I: IntoIterator<Item = (i32, Option<f64>)>,
    {
        let mut rates = BTreeMap::new();
        for (year, rate) in entries {
            let rate = rate
                .map(|r| checked_rate(year, r))
                .transpose()
                .map_err(InflationError::RateData)?;
            rates.insert(year, rate);
        }
        Self::non_empty(rates)
    }

    /// Parse a JSON object of `"year": rate` pairs
    ///
    /// Keys that are not integers are skipped. Values that are not numbers
    /// (including `null`) mark the year's rate as unknown. Numeric rates must
    /// be above -100%.
    pub fn from_json_str(json: &str) -> InflationResult<Self> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)
            .map_err(|e| InflationError::RateData(format!("Invalid rate JSON: {}", e)))?;
        Self::from_json_map(raw)
    }

    /// Parse a JSON rate table from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> InflationResult<Self> {
        let raw: BTreeMap<String, Value> = serde_json::from_reader(reader)
            .map_err(|e| InflationError::RateData(format!("Invalid rate JSON: {}", e)))?;
        Self::from_json_map(raw)
    }

    fn from_json_map(raw: BTreeMap<String, Value>) -> InflationResult<Self> {
        let mut rates = BTreeMap::new();
        for (key, value) in raw {
            let year = match key.trim().parse::<i32>() {
                Ok(year) => year,
                Err(_) => {
                    warn!(key = %key, "skipping non-year key in rate table");
                    continue;
                }
            };
            let rate = value
                .as_f64()
                .map(|r| checked_rate(year, r))
                .transpose()
                .map_err(InflationError::RateData)?;
            rates.insert(year, rate);
        }
        Self::non_empty(rates)
    }

    /// Parse a CSV rate table with `year,rate` columns and a header row
    ///
    /// An empty rate, `-`, `—` or `n/a` marks the rate as unknown.
    pub fn from_csv_reader<R: Read>(reader: R) -> InflationResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rates = BTreeMap::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let line = idx + 2;

            let year_field = record.get(0).unwrap_or_default();
            let year: i32 = year_field.parse().map_err(|_| {
                InflationError::RateData(format!("line {}: invalid year '{}'", line, year_field))
            })?;

            let rate_field = record.get(1).unwrap_or_default();
            let rate = if UNKNOWN_MARKERS
                .iter()
                .any(|m| rate_field.eq_ignore_ascii_case(m))
            {
                None
            } else {
                let rate: f64 = rate_field.trim_end_matches('%').parse().map_err(|_| {
                    InflationError::RateData(format!(
                        "line {}: invalid rate '{}'",
                        line, rate_field
                    ))
                })?;
                Some(checked_rate(year, rate).map_err(|msg| {
                    InflationError::RateData(format!("line {}: {}", line, msg))
                })?)
            };

            if rates.insert(year, rate).is_some() {
                return Err(InflationError::RateData(format!(
                    "line {}: duplicate year {}",
                    line, year
                )));
            }
        }
        Self::non_empty(rates)
    }

    /// Load a rate table from disk, choosing the format by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> InflationResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            InflationError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let table = if is_csv {
            Self::from_csv_reader(reader)?
        } else {
            Self::from_json_reader(reader)?
        };

        debug!(
            path = %path.display(),
            years = table.len(),
            "loaded rate table"
        );
        Ok(table)
    }

    fn non_empty(rates: BTreeMap<i32, Option<f64>>) -> InflationResult<Self> {
        if rates.is_empty() {
            return Err(InflationError::RateData("rate table has no years".into()));
        }
        Ok(Self { rates })
    }

    /// All years in the table, oldest first
    pub fn years(&self) -> Vec<i32> {
        self.rates.keys().copied().collect()
    }

    /// All years in the table, most recent first
    pub fn years_desc(&self) -> Vec<i32> {
        self.rates.keys().rev().copied().collect()
    }

    /// The rate for a year, or `None` if the year is absent or its rate unknown
    pub fn rate(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied().flatten()
    }

    /// Whether the year is present in the table (even with an unknown rate)
    pub fn contains(&self, year: i32) -> bool {
        self.rates.contains_key(&year)
    }

    /// Oldest year in the table
    pub fn first_year(&self) -> i32 {
        // Tables are never empty
        self.rates.keys().next().copied().unwrap_or_default()
    }

    /// Most recent year in the table
    pub fn last_year(&self) -> i32 {
        self.rates.keys().next_back().copied().unwrap_or_default()
    }

    /// `(year, rate)` pairs, oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (i32, Option<f64>)> + '_ {
        self.rates.iter().map(|(year, rate)| (*year, *rate))
    }

    /// Number of years in the table
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Fail with `UnknownYear` if the year is not in the table
    pub fn require_year(&self, year: i32) -> InflationResult<()> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(InflationError::UnknownYear {
                year,
                first: self.first_year(),
                last: self.last_year(),
            })
        }
    }
}

/// A rate must be finite and above -100%, or the multiplier would reach zero
fn checked_rate(year: i32, rate: f64) -> Result<f64, String> {
    if !rate.is_finite() {
        return Err(format!("rate for {} is not a finite number", year));
    }
    if rate <= -100.0 {
        return Err(format!("rate for {} must be above -100%, got {}%", year, rate));
    }
    Ok(rate)
}
