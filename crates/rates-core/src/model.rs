// File: crates/rates-core/src/model.rs
// Summary: Rate dataset model shared by filtering and encoding.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Largest f64 whose whole values round-trip through i64 exactly (2^53).
const MAX_SAFE_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Two-sided quote for one currency on one date.
///
/// `None` means "no quote published", not zero. Absent sides are omitted
/// from JSON entirely so re-imported documents compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_rate"
    )]
    pub buy: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_rate"
    )]
    pub sell: Option<f64>,
}

impl RateEntry {
    pub const fn new(buy: Option<f64>, sell: Option<f64>) -> Self {
        Self { buy, sell }
    }
}

/// One day's quotes, keyed by lowercase currency code (e.g. "usd").
pub type DailyRates = BTreeMap<String, RateEntry>;

/// Full dataset: textual date key -> that day's quotes.
///
/// Keys are expected to parse as calendar dates (see [`crate::dates`]);
/// unparseable keys survive in the structure and are dropped at filter
/// time. The map keeps iteration in ascending key order, which is
/// chronological for ISO keys.
pub type ExchangeRates = BTreeMap<String, DailyRates>;

/// Inclusive calendar-date interval scoping an export.
///
/// `start <= end` is assumed, not enforced; an inverted range simply
/// filters everything out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies within the closed interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Serialize whole-valued rates as JSON integers (`42000`, not `42000.0`),
/// matching the upstream feed's representation.
fn ser_rate<S>(rate: &Option<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match *rate {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_WHOLE => {
            serializer.serialize_i64(v as i64)
        }
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}
