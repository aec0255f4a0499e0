// File: crates/rates-core/src/filter.rs
// Summary: Date-range filtering and currency projection over a dataset.

use log::warn;

use crate::dates::parse_date_key;
use crate::model::{DailyRates, DateRange, ExchangeRates};

/// Keep the dates whose key parses and falls inside `range` (inclusive).
///
/// Unparseable keys are skipped with a warning; they never fail an export.
pub fn filter_by_range(data: &ExchangeRates, range: &DateRange) -> ExchangeRates {
    let mut filtered = ExchangeRates::new();
    for (key, day) in data {
        match parse_date_key(key) {
            Some(date) if range.contains(date) => {
                filtered.insert(key.clone(), day.clone());
            }
            Some(_) => {}
            None => warn!("skipping unparseable date key: {key:?}"),
        }
    }
    filtered
}

/// Restrict each day to the selected currency codes.
///
/// `None` passes every day through unchanged. Days left without any
/// selected currency are dropped entirely, so consumers never see empty
/// objects.
pub fn project_currencies(data: &ExchangeRates, currencies: Option<&[String]>) -> ExchangeRates {
    let selection = match currencies {
        Some(selection) => selection,
        None => return data.clone(),
    };
    let mut projected = ExchangeRates::new();
    for (key, day) in data {
        let mut kept = DailyRates::new();
        for code in selection {
            if let Some(entry) = day.get(code) {
                kept.insert(code.clone(), *entry);
            }
        }
        if !kept.is_empty() {
            projected.insert(key.clone(), kept);
        }
    }
    projected
}

/// The unified pre-export path: range filter followed by projection.
pub fn filter_data(
    data: &ExchangeRates,
    range: &DateRange,
    currencies: Option<&[String]>,
) -> ExchangeRates {
    project_currencies(&filter_by_range(data, range), currencies)
}
