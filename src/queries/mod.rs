//! Query operations over the observation snapshot.
//!
//! Each operation is a pure function of the store: no state is retained
//! across calls and nothing is mutated, so repeated calls with the same
//! input return the same result.

pub mod active_station;
pub mod precipitation;
pub mod stations;
pub mod summary;

pub use active_station::{active_station_observations, most_active_station_id};
pub use precipitation::precipitation_since;
pub use stations::station_names;
pub use summary::{temperature_summary, TemperatureSummary};

use crate::error::{ClimateError, Result};
use crate::utils::constants::DATE_FORMAT;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Parse a `YYYY-MM-DD` request date, surfacing malformed input as
/// `InvalidArgument` rather than a bare parse error.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| ClimateError::InvalidArgument(format!("malformed date '{}': {}", input, e)))
}

/// Collapse dated readings into a per-date map where the last reading
/// processed for a date wins. Callers control the processing order, which
/// determines the surviving value when dates collide.
fn collapse_by_date<V>(readings: impl IntoIterator<Item = (NaiveDate, V)>) -> BTreeMap<NaiveDate, V> {
    let mut by_date = BTreeMap::new();
    for (date, value) in readings {
        by_date.insert(date, value);
    }
    by_date
}
