use super::collapse_by_date;
use crate::error::Result;
use crate::models::Measurement;
use crate::store::ClimateStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Precipitation readings strictly after `since`, across all stations, as a
/// date → reading map.
///
/// Measurements are processed in ascending date order (stable with respect
/// to load order within a date). When several stations report the same date
/// the last reading processed wins; the result is a per-date collapse, not a
/// per-station breakdown. Absent readings are carried through as `None`.
pub fn precipitation_since(
    store: &ClimateStore,
    since: NaiveDate,
) -> Result<BTreeMap<NaiveDate, Option<f64>>> {
    let mut matching: Vec<&Measurement> = store
        .measurements()
        .iter()
        .filter(|m| m.date > since)
        .collect();
    matching.sort_by_key(|m| m.date);

    Ok(collapse_by_date(
        matching.into_iter().map(|m| (m.date, m.prcp)),
    ))
}
