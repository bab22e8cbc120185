use crate::error::{ClimateError, Result};
use crate::store::ClimateStore;
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregate temperature statistics over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min_temp: f64,
    pub avg_temp: f64,
    pub max_temp: f64,
}

/// Min/avg/max temperature over all readings with `date >= start` (and
/// `date <= end` when given, inclusive).
///
/// This is a single aggregate across the whole filtered range. The original
/// service grouped readings per date and filled the three output slots from
/// the first three grouped rows by position, which does not implement its
/// stated contract; that variant is deliberately not reproduced.
pub fn temperature_summary(
    store: &ClimateStore,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<TemperatureSummary> {
    if let Some(end) = end {
        if start > end {
            return Err(ClimateError::InvalidArgument(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
    }

    let mut min_temp = f64::INFINITY;
    let mut max_temp = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for measurement in store.measurements() {
        if measurement.date < start {
            continue;
        }
        if let Some(end) = end {
            if measurement.date > end {
                continue;
            }
        }
        if let Some(tobs) = measurement.tobs {
            min_temp = min_temp.min(tobs);
            max_temp = max_temp.max(tobs);
            sum += tobs;
            count += 1;
        }
    }

    if count == 0 {
        return Err(ClimateError::NotFound(format!(
            "no temperature readings on or after {}",
            start
        )));
    }

    Ok(TemperatureSummary {
        min_temp,
        avg_temp: sum / count as f64,
        max_temp,
    })
}
