use super::collapse_by_date;
use crate::error::{ClimateError, Result};
use crate::models::Measurement;
use crate::store::ClimateStore;
use crate::utils::constants::OBSERVATION_WINDOW_DAYS;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::collections::HashMap;
use tracing::debug;

/// The station with the most measurements of any kind.
///
/// When counts tie, the lexicographically smallest station id wins. The
/// original service left the tie order to database iteration; an explicit
/// rule keeps the selection deterministic across loads.
pub fn most_active_station_id(store: &ClimateStore) -> Result<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for measurement in store.measurements() {
        *counts.entry(measurement.station_id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by(|(id_a, count_a), (id_b, count_b)| {
            count_a.cmp(count_b).then_with(|| id_b.cmp(id_a))
        })
        .map(|(id, count)| {
            debug!(station = id, measurements = count, "most active station");
            id
        })
        .ok_or_else(|| ClimateError::NotFound("no measurements in store".to_string()))
}

/// The last year of temperature readings for the most active station, as a
/// date → temperature map.
///
/// The window runs from the station's latest measurement date back 365 days,
/// inclusive at both ends. Readings are processed in descending date order
/// (stable with respect to load order within a date) and collapsed per date,
/// last processed wins. Measurements without a temperature are skipped.
pub fn active_station_observations(store: &ClimateStore) -> Result<BTreeMap<NaiveDate, f64>> {
    let station_id = most_active_station_id(store)?;

    let latest = store
        .measurements_for(station_id)
        .map(|m| m.date)
        .max()
        .ok_or_else(|| {
            ClimateError::NotFound(format!("no measurements for station '{}'", station_id))
        })?;
    let window_start = latest - Duration::days(OBSERVATION_WINDOW_DAYS);

    let mut window: Vec<&Measurement> = store
        .measurements_for(station_id)
        .filter(|m| m.date >= window_start && m.has_temperature())
        .collect();
    window.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(collapse_by_date(
        window
            .into_iter()
            .filter_map(|m| m.tobs.map(|tobs| (m.date, tobs))),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store(measurements: Vec<Measurement>) -> ClimateStore {
        let stations = ["A", "B", "C"]
            .iter()
            .map(|id| Station::new(id.to_string(), format!("Station {}", id), 21.3, -157.8, None))
            .collect();
        ClimateStore::new(stations, measurements).unwrap()
    }

    fn reading(station: &str, date_str: &str, tobs: Option<f64>) -> Measurement {
        Measurement::new(station.to_string(), date(date_str), None, tobs)
    }

    #[test]
    fn test_selects_station_with_most_measurements() {
        let mut measurements = Vec::new();
        for day in 1..=5 {
            measurements.push(reading("A", &format!("2017-01-0{}", day), Some(70.0)));
        }
        for day in 1..=3 {
            measurements.push(reading("B", &format!("2017-01-0{}", day), Some(71.0)));
        }

        let store = store(measurements);
        assert_eq!(most_active_station_id(&store).unwrap(), "A");
    }

    #[test]
    fn test_tie_breaks_to_smallest_id() {
        let store = store(vec![
            reading("C", "2017-01-01", Some(70.0)),
            reading("A", "2017-01-02", Some(70.0)),
            reading("B", "2017-01-03", Some(70.0)),
        ]);

        assert_eq!(most_active_station_id(&store).unwrap(), "A");
    }

    #[test]
    fn test_empty_store_is_not_found() {
        let store = store(vec![]);
        assert!(matches!(
            most_active_station_id(&store),
            Err(ClimateError::NotFound(_))
        ));
        assert!(matches!(
            active_station_observations(&store),
            Err(ClimateError::NotFound(_))
        ));
    }

    #[test]
    fn test_window_starts_365_days_before_latest() {
        // Latest date 2017-08-23 puts the window start at 2016-08-23.
        let store = store(vec![
            reading("A", "2017-08-23", Some(81.0)),
            reading("A", "2016-08-23", Some(77.0)),
            reading("A", "2016-08-22", Some(76.0)),
        ]);

        let series = active_station_observations(&store).unwrap();

        assert!(series.contains_key(&date("2016-08-23")));
        assert!(!series.contains_key(&date("2016-08-22")));
        assert_eq!(series[&date("2017-08-23")], 81.0);
    }

    #[test]
    fn test_only_active_station_readings_included() {
        let store = store(vec![
            reading("A", "2017-01-01", Some(70.0)),
            reading("A", "2017-01-02", Some(71.0)),
            reading("B", "2017-01-03", Some(99.0)),
        ]);

        let series = active_station_observations(&store).unwrap();

        assert!(!series.contains_key(&date("2017-01-03")));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_absent_temperatures_skipped() {
        let store = store(vec![
            reading("A", "2017-01-01", Some(70.0)),
            reading("A", "2017-01-02", None),
        ]);

        let series = active_station_observations(&store).unwrap();

        assert_eq!(series.len(), 1);
        assert!(!series.contains_key(&date("2017-01-02")));
    }

    #[test]
    fn test_duplicate_date_collapses_in_descending_order() {
        // Two same-date readings for the active station: descending stable
        // sort keeps load order within the date, so the later-loaded reading
        // survives.
        let store = store(vec![
            reading("A", "2017-01-01", Some(70.0)),
            reading("A", "2017-01-01", Some(75.0)),
            reading("A", "2017-01-02", Some(71.0)),
        ]);

        let series = active_station_observations(&store).unwrap();

        assert_eq!(series[&date("2017-01-01")], 75.0);
    }

    #[test]
    fn test_idempotent() {
        let store = store(vec![
            reading("A", "2017-01-01", Some(70.0)),
            reading("A", "2017-06-01", Some(75.0)),
        ]);

        let first = active_station_observations(&store).unwrap();
        let second = active_station_observations(&store).unwrap();

        assert_eq!(first, second);
    }
}
