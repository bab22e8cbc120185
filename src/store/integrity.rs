use crate::models::{Measurement, Station};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub total_stations: usize,
    pub total_measurements: usize,
    pub complete_measurements: usize,
    pub missing_precipitation: usize,
    pub missing_temperature: usize,
    pub unknown_station_refs: Vec<UnknownStationRef>,
    pub duplicate_station_ids: Vec<String>,
    pub station_statistics: HashMap<String, StationStatistics>,
}

#[derive(Debug, Clone)]
pub struct UnknownStationRef {
    pub station_id: String,
    pub date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct StationStatistics {
    pub total_measurements: usize,
    pub with_precipitation: usize,
    pub with_temperature: usize,
    pub first_date: Option<chrono::NaiveDate>,
    pub last_date: Option<chrono::NaiveDate>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_station_refs.is_empty() && self.duplicate_station_ids.is_empty()
    }
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check referential integrity of a loaded record set.
    pub fn check(&self, stations: &[Station], measurements: &[Measurement]) -> IntegrityReport {
        let mut known_ids = HashSet::with_capacity(stations.len());
        let mut duplicate_station_ids = Vec::new();
        for station in stations {
            if !known_ids.insert(station.id.as_str()) {
                duplicate_station_ids.push(station.id.clone());
            }
        }

        let mut report = IntegrityReport {
            total_stations: stations.len(),
            total_measurements: measurements.len(),
            complete_measurements: 0,
            missing_precipitation: 0,
            missing_temperature: 0,
            unknown_station_refs: Vec::new(),
            duplicate_station_ids,
            station_statistics: HashMap::new(),
        };

        for measurement in measurements {
            if !known_ids.contains(measurement.station_id.as_str()) {
                report.unknown_station_refs.push(UnknownStationRef {
                    station_id: measurement.station_id.clone(),
                    date: measurement.date,
                });
            }

            if measurement.is_complete() {
                report.complete_measurements += 1;
            }
            if !measurement.has_precipitation() {
                report.missing_precipitation += 1;
            }
            if !measurement.has_temperature() {
                report.missing_temperature += 1;
            }

            let stats = report
                .station_statistics
                .entry(measurement.station_id.clone())
                .or_default();

            stats.total_measurements += 1;
            if measurement.has_precipitation() {
                stats.with_precipitation += 1;
            }
            if measurement.has_temperature() {
                stats.with_temperature += 1;
            }
            stats.first_date = Some(
                stats
                    .first_date
                    .map_or(measurement.date, |d| d.min(measurement.date)),
            );
            stats.last_date = Some(
                stats
                    .last_date
                    .map_or(measurement.date, |d| d.max(measurement.date)),
            );
        }

        report
    }

    /// Generate a summary report
    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Integrity Check Report ===\n");
        summary.push_str(&format!("Stations: {}\n", report.total_stations));
        summary.push_str(&format!("Measurements: {}\n", report.total_measurements));

        if report.total_measurements > 0 {
            summary.push_str(&format!(
                "Complete Measurements: {} ({:.1}%)\n",
                report.complete_measurements,
                100.0 * report.complete_measurements as f64 / report.total_measurements as f64
            ));
            summary.push_str(&format!(
                "Missing Precipitation: {} ({:.1}%)\n",
                report.missing_precipitation,
                100.0 * report.missing_precipitation as f64 / report.total_measurements as f64
            ));
            summary.push_str(&format!(
                "Missing Temperature: {} ({:.1}%)\n",
                report.missing_temperature,
                100.0 * report.missing_temperature as f64 / report.total_measurements as f64
            ));
        }

        summary.push_str(&format!(
            "\nUnknown Station References: {}\n",
            report.unknown_station_refs.len()
        ));

        if !report.unknown_station_refs.is_empty() {
            summary.push_str("\nTop 10 Violations:\n");
            for (i, violation) in report.unknown_station_refs.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. Station '{}' on {}\n",
                    i + 1,
                    violation.station_id,
                    violation.date
                ));
            }
        }

        if !report.duplicate_station_ids.is_empty() {
            summary.push_str(&format!(
                "\nDuplicate Station IDs: {}\n",
                report.duplicate_station_ids.join(", ")
            ));
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Station};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn station(id: &str) -> Station {
        Station::new(id.to_string(), format!("Station {}", id), 21.3, -157.8, None)
    }

    #[test]
    fn test_clean_dataset() {
        let stations = vec![station("A"), station("B")];
        let measurements = vec![
            Measurement::new("A".to_string(), date("2017-01-01"), Some(0.1), Some(70.0)),
            Measurement::new("B".to_string(), date("2017-01-02"), None, Some(72.0)),
        ];

        let report = IntegrityChecker::new().check(&stations, &measurements);

        assert!(report.is_clean());
        assert_eq!(report.total_measurements, 2);
        assert_eq!(report.complete_measurements, 1);
        assert_eq!(report.missing_precipitation, 1);
        assert_eq!(report.missing_temperature, 0);
    }

    #[test]
    fn test_unknown_station_reported() {
        let stations = vec![station("A")];
        let measurements = vec![Measurement::new(
            "Z".to_string(),
            date("2017-01-01"),
            None,
            Some(70.0),
        )];

        let report = IntegrityChecker::new().check(&stations, &measurements);

        assert!(!report.is_clean());
        assert_eq!(report.unknown_station_refs.len(), 1);
        assert_eq!(report.unknown_station_refs[0].station_id, "Z");
    }

    #[test]
    fn test_duplicate_station_ids_reported() {
        let stations = vec![station("A"), station("A")];
        let report = IntegrityChecker::new().check(&stations, &[]);

        assert!(!report.is_clean());
        assert_eq!(report.duplicate_station_ids, vec!["A".to_string()]);
    }

    #[test]
    fn test_station_statistics() {
        let stations = vec![station("A")];
        let measurements = vec![
            Measurement::new("A".to_string(), date("2017-01-03"), Some(0.1), Some(70.0)),
            Measurement::new("A".to_string(), date("2017-01-01"), None, Some(71.0)),
        ];

        let report = IntegrityChecker::new().check(&stations, &measurements);
        let stats = &report.station_statistics["A"];

        assert_eq!(stats.total_measurements, 2);
        assert_eq!(stats.with_precipitation, 1);
        assert_eq!(stats.first_date, Some(date("2017-01-01")));
        assert_eq!(stats.last_date, Some(date("2017-01-03")));
    }

    #[test]
    fn test_summary_lists_violations() {
        let stations = vec![station("A")];
        let measurements = vec![Measurement::new(
            "Z".to_string(),
            date("2017-01-01"),
            None,
            None,
        )];

        let checker = IntegrityChecker::new();
        let report = checker.check(&stations, &measurements);
        let summary = checker.generate_summary(&report);

        assert!(summary.contains("Unknown Station References: 1"));
        assert!(summary.contains("Station 'Z' on 2017-01-01"));
    }
}
