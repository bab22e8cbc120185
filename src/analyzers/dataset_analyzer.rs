use crate::error::{ClimateError, Result};
use crate::store::ClimateStore;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct DatasetStatistics {
    pub total_stations: usize,
    pub total_measurements: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub temperature_stats: TemperatureStats,
    pub coverage: CoverageStats,
    pub busiest_station: Option<(String, usize)>,
}

#[derive(Debug)]
pub struct TemperatureStats {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub min_temp_location: String,
    pub max_temp_location: String,
}

#[derive(Debug)]
pub struct CoverageStats {
    pub total_measurements: usize,
    pub with_precipitation: usize,
    pub with_temperature: usize,
    pub complete_measurements: usize,
}

impl CoverageStats {
    pub fn precipitation_percentage(&self) -> f64 {
        (self.with_precipitation as f64 / self.total_measurements as f64) * 100.0
    }

    pub fn temperature_percentage(&self) -> f64 {
        (self.with_temperature as f64 / self.total_measurements as f64) * 100.0
    }

    pub fn complete_percentage(&self) -> f64 {
        (self.complete_measurements as f64 / self.total_measurements as f64) * 100.0
    }
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, store: &ClimateStore) -> Result<DatasetStatistics> {
        let measurements = store.measurements();
        if measurements.is_empty() {
            return Err(ClimateError::NotFound(
                "no measurements to analyze".to_string(),
            ));
        }

        let mut min_date = measurements[0].date;
        let mut max_date = measurements[0].date;
        let mut min_temp = f64::INFINITY;
        let mut max_temp = f64::NEG_INFINITY;
        let mut temp_sum = 0.0;
        let mut temp_count = 0usize;
        let mut min_temp_location = String::new();
        let mut max_temp_location = String::new();

        let mut with_precipitation = 0;
        let mut with_temperature = 0;
        let mut complete_measurements = 0;

        let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();

        for measurement in measurements {
            if measurement.date < min_date {
                min_date = measurement.date;
            }
            if measurement.date > max_date {
                max_date = measurement.date;
            }

            *counts
                .entry(measurement.station_id.as_str())
                .or_default() += 1;

            if let Some(tobs) = measurement.tobs {
                if tobs < min_temp {
                    min_temp = tobs;
                    min_temp_location =
                        format!("{} ({})", measurement.station_id, measurement.date);
                }
                if tobs > max_temp {
                    max_temp = tobs;
                    max_temp_location =
                        format!("{} ({})", measurement.station_id, measurement.date);
                }
                temp_sum += tobs;
                temp_count += 1;
            }

            if measurement.has_precipitation() {
                with_precipitation += 1;
            }
            if measurement.has_temperature() {
                with_temperature += 1;
            }
            if measurement.is_complete() {
                complete_measurements += 1;
            }
        }

        let avg_temp = if temp_count > 0 {
            temp_sum / temp_count as f64
        } else {
            f64::NAN
        };
        if min_temp == f64::INFINITY {
            min_temp = f64::NAN;
            min_temp_location = "No temperature readings".to_string();
        }
        if max_temp == f64::NEG_INFINITY {
            max_temp = f64::NAN;
            max_temp_location = "No temperature readings".to_string();
        }

        let busiest_station = counts
            .into_iter()
            .max_by(|(id_a, count_a), (id_b, count_b)| {
                count_a.cmp(count_b).then_with(|| id_b.cmp(id_a))
            })
            .map(|(id, count)| (id.to_string(), count));

        Ok(DatasetStatistics {
            total_stations: store.stations().len(),
            total_measurements: measurements.len(),
            date_range: (min_date, max_date),
            temperature_stats: TemperatureStats {
                min_temp,
                max_temp,
                avg_temp,
                min_temp_location,
                max_temp_location,
            },
            coverage: CoverageStats {
                total_measurements: measurements.len(),
                with_precipitation,
                with_temperature,
                complete_measurements,
            },
            busiest_station,
        })
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        let temp_range = if self.temperature_stats.min_temp.is_nan()
            || self.temperature_stats.max_temp.is_nan()
        {
            "No temperature readings".to_string()
        } else {
            format!(
                "{:.1}°F to {:.1}°F",
                self.temperature_stats.min_temp, self.temperature_stats.max_temp
            )
        };

        let busiest = self
            .busiest_station
            .as_ref()
            .map(|(id, count)| format!("{} ({} measurements)", id, count))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Stations: {}\n\
            Measurements: {} total\n\
            Date Range: {} to {}\n\
            Coverage: {:.1}% precipitation, {:.1}% temperature, {:.1}% complete\n\
            Temperature Range: {}\n\
            Busiest Station: {}",
            self.total_stations,
            self.total_measurements,
            self.date_range.0,
            self.date_range.1,
            self.coverage.precipitation_percentage(),
            self.coverage.temperature_percentage(),
            self.coverage.complete_percentage(),
            temp_range,
            busiest
        )
    }

    pub fn detailed_summary(&self) -> String {
        let coldest = if self.temperature_stats.min_temp.is_nan() {
            "No temperature readings".to_string()
        } else {
            format!(
                "{:.1}°F at {}",
                self.temperature_stats.min_temp, self.temperature_stats.min_temp_location
            )
        };

        let hottest = if self.temperature_stats.max_temp.is_nan() {
            "No temperature readings".to_string()
        } else {
            format!(
                "{:.1}°F at {}",
                self.temperature_stats.max_temp, self.temperature_stats.max_temp_location
            )
        };

        let average = if self.temperature_stats.avg_temp.is_nan() {
            "No temperature readings".to_string()
        } else {
            format!("{:.1}°F", self.temperature_stats.avg_temp)
        };

        format!(
            "{}\n\n\
            Extreme Temperatures:\n\
            - Coldest: {}\n\
            - Hottest: {}\n\
            - Average: {}",
            self.summary(),
            coldest,
            hottest,
            average
        )
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Station};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn fixture_store() -> ClimateStore {
        let stations = vec![
            Station::new("A".to_string(), "Waikiki".to_string(), 21.27, -157.82, None),
            Station::new("B".to_string(), "Kaneohe".to_string(), 21.42, -157.80, None),
        ];
        let measurements = vec![
            Measurement::new("A".to_string(), date("2017-01-01"), Some(0.1), Some(65.0)),
            Measurement::new("A".to_string(), date("2017-03-01"), None, Some(88.0)),
            Measurement::new("B".to_string(), date("2016-12-01"), Some(0.3), None),
        ];
        ClimateStore::new(stations, measurements).unwrap()
    }

    #[test]
    fn test_analyze_computes_ranges_and_coverage() {
        let stats = DatasetAnalyzer::new().analyze(&fixture_store()).unwrap();

        assert_eq!(stats.total_stations, 2);
        assert_eq!(stats.total_measurements, 3);
        assert_eq!(stats.date_range, (date("2016-12-01"), date("2017-03-01")));
        assert_eq!(stats.temperature_stats.min_temp, 65.0);
        assert_eq!(stats.temperature_stats.max_temp, 88.0);
        assert_eq!(stats.coverage.with_precipitation, 2);
        assert_eq!(stats.coverage.with_temperature, 2);
        assert_eq!(stats.coverage.complete_measurements, 1);
        assert_eq!(stats.busiest_station, Some(("A".to_string(), 2)));
    }

    #[test]
    fn test_analyze_empty_store() {
        let store = ClimateStore::new(vec![], vec![]).unwrap();
        assert!(DatasetAnalyzer::new().analyze(&store).is_err());
    }

    #[test]
    fn test_summary_handles_missing_temperatures() {
        let stations = vec![Station::new(
            "A".to_string(),
            "Waikiki".to_string(),
            21.27,
            -157.82,
            None,
        )];
        let measurements = vec![Measurement::new(
            "A".to_string(),
            date("2017-01-01"),
            Some(0.1),
            None,
        )];
        let store = ClimateStore::new(stations, measurements).unwrap();

        let stats = DatasetAnalyzer::new().analyze(&store).unwrap();
        assert!(stats.temperature_stats.min_temp.is_nan());
        assert!(stats.summary().contains("No temperature readings"));
    }
}
