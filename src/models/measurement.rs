use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One daily reading attributed to a station. Precipitation and temperature
/// are independently optional; the station reference is by id only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Measurement {
    #[serde(rename = "station")]
    #[validate(length(min = 1))]
    pub station_id: String,

    pub date: NaiveDate,

    #[validate(range(min = 0.0))]
    pub prcp: Option<f64>,

    pub tobs: Option<f64>,
}

impl Measurement {
    pub fn new(station_id: String, date: NaiveDate, prcp: Option<f64>, tobs: Option<f64>) -> Self {
        Self {
            station_id,
            date,
            prcp,
            tobs,
        }
    }

    pub fn has_precipitation(&self) -> bool {
        self.prcp.is_some()
    }

    pub fn has_temperature(&self) -> bool {
        self.tobs.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.has_precipitation() && self.has_temperature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_measurement_validation() {
        let valid = Measurement::new(
            "USC00519397".to_string(),
            date("2017-08-23"),
            Some(0.08),
            Some(81.0),
        );
        assert!(valid.validate().is_ok());
        assert!(valid.is_complete());
    }

    #[test]
    fn test_negative_precipitation_rejected() {
        let invalid = Measurement::new(
            "USC00519397".to_string(),
            date("2017-08-23"),
            Some(-0.5),
            None,
        );
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_absent_readings() {
        let sparse = Measurement::new("USC00519397".to_string(), date("2017-08-23"), None, None);
        assert!(sparse.validate().is_ok());
        assert!(!sparse.has_precipitation());
        assert!(!sparse.has_temperature());
        assert!(!sparse.is_complete());
    }
}
