use crate::error::Result;
use crate::models::Measurement;
use std::fs::File;
use std::path::Path;
use validator::Validate;

pub struct MeasurementReader {
    validate: bool,
}

impl MeasurementReader {
    pub fn new() -> Self {
        Self { validate: true }
    }

    pub fn with_validation(validate: bool) -> Self {
        Self { validate }
    }

    /// Read daily measurements from a CSV file.
    ///
    /// Expected header: `station,date,prcp,tobs`. Dates must be `YYYY-MM-DD`;
    /// empty `prcp`/`tobs` fields deserialize as absent readings. File order
    /// is preserved — it defines the store's iteration order.
    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut measurements = Vec::new();

        for record in reader.deserialize() {
            let measurement: Measurement = record?;
            if self.validate {
                measurement.validate()?;
            }
            measurements.push(measurement);
        }

        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}
