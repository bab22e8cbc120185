use crate::error::Result;
use crate::models::Station;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use validator::Validate;

pub struct StationReader {
    validate: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self { validate: true }
    }

    pub fn with_validation(validate: bool) -> Self {
        Self { validate }
    }

    /// Read station metadata from a CSV file.
    ///
    /// Expected header: `station,name,latitude,longitude,elevation`.
    /// Records are returned in file order; an empty elevation field is
    /// treated as absent.
    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut stations = Vec::new();

        for record in reader.deserialize() {
            let station: Station = record?;
            if self.validate {
                station.validate()?;
            }
            stations.push(station);
        }

        Ok(stations)
    }

    /// Read station metadata keyed by station id.
    pub fn read_stations_map(&self, path: &Path) -> Result<HashMap<String, Station>> {
        let stations = self.read_stations(path)?;
        let mut map = HashMap::with_capacity(stations.len());

        for station in stations {
            map.insert(station.id.clone(), station);
        }

        Ok(map)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
