pub mod integrity;

pub use integrity::{IntegrityChecker, IntegrityReport, StationStatistics};

use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};
use crate::readers::{MeasurementReader, StationReader};
use crate::utils::constants::{MEASUREMENTS_FILE, STATIONS_FILE};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Immutable in-memory snapshot of the observation dataset.
///
/// Loaded once at startup and shared by reference into every query; nothing
/// mutates it afterwards. Iteration order of stations and measurements is
/// the load (file) order.
#[derive(Debug)]
pub struct ClimateStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    station_index: HashMap<String, usize>,
}

impl ClimateStore {
    /// Build a store from already-loaded records, enforcing referential
    /// integrity: every measurement must name a known station.
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Result<Self> {
        let mut station_index = HashMap::with_capacity(stations.len());
        for (pos, station) in stations.iter().enumerate() {
            station_index.insert(station.id.clone(), pos);
        }

        for measurement in &measurements {
            if !station_index.contains_key(&measurement.station_id) {
                return Err(ClimateError::UnknownStation {
                    station_id: measurement.station_id.clone(),
                });
            }
        }

        Ok(Self {
            stations,
            measurements,
            station_index,
        })
    }

    /// Load the snapshot from a data directory containing the station and
    /// measurement CSV files.
    pub fn load_dir(data_dir: &Path) -> Result<Self> {
        let (stations, measurements) = load_records(data_dir)?;
        let store = Self::new(stations, measurements)?;

        info!(
            stations = store.stations.len(),
            measurements = store.measurements.len(),
            "dataset snapshot loaded"
        );

        Ok(store)
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All measurements, in load order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.station_index.get(id).map(|&pos| &self.stations[pos])
    }

    /// Measurements belonging to one station, in load order.
    pub fn measurements_for<'a>(
        &'a self,
        station_id: &'a str,
    ) -> impl Iterator<Item = &'a Measurement> {
        self.measurements
            .iter()
            .filter(move |m| m.station_id == station_id)
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// Read both record kinds from `data_dir` without building a store. Used by
/// the `validate` command, which wants to inspect datasets that may fail the
/// store's integrity requirements.
pub fn load_records(data_dir: &Path) -> Result<(Vec<Station>, Vec<Measurement>)> {
    let stations_path = data_dir.join(STATIONS_FILE);
    let measurements_path = data_dir.join(MEASUREMENTS_FILE);

    let stations = StationReader::new().read_stations(&stations_path)?;
    let measurements = MeasurementReader::new().read_measurements(&measurements_path)?;

    Ok((stations, measurements))
}
