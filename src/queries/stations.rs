use crate::error::Result;
use crate::store::ClimateStore;

/// Names of every station, in store iteration order. No sort is applied and
/// duplicate names are preserved as-is.
pub fn station_names(store: &ClimateStore) -> Result<Vec<String>> {
    Ok(store.stations().iter().map(|s| s.name.clone()).collect())
}
