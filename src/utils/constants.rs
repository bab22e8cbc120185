/// File names
pub const STATIONS_FILE: &str = "hawaii_stations.csv";
pub const MEASUREMENTS_FILE: &str = "hawaii_measurements.csv";

/// Request/response date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed cutoff for the precipitation route, carried over from the original
/// service (one year before the snapshot's final observation date).
pub const PRECIPITATION_SINCE: &str = "2016-08-22";

/// Rolling observation window length in days
pub const OBSERVATION_WINDOW_DAYS: i64 = 365;

/// API route prefix
pub const API_ROOT: &str = "/api/v1.0";

/// Serving defaults
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:4000";
pub const DEFAULT_DATA_DIR: &str = "data";
