pub mod dataset_analyzer;

pub use dataset_analyzer::{CoverageStats, DatasetAnalyzer, DatasetStatistics, TemperatureStats};
