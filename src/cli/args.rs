use crate::utils::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_DATA_DIR};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hawaii-climate-api")]
#[command(about = "In-memory query API for the Hawaii daily weather observation dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset snapshot and serve the query API
    Serve {
        #[arg(
            short,
            long,
            default_value = DEFAULT_DATA_DIR,
            help = "Directory containing the station and measurement CSV files"
        )]
        data_dir: PathBuf,

        #[arg(short, long, default_value = DEFAULT_BIND_ADDRESS)]
        address: SocketAddr,
    },

    /// Validate a dataset directory without serving
    Validate {
        #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },

    /// Display statistics about a dataset directory
    Info {
        #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
}
