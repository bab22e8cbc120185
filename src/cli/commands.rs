use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::server;
use crate::store::{self, ClimateStore, IntegrityChecker};
use std::sync::Arc;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { data_dir, address } => {
            println!("Loading dataset from {}...", data_dir.display());

            let store = ClimateStore::load_dir(&data_dir)?;
            println!(
                "Loaded {} stations, {} measurements",
                store.stations().len(),
                store.measurements().len()
            );

            server::serve(Arc::new(store), address).await?;
        }

        Commands::Validate { data_dir } => {
            println!("Validating dataset in {}...", data_dir.display());

            let (stations, measurements) = store::load_records(&data_dir)?;

            let checker = IntegrityChecker::new();
            let report = checker.check(&stations, &measurements);
            println!("\n{}", checker.generate_summary(&report));

            if report.is_clean() {
                println!("All data passed validation checks");
            } else {
                println!(
                    "Found {} unknown station references, {} duplicate station ids",
                    report.unknown_station_refs.len(),
                    report.duplicate_station_ids.len()
                );
            }
        }

        Commands::Info { data_dir } => {
            println!("Analyzing dataset in {}...", data_dir.display());

            let store = ClimateStore::load_dir(&data_dir)?;

            let analyzer = DatasetAnalyzer::new();
            let stats = analyzer.analyze(&store)?;
            println!("\n{}", stats.detailed_summary());
        }
    }

    Ok(())
}
