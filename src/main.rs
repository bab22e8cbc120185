use clap::Parser;
use hawaii_climate_api::cli::{run, Cli};
use hawaii_climate_api::error::Result;
use hawaii_climate_api::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    run(cli).await
}
