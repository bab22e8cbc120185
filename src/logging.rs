use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the verbosity flag picks
/// between `info` and `debug` for this crate plus request traces from
/// tower-http.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "hawaii_climate_api=debug,tower_http=debug"
    } else {
        "hawaii_climate_api=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
