use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `--debug` forces debug output for this crate,
/// otherwise `RUST_LOG` decides and the default stays quiet.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_")))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
