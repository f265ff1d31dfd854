//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Returns the filter directive used when `RUST_LOG` is unset.
///
/// Each `-v` raises the solver's level from WARN through INFO and DEBUG to
/// TRACE.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "setforge_solver=warn",
        1 => "setforge_solver=info",
        2 => "setforge_solver=debug",
        _ => "setforge_solver=trace",
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set, at any verbosity.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
