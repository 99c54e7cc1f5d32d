//! Tracing subscriber setup for the command-line binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the `-v` count to a default filter level.
///
/// Without flags only warnings are logged, so rendered output stays clean.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initializes the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more
/// than once is harmless; only the first call installs a subscriber.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
