//! Logging initialization.
//!
//! Sets up tracing-subscriber with an `EnvFilter` read from `RUST_LOG`,
//! falling back to the supplied level.

pub mod validate;

/// Configuration for logging initialization.
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is unset or unparsable (e.g. `"info"`).
    pub default_level: String,
    /// Compact single-line output.
    pub compact: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            compact: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Returns `false` if a subscriber was already set (common in tests). An
/// unparsable `default_level` falls back to `info`.
pub fn init_logging(config: TelemetryConfig) -> bool {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let installed = if config.compact {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    };

    installed.is_ok()
}
