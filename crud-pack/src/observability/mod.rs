//! Logging setup
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to
//! install a subscriber that writes them to stderr, leaving stdout to the
//! user-facing report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Number of `-v` flags given on the command line
    pub verbosity: u8,

    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            json: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a config for the given `-v` count
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            json: false,
        }
    }

    /// Switch to JSON output
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Filter directive used when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info,crud_pack=info",
            2 => "info,crud_pack=debug,crud_pack_cli=debug",
            _ => "debug,crud_pack=trace,crud_pack_cli=trace",
        }
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity level.
///
/// # Example
///
/// ```rust,no_run
/// use crud_pack::observability::{self, ObservabilityConfig};
///
/// observability::init(&ObservabilityConfig::new(1));
/// tracing::info!("generator started");
/// ```
pub fn init(config: &ObservabilityConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let registry = tracing_subscriber::registry().with(env_filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(err) = result {
        tracing::debug!("tracing subscriber already installed: {err}");
    }
}
