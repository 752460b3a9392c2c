//! Logging setup for the server and the CLI.
//!
//! Logs go to stderr so that `products --format json` and friends can be
//! piped. Our own crate logs at the requested level; the HTTP stack (axum,
//! hyper, reqwest) stays at `warn` unless tracing everything.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose logs are only interesting when tracing.
const HTTP_STACK: [&str; 3] = ["axum", "hyper", "reqwest"];

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above, e.g. upstream URLs and cache hits.
    Verbose,
    /// Everything, including the HTTP stack.
    Trace,
}

impl Verbosity {
    /// Map `-q` and the number of `-v` flags to a verbosity. `-q` wins.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The level our own events are filtered at.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// The `EnvFilter` directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn directive(self) -> String {
        let stack_level = match self {
            Self::Quiet => Level::ERROR,
            Self::Trace => Level::DEBUG,
            Self::Normal | Self::Verbose => Level::WARN,
        };

        let mut directive = format!("storefront={}", self.level());
        for krate in HTTP_STACK {
            directive.push_str(&format!(",{krate}={stack_level}"));
        }
        directive
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Calling this more
/// than once is harmless; later calls are ignored.
///
/// # Examples
///
/// ```no_run
/// use storefront::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity == Verbosity::Trace)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init();
}
