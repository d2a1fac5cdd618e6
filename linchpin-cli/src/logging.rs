//! Logging initialisation for the linchpin CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr` and bridges the
//! `log` facade. Two environment variables shape the output:
//!
//! - `LINCHPIN_LOG_FORMAT`: `human` (default) or `json`.
//! - `LINCHPIN_LOG_LEVEL`: filter directive used when `RUST_LOG` is unset,
//!   defaulting to `info`. Per-edge classification events sit at `debug`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "LINCHPIN_LOG_FORMAT";
const LOG_LEVEL_ENV: &str = "LINCHPIN_LOG_LEVEL";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics written to `stderr`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including span context.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while configuring structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `LINCHPIN_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// `LINCHPIN_LOG_LEVEL` was not a valid filter directive.
    #[error("invalid log level directive `{provided}`: {source}")]
    InvalidDirective {
        /// Raw value supplied by the user.
        provided: String,
        /// Parse failure reported by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Logging settings resolved from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggingConfig {
    format: LogFormat,
    default_directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_directive: DEFAULT_DIRECTIVE.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when a variable is not valid UTF-8 or holds an
    /// unsupported value.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Reads the configuration through `lookup`, which mirrors [`env::var`].
    ///
    /// # Errors
    /// Returns [`LoggingError`] when a variable is not valid UTF-8 or holds an
    /// unsupported value.
    ///
    /// # Examples
    /// ```
    /// use std::env::VarError;
    /// use linchpin_cli::logging::{LogFormat, LoggingConfig};
    ///
    /// let config = LoggingConfig::from_lookup(|name| match name {
    ///     "LINCHPIN_LOG_FORMAT" => Ok("json".to_owned()),
    ///     _ => Err(VarError::NotPresent),
    /// })
    /// .expect("configuration must parse");
    /// assert_eq!(config.format(), LogFormat::Json);
    /// assert_eq!(config.default_directive(), "info");
    /// ```
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Result<Self, LoggingError> {
        let format = match read_var(&lookup, LOG_FORMAT_ENV)? {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let default_directive = match read_var(&lookup, LOG_LEVEL_ENV)? {
            Some(raw) => {
                let directive = raw.trim().to_owned();
                EnvFilter::try_new(&directive).map_err(|source| {
                    LoggingError::InvalidDirective {
                        provided: raw.clone(),
                        source,
                    }
                })?;
                directive
            }
            None => DEFAULT_DIRECTIVE.to_owned(),
        };
        Ok(Self {
            format,
            default_directive,
        })
    }

    /// Returns the output format.
    #[must_use]
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Returns the filter directive applied when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> &str {
        &self.default_directive
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

fn read_var(
    lookup: &impl Fn(&'static str) -> Result<String, env::VarError>,
    name: &'static str,
) -> Result<Option<String>, LoggingError> {
    match lookup(name) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

/// Install global structured logging if it has not already been configured.
///
/// Diagnostics go to `stderr` so rendered results on `stdout` stay
/// parseable. Span close events carry their timings.
///
/// # Errors
/// Returns [`LoggingError`] if the environment holds invalid settings.
/// A subscriber installed elsewhere is reported on `stderr` and otherwise
/// tolerated.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let config = LoggingConfig::from_env()?;
    match install_subscriber(&config) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            report_existing_subscriber(&source);
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "The tracing subscriber is owned by someone else, so report directly"
)]
fn report_existing_subscriber(source: &tracing_subscriber::util::TryInitError) {
    eprintln!("structured logging already configured elsewhere: {source}");
}

fn install_subscriber(config: &LoggingConfig) -> Result<(), LoggingError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match config.format() {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Another logger may already own the `log` slot; keep it.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
