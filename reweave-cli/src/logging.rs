//! Structured logging bootstrap for the reweave binary.
//!
//! Diagnostics go to `stderr` so trajectory and metric tables on `stdout`
//! stay machine-parseable. The verbosity is taken from `RUST_LOG` and the
//! output format from `REWEAVE_LOG_FORMAT`; the `log` facade is bridged
//! into `tracing` so dependencies using either API are captured.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const FORMAT_ENV: &str = "REWEAVE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static BOOTSTRAPPED: OnceLock<()> = OnceLock::new();

/// Output format for emitted diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Human,
    /// Newline-delimited JSON events with span context.
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

/// Errors raised while bootstrapping logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `REWEAVE_LOG_FORMAT` held something other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// `REWEAVE_LOG_FORMAT` was set but not valid UTF-8.
    #[error("environment variable `{FORMAT_ENV}` is not valid UTF-8: {source}")]
    FormatEnvNotUnicode {
        /// Underlying read failure.
        #[source]
        source: env::VarError,
    },
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// If another subscriber already owns the global slot the existing
/// configuration is kept and a note is printed to `stderr`.
///
/// # Errors
/// Returns [`LoggingError`] when `REWEAVE_LOG_FORMAT` is unreadable or
/// names an unknown format.
pub fn init_logging() -> Result<(), LoggingError> {
    if BOOTSTRAPPED.get().is_some() {
        return Ok(());
    }
    let format = format_from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let events = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let events = match format {
        LogFormat::Human => events.boxed(),
        LogFormat::Json => events
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // The log-facade bridge and the subscriber slot may both already be
    // claimed, e.g. by a test harness; neither case is fatal.
    let _ = LogTracer::init();
    if let Err(taken) = tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
    {
        eprintln!("keeping the logging setup installed elsewhere: {taken}");
    }

    let _ = BOOTSTRAPPED.set(());
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::FormatEnvNotUnicode { source })
        }
    }
}
