//! Structured logging for the liana CLI.
//!
//! Diagnostics go to `stderr` so summaries on `stdout` stay parseable. What
//! gets logged depends on the command: `sweep` and `nmi` run several timed
//! stages, so they report span closures by default, while `insert` and
//! `features` only log events. `LIANA_LOG_FORMAT` (`human`, `json`) and
//! `LIANA_LOG_SPANS` (`none`, `close`, `full`) override the defaults, and
//! `RUST_LOG` filters as usual (default `info`).

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::cli::Command;

const LOG_FORMAT_ENV: &str = "LIANA_LOG_FORMAT";
const LOG_SPANS_ENV: &str = "LIANA_LOG_SPANS";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per line, including the current span list.
    Json,
}

/// Span lifecycle events written alongside ordinary log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEvents {
    /// Events only.
    None,
    /// One line per closed span, carrying its busy and idle time.
    Close,
    /// Every span transition.
    Full,
}

impl SpanEvents {
    fn fmt_span(self) -> FmtSpan {
        match self {
            Self::None => FmtSpan::NONE,
            Self::Close => FmtSpan::CLOSE,
            Self::Full => FmtSpan::FULL,
        }
    }
}

/// Logging configuration for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Line format.
    pub format: LogFormat,
    /// Span events to report.
    pub span_events: SpanEvents,
}

impl LogSettings {
    /// Defaults for `command`, before environment overrides.
    #[must_use]
    pub const fn for_command(command: &Command) -> Self {
        let span_events = match command {
            Command::Sweep(_) | Command::Nmi(_) => SpanEvents::Close,
            Command::Insert(_) | Command::Features(_) => SpanEvents::None,
        };
        Self {
            format: LogFormat::Human,
            span_events,
        }
    }

    /// Applies `LIANA_LOG_FORMAT` and `LIANA_LOG_SPANS` when they are set.
    ///
    /// # Errors
    /// Returns [`LoggingError`] if either variable holds invalid Unicode or
    /// an unsupported value.
    pub fn with_env_overrides(self) -> Result<Self, LoggingError> {
        self.with_overrides(
            read_env(LOG_FORMAT_ENV)?.as_deref(),
            read_env(LOG_SPANS_ENV)?.as_deref(),
        )
    }

    fn with_overrides(
        self,
        format: Option<&str>,
        spans: Option<&str>,
    ) -> Result<Self, LoggingError> {
        Ok(Self {
            format: format.map(parse_log_format).transpose()?.unwrap_or(self.format),
            span_events: spans
                .map(parse_span_events)
                .transpose()?
                .unwrap_or(self.span_events),
        })
    }
}

/// Errors raised while resolving logging settings.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `LIANA_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Unsupported span setting requested via `LIANA_LOG_SPANS`.
    #[error("unsupported span events `{provided}`; expected `none`, `close` or `full`")]
    UnsupportedSpanEvents {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Later calls are no-ops, whatever their settings. A subscriber installed
/// by someone else is reported on `stderr` and kept.
pub fn init_logging(settings: LogSettings) {
    if INITIALISED.get().is_some() {
        return;
    }
    if let Err(source) = install_subscriber(settings) {
        eprintln!("structured logging already configured elsewhere: {source}");
    }
    let _ = INITIALISED.set(());
}

fn install_subscriber(settings: LogSettings) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(settings.span_events.fmt_span())
        .with_writer(std::io::stderr);

    let fmt_layer = match settings.format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

fn read_env(name: &'static str) -> Result<Option<String>, LoggingError> {
    match env::var(name) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

fn parse_span_events(raw: &str) -> Result<SpanEvents, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(SpanEvents::None),
        "close" => Ok(SpanEvents::Close),
        "full" => Ok(SpanEvents::Full),
        other => Err(LoggingError::UnsupportedSpanEvents {
            provided: other.to_owned(),
        }),
    }
}
