//! Tracing subscriber initialisation.
//!
//! Text output is meant for humans at a terminal. JSON output flattens each
//! event into one document with the current request span attached, which is
//! the shape log shippers such as Filebeat or Logstash expect.

use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, layer::SubscriberExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Pick the log filter with priority: CLI > RUST_LOG > config > default.
pub fn resolve_filter(
    cli: Option<String>,
    env: Option<String>,
    config: &LoggingConfig,
) -> String {
    cli.or(env)
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build a subscriber writing `format` records that pass `filter` to `writer`.
pub fn build_subscriber<W>(
    filter: &str,
    format: LogFormat,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_new(filter).map_err(|source| TelemetryError::Filter {
        filter: filter.to_string(),
        source,
    })?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(writer),
            ),
        ),
        LogFormat::Text => Box::new(registry.with(fmt::layer().with_writer(writer))),
    };

    Ok(subscriber)
}

/// Install the global subscriber, writing to stdout.
pub fn init_tracing(filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let subscriber = build_subscriber(filter, format, std::io::stdout)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
