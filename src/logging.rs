//! Tracing subscriber setup.
//!
//! The filter comes from the CLI, then `RUST_LOG`, then the built-in default.
//! The output format (text or JSON) comes from `logging.format`.

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    EnvFilter,
};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > env > default.
pub fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build a subscriber writing to `writer` in the requested format.
pub fn build_subscriber<W>(
    filter: &str,
    format: LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => Box::new(registry.with(fmt::layer().with_writer(writer))),
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(writer),
            ),
        ),
    }
}

/// Install the process-wide subscriber, logging to stdout.
pub fn init_tracing(
    filter: &str,
    format: LogFormat,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(build_subscriber(filter, format, std::io::stdout))
}
