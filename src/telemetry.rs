//! Log subscriber setup and span constructors.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr; stdout carries protocol output.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Create a span for one input line.
    pub fn line(command: &str, source: Option<&str>) -> Span {
        match source {
            Some(source) => debug_span!("line", command = %command, source = %source),
            None => debug_span!("line", command = %command),
        }
    }

    /// Create a span for a chat-command dispatch.
    pub fn dispatch(command: &str, reply_to: &str) -> Span {
        info_span!("dispatch", command = %command, reply_to = %reply_to)
    }
}
