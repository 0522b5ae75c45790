//! linebot - line-oriented chat bot
//!
//! Reads protocol lines from stdin, answers keepalives and `!commands`,
//! and writes reply lines to stdout.

mod config;
mod error;
mod handler;
mod telemetry;

use crate::config::Config;
use crate::config::validation::validate;
use crate::handler::Bot;
use futures_util::{SinkExt, StreamExt};
use linebot_proto::LineCodec;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1);
    let config = Config::load_or_default(config_path.as_deref()).map_err(|e| {
        eprintln!("linebot: failed to load config: {e}");
        e
    })?;

    telemetry::init(&config.logging);

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "Refusing to start with {} configuration error(s). See error messages above.",
            errors.len()
        ));
    }

    let bot = Bot::from_config(&config)?;
    info!(
        nick = %bot.nick(),
        commands = ?bot.commands(),
        max_line_len = config.limits.max_line_len,
        "Starting linebot"
    );

    let mut lines = FramedRead::new(
        tokio::io::stdin(),
        LineCodec::with_max_len(config.limits.max_line_len),
    );
    let mut replies = FramedWrite::new(tokio::io::stdout(), LineCodec::new());

    let mut handled: u64 = 0;
    while let Some(next) = lines.next().await {
        let line = next.map_err(|e| {
            error!(error = %e, "Input stream failed");
            e
        })?;
        handled += 1;

        match bot.handle_line(&line) {
            Ok(Some(reply)) => replies.send(reply).await?,
            Ok(None) => {}
            Err(e) if e.is_recoverable() => {
                if e.error_code() == "malformed_message" {
                    debug!(code = e.error_code(), error = %e, "Skipping line");
                } else {
                    warn!(code = e.error_code(), error = %e, "Skipping line");
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(lines = handled, "Input closed, shutting down");
    Ok(())
}
