//! Per-line handling: keepalive replies and chat-command dispatch.

use crate::config::Config;
use crate::error::HandlerError;
use crate::telemetry::spans;
use linebot_proto::{Dispatcher, Invocation, ParsedCommand, ProtocolError};
use tracing::{debug, info};

/// Stateless line handler.
///
/// Every call works only on the line it is given; the bot never remembers
/// earlier lines.
#[derive(Debug)]
pub struct Bot {
    nick: String,
    dispatcher: Dispatcher,
}

impl Bot {
    pub fn new(nick: impl Into<String>, dispatcher: Dispatcher) -> Self {
        Self {
            nick: nick.into(),
            dispatcher,
        }
    }

    /// Build the bot from a validated config.
    pub fn from_config(config: &Config) -> Result<Self, ProtocolError> {
        let dispatcher = Dispatcher::with_builtins(&config.dispatcher.commands)?;
        Ok(Self::new(config.bot.nick.clone(), dispatcher))
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn commands(&self) -> Vec<&'static str> {
        self.dispatcher.commands()
    }

    /// Handle one raw input line, returning the line to send back, if any.
    pub fn handle_line(&self, line: &str) -> Result<Option<String>, HandlerError> {
        let cmd = ParsedCommand::parse(line)?;
        let _guard = spans::line(&cmd.name, cmd.nickname.as_deref()).entered();

        if cmd.is("PING") {
            let token = cmd.text().unwrap_or(&self.nick);
            return Ok(Some(ParsedCommand::new("PONG").with_argument(token).to_string()));
        }

        if cmd.is("PRIVMSG") {
            return self.handle_privmsg(&cmd);
        }

        debug!("Ignoring line");
        Ok(None)
    }

    fn handle_privmsg(&self, cmd: &ParsedCommand) -> Result<Option<String>, HandlerError> {
        if cmd.arguments.len() < 2 {
            debug!(args = cmd.arguments.len(), "PRIVMSG without target and text");
            return Ok(None);
        }
        if cmd
            .nickname
            .as_deref()
            .is_some_and(|nick| nick.eq_ignore_ascii_case(&self.nick))
        {
            return Ok(None);
        }

        let invocation = match Invocation::from_command(cmd) {
            Some(invocation) => invocation?,
            None => return Ok(None),
        };

        let reply_to = match cmd.target() {
            Some(target) if is_channel(target) => target,
            _ => cmd
                .nickname
                .as_deref()
                .ok_or_else(|| HandlerError::NoReplyTarget(cmd.name.clone()))?,
        };

        let _guard = spans::dispatch(invocation.command, reply_to).entered();
        let reply = self.dispatcher.dispatch(&invocation);
        info!(found = reply.is_found(), "Dispatched chat command");

        let text = sanitize(&reply.into_text());
        Ok(Some(
            ParsedCommand::new("PRIVMSG")
                .with_argument(reply_to)
                .with_argument(text)
                .to_string(),
        ))
    }
}

fn is_channel(target: &str) -> bool {
    target.starts_with(['#', '&'])
}

/// Drop line terminators so a reply can never split into two lines.
fn sanitize(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}
