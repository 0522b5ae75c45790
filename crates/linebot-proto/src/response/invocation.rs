use crate::command::{is_separator, ParsedCommand};
use crate::error::{ProtocolError, Result};

/// Leading character that marks a chat message as a command.
pub const COMMAND_SIGIL: char = '!';

/// A chat command split out of a `!<command> <text>` message.
///
/// Borrowed from the message it was parsed from and dropped after dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Command name, without the sigil. Never empty, never contains whitespace.
    pub command: &'a str,
    /// Free-text payload following the single separator. Never empty.
    pub text: &'a str,
}

impl<'a> Invocation<'a> {
    /// Split a chat message into command and text.
    ///
    /// The message must be `!`, then at least one non-whitespace character,
    /// then exactly one whitespace character, then at least one character of
    /// text. Text ends at the first newline. Any extra whitespace after the
    /// separator belongs to the text.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedMessage`] when the shape does not
    /// match.
    pub fn parse(message: &'a str) -> Result<Self> {
        let malformed = || ProtocolError::malformed_message(message);

        let body = message.strip_prefix(COMMAND_SIGIL).ok_or_else(malformed)?;
        let sep = body
            .find(is_separator)
            .filter(|&idx| idx > 0)
            .ok_or_else(malformed)?;

        let command = &body[..sep];
        let rest = &body[sep + 1..];
        let text = rest.split('\n').next().unwrap_or("");

        if text.is_empty() {
            return Err(malformed());
        }

        Ok(Self { command, text })
    }

    /// Whether `message` is addressed to the dispatcher at all.
    pub fn is_command(message: &str) -> bool {
        message.starts_with(COMMAND_SIGIL)
    }

    /// Pull an invocation out of the text of a message-shaped line.
    ///
    /// Returns `None` when the line has no text or the text does not start
    /// with the sigil.
    pub fn from_command(cmd: &'a ParsedCommand) -> Option<Result<Self>> {
        let text = cmd.text()?;
        Self::is_command(text).then(|| Self::parse(text))
    }
}
