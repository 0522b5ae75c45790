//! Error types for the line parser, the command dispatcher and the codec.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing, parsing or dispatching lines.
///
/// Every parse failure is deterministic: retrying the same input yields the
/// same error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// No command name was left after removing the sender prefix and the
    /// trailing argument.
    #[error("malformed command: {string:?}")]
    MalformedCommand {
        /// The offending line.
        string: String,
    },

    /// A chat message did not match the `!command text` shape.
    #[error("malformed message: {string:?}")]
    MalformedMessage {
        /// The offending message.
        string: String,
    },

    /// A dispatcher was asked to enable a behavior that does not exist.
    #[error("unknown built-in command: {0}")]
    UnknownBuiltin(String),

    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 bytes in a line.
    #[error("invalid UTF-8 in line at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// The raw line as bytes (before UTF-8 validation failed).
        raw_line: Vec<u8>,
        /// Byte position where UTF-8 validation failed.
        byte_pos: usize,
        /// Detailed error message from the UTF-8 decoder.
        details: String,
    },

    /// Line exceeded the maximum allowed length.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Actual line length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Illegal control character in a line.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),
}

impl ProtocolError {
    pub(crate) fn malformed_command(s: &str) -> Self {
        Self::MalformedCommand {
            string: s.to_owned(),
        }
    }

    pub(crate) fn malformed_message(s: &str) -> Self {
        Self::MalformedMessage {
            string: s.to_owned(),
        }
    }

    /// Whether this error describes bad input rather than a transport failure.
    ///
    /// A caller driving the line codec's `Decoder` by hand, or
    /// parsing lines itself, can skip the offending line and keep going.
    /// `FramedRead` ends its stream after any decoder error regardless.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedCommand { .. }
                | Self::MalformedMessage { .. }
                | Self::InvalidUtf8 { .. }
                | Self::MessageTooLong { .. }
                | Self::IllegalControlChar(_)
        )
    }
}
