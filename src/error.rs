//! Error handling for line handling.

use linebot_proto::ProtocolError;
use thiserror::Error;

/// Errors that can occur while handling one input line.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("no reply target for {0} from an unnamed sender")]
    NoReplyTarget(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Protocol(ProtocolError::MalformedCommand { .. }) => "malformed_command",
            Self::Protocol(ProtocolError::MalformedMessage { .. }) => "malformed_message",
            Self::Protocol(_) => "protocol_error",
            Self::NoReplyTarget(_) => "no_reply_target",
        }
    }

    /// Whether the line can be skipped and processing can go on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Protocol(err) => err.is_recoverable(),
            Self::NoReplyTarget(_) => true,
        }
    }
}
