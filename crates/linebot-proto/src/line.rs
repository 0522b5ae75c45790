//! Line-based codec for tokio.
//!
//! Frames newline-terminated lines with a length cap, UTF-8 validation and
//! control-character filtering.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ProtocolError, Result};

/// Default maximum line length in bytes, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 512;

/// Line-based codec that handles newline-terminated lines.
///
/// Decoded lines keep their terminator; [`ParsedCommand::parse`] strips it.
///
/// [`ParsedCommand::parse`]: crate::ParsedCommand::parse
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default 512 byte limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Create a codec with a custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    /// The configured line length limit.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn decode_line(line: BytesMut) -> Result<String> {
        let data = String::from_utf8(line.to_vec()).map_err(|e| ProtocolError::InvalidUtf8 {
            byte_pos: e.utf8_error().valid_up_to(),
            details: e.utf8_error().to_string(),
            raw_line: e.into_bytes(),
        })?;

        Self::validate_line(&data)?;
        Ok(data)
    }

    /// Validate that a string contains no illegal control characters.
    fn validate_line(s: &str) -> Result<()> {
        let trimmed = s.trim_end_matches(&['\r', '\n'][..]);
        match trimmed.chars().find(|&ch| is_illegal_control_char(ch)) {
            Some(ch) => Err(ProtocolError::IllegalControlChar(ch)),
            None => Ok(()),
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `ch` may not appear inside a line.
///
/// Tab, CR, LF and the IRC formatting codes (CTCP, bold, color, reset,
/// reverse, italic, underline) are allowed; every other C0 control and DEL
/// are not.
#[inline]
pub fn is_illegal_control_char(ch: char) -> bool {
    const ALLOWED: &[char] = &[
        '\t', '\r', '\n', '\x01', '\x02', '\x03', '\x0F', '\x16', '\x1D', '\x1F',
    ];
    ch.is_control() && (ch as u32) < 0x80 && !ALLOWED.contains(&ch)
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(ProtocolError::MessageTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            Self::decode_line(line).map(Some)
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(ProtocolError::MessageTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }

        // Unterminated final line
        self.next_index = 0;
        let line = src.split_to(src.len());
        Self::decode_line(line).map(Some)
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        if !line.ends_with('\n') {
            dst.extend_from_slice(b"\r\n");
        }
        Ok(())
    }
}
