//! Line framing limits configuration.

use linebot_proto::DEFAULT_MAX_LINE_LEN;
use serde::Deserialize;

/// Line framing limits configuration.
///
/// Lines longer than the limit end the input stream with an error.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted input line length in bytes, terminator included (default: 512).
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
        }
    }
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}
