//! # linebot-proto
//!
//! Parsing and dispatch primitives for line-oriented chat bots.
//!
//! ## Features
//!
//! - Protocol line parsing into sender, command name and arguments
//! - `!command text` chat-command dispatch over a closed allow-list
//! - Optional Tokio line codec for framing byte streams
//!
//! Both the parser and the dispatcher are pure: no I/O and no shared
//! mutable state, so they can be called from any number of threads.

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use linebot_proto::{Dispatcher, Invocation, ParsedCommand};
//!
//! let line = ":nick!user PRIVMSG #rust :!reverse hello";
//! let cmd: ParsedCommand = line.parse().expect("valid line");
//! assert_eq!(cmd.name, "PRIVMSG");
//!
//! let dispatcher = Dispatcher::new();
//! let invocation = Invocation::from_command(&cmd).unwrap().unwrap();
//! assert_eq!(dispatcher.dispatch(&invocation).into_text(), "olleh");
//! ```

pub mod command;
pub mod error;
#[cfg(feature = "codec")]
pub mod line;
pub mod response;

pub use self::command::ParsedCommand;
pub use self::error::{ProtocolError, Result};
#[cfg(feature = "codec")]
pub use self::line::{LineCodec, DEFAULT_MAX_LINE_LEN};
pub use self::response::{Behavior, Dispatcher, Invocation, Reply, COMMAND_NOT_FOUND};
