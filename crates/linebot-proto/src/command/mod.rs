//! Protocol line parsing.
//!
//! A line has the informal shape
//! `[:nick[!user] ]COMMAND [arg1 arg2 ...] [:trailing argument with spaces]`
//! and decodes into a [`ParsedCommand`].

mod parse;
mod serialize;
mod types;

pub(crate) use self::parse::is_separator;
pub use self::types::ParsedCommand;
