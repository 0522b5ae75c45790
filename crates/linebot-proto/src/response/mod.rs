//! Chat-command dispatch.
//!
//! A chat message of the form `!<command> <text>` is split into an
//! [`Invocation`] and looked up in a [`Dispatcher`], a closed map from
//! command name to a pure `text -> text` behavior.

pub mod builtins;
mod dispatcher;
mod invocation;

pub use self::dispatcher::{Behavior, Dispatcher, Reply, COMMAND_NOT_FOUND};
pub use self::invocation::{Invocation, COMMAND_SIGIL};
