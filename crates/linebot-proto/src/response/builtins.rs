//! Built-in command behaviors.

use super::Behavior;

/// Every built-in behavior, by command name.
pub const BUILTINS: &[(&str, Behavior)] = &[("echo", echo), ("reverse", reverse)];

/// Names enabled by [`Dispatcher::new`](super::Dispatcher::new).
///
/// `echo` exists but is deliberately left out.
pub const DEFAULT_COMMANDS: &[&str] = &["reverse"];

/// Look up a built-in by name.
pub fn lookup(name: &str) -> Option<(&'static str, Behavior)> {
    BUILTINS.iter().find(|(n, _)| *n == name).copied()
}

/// Returns the text unchanged.
pub fn echo(text: &str) -> String {
    text.to_owned()
}

/// Returns the text with its characters in reverse order.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
