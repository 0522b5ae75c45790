//! Command dispatcher.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ProtocolError, Result};

use super::builtins;
use super::invocation::Invocation;

/// Reply text for a well-formed message naming an unsupported command.
pub const COMMAND_NOT_FOUND: &str = "Command not found!";

/// A command behavior: takes the invocation text, returns the reply text.
pub type Behavior = fn(&str) -> String;

/// Outcome of a successful dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A supported command ran and produced this text.
    Output(String),
    /// The message was well formed but the command is not supported.
    NotFound,
}

impl Reply {
    /// The text to send back.
    pub fn into_text(self) -> String {
        match self {
            Reply::Output(text) => text,
            Reply::NotFound => COMMAND_NOT_FOUND.to_owned(),
        }
    }

    /// Whether the command was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Reply::Output(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Output(text) => f.write_str(text),
            Reply::NotFound => f.write_str(COMMAND_NOT_FOUND),
        }
    }
}

/// Closed map from command name to behavior.
///
/// Built once up front; dispatch only reads it, so one dispatcher can be
/// shared across threads.
#[derive(Clone)]
pub struct Dispatcher {
    commands: HashMap<&'static str, Behavior>,
}

impl Dispatcher {
    /// Create a dispatcher with the default command set.
    ///
    /// Only `reverse` is enabled.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        for name in builtins::DEFAULT_COMMANDS {
            if let Some((name, behavior)) = builtins::lookup(name) {
                dispatcher.register(name, behavior);
            }
        }
        dispatcher
    }

    /// Create a dispatcher that supports nothing.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a dispatcher enabling the named built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownBuiltin`] for the first name that is
    /// not a built-in.
    pub fn with_builtins<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dispatcher = Self::empty();
        for name in names {
            let name = name.as_ref();
            let (name, behavior) = builtins::lookup(name)
                .ok_or_else(|| ProtocolError::UnknownBuiltin(name.to_owned()))?;
            dispatcher.register(name, behavior);
        }
        Ok(dispatcher)
    }

    /// Add or replace a behavior.
    pub fn register(&mut self, name: &'static str, behavior: Behavior) {
        self.commands.insert(name, behavior);
    }

    /// Whether `name` is on the allow-list. Names are case sensitive.
    pub fn supports(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Supported command names, sorted.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run an already split invocation.
    pub fn dispatch(&self, invocation: &Invocation<'_>) -> Reply {
        match self.commands.get(invocation.command) {
            Some(behavior) => Reply::Output(behavior(invocation.text)),
            None => Reply::NotFound,
        }
    }

    /// Answer a `!<command> <text>` chat message.
    ///
    /// Unsupported commands answer with [`COMMAND_NOT_FOUND`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedMessage`] when the message does not
    /// have the `!<command> <text>` shape.
    ///
    /// # Example
    ///
    /// ```
    /// use linebot_proto::Dispatcher;
    ///
    /// let dispatcher = Dispatcher::new();
    /// assert_eq!(dispatcher.respond("!reverse hello").unwrap(), "olleh");
    /// assert_eq!(dispatcher.respond("!unknown foo").unwrap(), "Command not found!");
    /// assert!(dispatcher.respond("!reverse").is_err());
    /// ```
    pub fn respond(&self, message: &str) -> Result<String> {
        let invocation = Invocation::parse(message)?;
        Ok(self.dispatch(&invocation).into_text())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("commands", &self.commands())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(text: &str) -> String {
        text.to_uppercase()
    }

    #[test]
    fn test_default_allow_list() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.commands(), vec!["reverse"]);
        assert!(dispatcher.supports("reverse"));
        assert!(!dispatcher.supports("echo"));
        assert!(!dispatcher.supports("method_name"));
    }

    #[test]
    fn test_respond_reverse() {
        assert_eq!(Dispatcher::new().respond("!reverse hello").unwrap(), "olleh");
    }

    #[test]
    fn test_respond_unknown_is_not_an_error() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.respond("!unknown foo").unwrap(), COMMAND_NOT_FOUND);
        assert_eq!(dispatcher.respond("!echo foo").unwrap(), COMMAND_NOT_FOUND);
        assert_eq!(
            dispatcher.respond("!method_name anything").unwrap(),
            COMMAND_NOT_FOUND
        );
    }

    #[test]
    fn test_respond_vertical_tab_separator() {
        assert_eq!(Dispatcher::new().respond("!reverse\x0Babc").unwrap(), "cba");
    }

    #[test]
    fn test_respond_malformed() {
        let err = Dispatcher::new().respond("!reverse").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedMessage { .. }));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.respond("!REVERSE abc").unwrap(), COMMAND_NOT_FOUND);
    }

    #[test]
    fn test_with_builtins() {
        let dispatcher = Dispatcher::with_builtins(["echo", "reverse"]).unwrap();
        assert_eq!(dispatcher.commands(), vec!["echo", "reverse"]);
        assert_eq!(dispatcher.respond("!echo hi there").unwrap(), "hi there");
    }

    #[test]
    fn test_with_unknown_builtin() {
        match Dispatcher::with_builtins(["reverse", "method_name"]) {
            Err(ProtocolError::UnknownBuiltin(name)) => assert_eq!(name, "method_name"),
            other => panic!("expected UnknownBuiltin, got {other:?}"),
        }
    }

    #[test]
    fn test_register_custom_behavior() {
        let mut dispatcher = Dispatcher::empty();
        assert_eq!(dispatcher.respond("!shout hi").unwrap(), COMMAND_NOT_FOUND);

        dispatcher.register("shout", shout);
        assert_eq!(dispatcher.respond("!shout hi").unwrap(), "HI");
    }

    #[test]
    fn test_dispatch_reply_variants() {
        let dispatcher = Dispatcher::new();
        let found = dispatcher.dispatch(&Invocation {
            command: "reverse",
            text: "ab",
        });
        assert_eq!(found, Reply::Output("ba".into()));
        assert!(found.is_found());

        let missing = dispatcher.dispatch(&Invocation {
            command: "nope",
            text: "ab",
        });
        assert_eq!(missing, Reply::NotFound);
        assert_eq!(missing.to_string(), COMMAND_NOT_FOUND);
    }

    #[test]
    fn test_dispatcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispatcher>();
    }
}
