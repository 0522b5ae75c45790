//! The parsed line record.

/// A single protocol line decoded into its parts.
///
/// Values are built fresh for every line and carry no shared state, so
/// parsing the same line twice always yields equal values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedCommand {
    /// Sender nickname, present only when the line carried a sender prefix.
    pub nickname: Option<String>,
    /// Sender username, the `!`-separated second part of the prefix.
    pub username: Option<String>,
    /// Command keyword. Never empty for a parsed line.
    pub name: String,
    /// Middle arguments in order, followed by the trailing argument if any.
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    /// Create a command with no sender and no arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use linebot_proto::ParsedCommand;
    ///
    /// let pong = ParsedCommand::new("PONG").with_argument("irc.example.com");
    /// assert_eq!(pong.to_string(), "PONG irc.example.com");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nickname: None,
            username: None,
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Attach a sender prefix.
    pub fn with_sender(mut self, nickname: impl Into<String>, username: Option<&str>) -> Self {
        self.nickname = Some(nickname.into());
        self.username = username.map(str::to_owned);
        self
    }

    /// Append an argument.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Whether the line carried a sender prefix with at least one part.
    pub fn has_sender(&self) -> bool {
        self.nickname.is_some() || self.username.is_some()
    }

    /// Whether the command keyword equals `name`, ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The first argument, which is the target of message-shaped commands.
    pub fn target(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    /// The last argument, which is the text of message-shaped commands.
    pub fn text(&self) -> Option<&str> {
        self.arguments.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let cmd = ParsedCommand::new("PRIVMSG")
            .with_sender("nick", Some("user"))
            .with_argument("#rust")
            .with_argument("hello there");

        assert_eq!(cmd.nickname.as_deref(), Some("nick"));
        assert_eq!(cmd.username.as_deref(), Some("user"));
        assert_eq!(cmd.target(), Some("#rust"));
        assert_eq!(cmd.text(), Some("hello there"));
        assert!(cmd.has_sender());
    }

    #[test]
    fn keyword_match_ignores_case() {
        let cmd = ParsedCommand::new("privmsg");
        assert!(cmd.is("PRIVMSG"));
        assert!(!cmd.is("NOTICE"));
    }

    #[test]
    fn empty_command_has_no_target() {
        let cmd = ParsedCommand::new("QUIT");
        assert_eq!(cmd.target(), None);
        assert_eq!(cmd.text(), None);
        assert!(!cmd.has_sender());
    }
}
