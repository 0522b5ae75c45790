use std::fmt::{self, Display, Formatter};

use super::parse::is_separator;
use super::types::ParsedCommand;

/// Whether `arg` can only be written as a trailing argument.
fn needs_colon(arg: &str) -> bool {
    arg.is_empty() || arg.contains(':') || arg.contains(is_separator)
}

/// Writes the line without a terminator. Middle arguments are written
/// verbatim, so only the last argument may hold spaces or colons.
impl Display for ParsedCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.has_sender() {
            write!(f, ":{}", self.nickname.as_deref().unwrap_or(""))?;
            if let Some(ref user) = self.username {
                write!(f, "!{}", user)?;
            }
            write!(f, " ")?;
        }

        write!(f, "{}", self.name)?;

        if let Some((last, middle)) = self.arguments.split_last() {
            for arg in middle {
                write!(f, " {}", arg)?;
            }
            if needs_colon(last) {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        let cmd = ParsedCommand::new("JOIN").with_argument("#rust");
        assert_eq!(cmd.to_string(), "JOIN #rust");
    }

    #[test]
    fn test_display_sender_and_trailing() {
        let cmd = ParsedCommand::new("PRIVMSG")
            .with_sender("nick", Some("user"))
            .with_argument("#rust")
            .with_argument("hello world");
        assert_eq!(cmd.to_string(), ":nick!user PRIVMSG #rust :hello world");
    }

    #[test]
    fn test_display_colon_and_empty_trailing() {
        let cmd = ParsedCommand::new("NOTICE")
            .with_argument("me")
            .with_argument("12:30");
        assert_eq!(cmd.to_string(), "NOTICE me :12:30");

        let cmd = ParsedCommand::new("TOPIC")
            .with_argument("#chan")
            .with_argument("");
        assert_eq!(cmd.to_string(), "TOPIC #chan :");
    }

    #[test]
    fn test_display_reparses() {
        let line = ":nick PRIVMSG #chan :!reverse hello";
        let cmd = ParsedCommand::parse(line).unwrap();
        assert_eq!(cmd.to_string(), line);
        assert_eq!(ParsedCommand::parse(&cmd.to_string()).unwrap(), cmd);
    }
}
