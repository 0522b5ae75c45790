//! Line parsing implementation.
//!
//! Processing order is fixed: sender prefix first, then the trailing
//! argument, then whitespace tokenization of what is left. Changing the
//! order changes results on lines with several `:` characters.

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1, take_until, take_while},
    character::complete::{char, satisfy},
    combinator::{map, opt, rest},
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::error::{ProtocolError, Result};

use super::types::ParsedCommand;

/// Token separator: ASCII whitespace plus vertical tab.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Borrowed pieces of a line before sender decoding.
struct LineParts<'a> {
    sender: Option<&'a str>,
    name: &'a str,
    middle: &'a str,
    trailing: Option<&'a str>,
}

/// Parse a leading `:sender ` segment.
///
/// The segment runs up to the first separator, which is consumed with it.
/// A prefix that never reaches a separator swallows the whole line.
fn parse_sender(input: &str) -> IResult<&str, &str> {
    preceded(
        char(':'),
        terminated(take_till(is_separator), opt(satisfy(is_separator))),
    )(input)
}

/// Split at the first `:`; everything after it is the trailing argument.
fn parse_trailing(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    alt((
        pair(terminated(take_until(":"), char(':')), map(rest, Some)),
        map(rest, |middle| (middle, None)),
    ))(input)
}

/// Parse the command name, skipping leading separators.
fn parse_name(input: &str) -> IResult<&str, &str> {
    preceded(take_while(is_separator), take_till1(is_separator))(input)
}

fn parse_line(input: &str) -> IResult<&str, LineParts<'_>> {
    let (input, sender) = opt(parse_sender)(input)?;
    let (input, (middle, trailing)) = parse_trailing(input)?;
    let (middle, name) = parse_name(middle)?;

    Ok((
        input,
        LineParts {
            sender,
            name,
            middle,
            trailing,
        },
    ))
}

/// Decode `nick[!user]` into its two parts.
///
/// Only the first two `!`-separated parts are used and empty parts are
/// absent. A lone part always lands in the nickname slot.
fn sender_parts(info: &str) -> (Option<String>, Option<String>) {
    let mut parts = info
        .split('!')
        .map(|part| (!part.is_empty()).then(|| part.to_owned()));
    let nickname = parts.next().flatten();
    let username = parts.next().flatten();

    match (nickname, username) {
        (None, Some(user)) => (Some(user), None),
        other => other,
    }
}

impl ParsedCommand {
    /// Parse a single protocol line.
    ///
    /// Trailing CR/LF terminators are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedCommand`] when no command name is
    /// left once the sender prefix and trailing argument are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use linebot_proto::ParsedCommand;
    ///
    /// let cmd = ParsedCommand::parse(":nick!user PRIVMSG #rust :hello there").unwrap();
    /// assert_eq!(cmd.nickname.as_deref(), Some("nick"));
    /// assert_eq!(cmd.username.as_deref(), Some("user"));
    /// assert_eq!(cmd.name, "PRIVMSG");
    /// assert_eq!(cmd.arguments, vec!["#rust", "hello there"]);
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]);

        let (_, parts) = parse_line(trimmed).map_err(|_| ProtocolError::malformed_command(line))?;
        let (nickname, username) = parts.sender.map(sender_parts).unwrap_or((None, None));

        let mut arguments: Vec<String> = parts
            .middle
            .split(is_separator)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        if let Some(trailing) = parts.trailing {
            arguments.push(trailing.to_owned());
        }

        Ok(Self {
            nickname,
            username,
            name: parts.name.to_owned(),
            arguments,
        })
    }
}

impl FromStr for ParsedCommand {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
