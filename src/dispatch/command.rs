//! Command recognition.
//!
//! Splits `/name@bot payload` message text into a [`Command`] and its payload.

use std::str::FromStr;

use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::error_handling::EventType;

/// Message-style commands the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Start,
    Help,
    Resolver,
    Lookup,
}

impl Command {
    pub fn event_type(self) -> EventType {
        match self {
            Command::Start => EventType::Start,
            Command::Help => EventType::Help,
            Command::Resolver => EventType::Resolver,
            Command::Lookup => EventType::Lookup,
        }
    }
}

/// A slash command found in message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandText<'a> {
    /// Recognized command, or `None` for an unknown `/name`.
    pub command: Option<Command>,
    /// Whether the command carried an explicit `@bot` suffix.
    pub mentioned: bool,
    /// Text after the command token, leading whitespace removed.
    pub payload: &'a str,
}

/// Extracts a command from message text.
///
/// Returns `None` for text that is not a command, and for commands explicitly
/// addressed to another bot (`/lookup@otherbot`). The mention comparison is
/// case-insensitive, as usernames are.
pub fn parse_command<'a>(text: &'a str, bot_username: Option<&str>) -> Option<CommandText<'a>> {
    let text = text.trim_start();
    let rest = text.strip_prefix('/')?;
    let (token, payload) = match rest.split_once(char::is_whitespace) {
        Some((token, payload)) => (token, payload.trim_start()),
        None => (rest, ""),
    };
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }
    if let Some(mention) = mention {
        match bot_username {
            Some(own) if own.eq_ignore_ascii_case(mention) => {}
            _ => return None,
        }
    }
    Some(CommandText {
        command: Command::from_str(name).ok(),
        mentioned: mention.is_some(),
        payload,
    })
}
