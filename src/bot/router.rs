//! Ordered trigger table deciding which reply an inbound message gets

use std::borrow::Cow;
use teloxide::utils::command::{BotCommands, ParseError};
use tracing::debug;

use super::ui_builder::OPEN_APP_BUTTON_LABEL;

/// Commands understood by the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    // deep-link payload, empty for a plain `/start`
    #[command(description = "Открыть CashRocket", parse_with = start_payload)]
    Start(String),
}

fn start_payload(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}

/// Which handler a message was routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Start,
    OpenWebApp,
}

/// Predicate side of a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// `/start`, optionally addressed to this bot and carrying a payload
    StartCommand,
    /// Message text equal to the given string, byte for byte
    ExactText(&'static str),
}

impl Trigger {
    pub fn matches(&self, text: &str, bot_username: &str) -> bool {
        match self {
            Trigger::StartCommand => match Command::parse(&command_line(text), bot_username) {
                Ok(Command::Start(payload)) => {
                    if !payload.is_empty() {
                        debug!(payload = %payload, "Start command carries a deep-link payload");
                    }
                    true
                }
                Err(_) => false,
            },
            Trigger::ExactText(expected) => text == *expected,
        }
    }
}

/// Telegram clients may separate a command from its payload with a newline
/// or a tab; the command parser only splits on a space.
fn command_line(text: &str) -> Cow<'_, str> {
    match text.find(char::is_whitespace) {
        Some(idx) if !text[idx..].starts_with(' ') => {
            let separator_len = text[idx..].chars().next().map_or(0, char::len_utf8);
            Cow::Owned(format!("{} {}", &text[..idx], &text[idx + separator_len..]))
        }
        _ => Cow::Borrowed(text),
    }
}

/// Triggers in registration order; the first match wins
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<(Trigger, Route)>,
}

impl Router {
    /// The bot's two routes: `/start`, then the button label
    pub fn new() -> Self {
        Self::from_routes(vec![
            (Trigger::StartCommand, Route::Start),
            (Trigger::ExactText(OPEN_APP_BUTTON_LABEL), Route::OpenWebApp),
        ])
    }

    pub fn from_routes(routes: Vec<(Trigger, Route)>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[(Trigger, Route)] {
        &self.routes
    }

    /// Route a message text, or `None` when no trigger matches
    pub fn route(&self, text: &str, bot_username: &str) -> Option<Route> {
        self.routes
            .iter()
            .find(|(trigger, _)| trigger.matches(text, bot_username))
            .map(|(_, route)| *route)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
