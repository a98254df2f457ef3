//! 机器人回复文案

use domain::Card;
use std::fmt::Display;

pub const USAGE: &str = "Send any text message to create a card with that text on the front. \
Back will be empty. Use /help for this hint.";

pub const UNKNOWN_COMMAND: &str = "Unknown command. \
Send any text message to create a card with that text on the front. \
Back will be empty. Use /help for this hint.";

pub const EMPTY_IGNORED: &str = "Empty cards are ignored. \
Send any text message to create a card with that text on the front. \
Back will be empty. Use /help for this hint.";

pub fn create_ok(card: &Card) -> String {
    format!(
        "Card created ✅\nID: {}\nFront: {}\nBack: {}",
        card.id, card.front, card.back
    )
}

pub fn create_fail(err: impl Display) -> String {
    format!("Failed to create card: {err}")
}
