use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// showdown library. It uses `thiserror` to provide
/// readable error messages
///
/// Caller bugs such as ranking fewer than five cards are not represented
/// here; those panic.
#[derive(Error, Debug, Hash, PartialEq, Eq)]
pub enum ShowdownError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Can't draw from an empty card source")]
    EmptySource,
    #[error("Player {0} has no hole cards")]
    NotDealt(usize),
    #[error("Showdown needs at least 3 community cards, found {0}")]
    TooFewCommunityCards(usize),
    #[error("A table needs between 2 and 23 players, found {0}")]
    InvalidPlayerCount(usize),
    #[error("A simulation needs to play at least one hand")]
    InvalidHandCount,
}
