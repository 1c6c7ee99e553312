//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error types for parsing and dealing.
mod error;
pub use self::error::ShowdownError;

/// Code related to cards in hands.
mod hand;
pub use self::hand::Hand;
pub(crate) use self::hand::write_cards;

/// Card sources: the ordered and the shuffled deck.
mod deck;
/// Export the trait and both decks.
pub use self::deck::{CardSource, OrderedDeck, RandomDeck};

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{EvaluatedHand, HandCategory, Rankable, evaluate, find_straight};

/// Set of seats, used for winners.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
