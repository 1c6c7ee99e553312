/// A seat at the table and the hand it made.
mod player;
/// Export `Player`
pub use self::player::Player;

/// Ranking every seat against the board and picking winners.
mod showdown;
/// Export `resolve` and the `Showdown` it returns.
pub use self::showdown::{MAX_PLAYERS, Showdown, pick_winners, resolve};

/// Module for the `Dealer` that runs a round from deal to showdown.
mod dealer;
/// Export `Dealer`
pub use self::dealer::Dealer;

/// The 169 shapes of two hole cards.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{StartingHand, Suitedness};
