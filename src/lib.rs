//! Showdown is a library for Texas hold'em showdowns.
//!
//! It finds the best five card hand out of any pool of cards, decides who
//! wins (and splits) when several players go to showdown, deals full rounds
//! from a deck and runs Monte Carlo simulations over many random rounds.
//!
//! ```
//! use showdown::core::{Hand, HandCategory, Rankable};
//!
//! let hand = Hand::new_from_str("AdKdQdJdTd9c2h").unwrap();
//! assert_eq!(HandCategory::RoyalFlush, hand.rank().category());
//! ```

/// Cards, decks and hand ranking. Everything in core is agnostic to the
/// betting structure of the game.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
/// Simulations over many rounds and the loggers that watch them.
pub mod simulation;
