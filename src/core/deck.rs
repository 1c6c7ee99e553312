use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use super::{Card, ShowdownError, Suit, Value};

/// Somewhere cards can be drawn from.
///
/// Drawing from an exhausted source is an error the caller can recover from
/// by calling [`CardSource::reset`].
pub trait CardSource {
    /// Remove the next card from the source and return it.
    fn draw(&mut self) -> Result<Card, ShowdownError>;
    /// How many cards can still be drawn.
    fn cards_left(&self) -> usize;
    /// Put every card back.
    fn reset(&mut self);
}

/// The normal 52 card deck in a fixed order.
///
/// Cards are stored suit by suit, two to ace, and drawn from the end so the
/// first card drawn is the ace of diamonds.
///
/// ```
/// use showdown::core::{Card, CardSource, OrderedDeck, Suit, Value};
///
/// let mut deck = OrderedDeck::default();
/// assert_eq!(52, deck.cards_left());
/// assert_eq!(Card::new(Value::Ace, Suit::Diamond), deck.draw().unwrap());
/// assert_eq!(51, deck.cards_left());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl OrderedDeck {
    fn fill(&mut self) {
        self.cards.clear();
        for s in Suit::suits() {
            for v in Value::values() {
                self.cards.push(Card::new(v, s));
            }
        }
    }
}

impl Default for OrderedDeck {
    fn default() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Card::COUNT),
        };
        deck.fill();
        deck
    }
}

impl CardSource for OrderedDeck {
    fn draw(&mut self) -> Result<Card, ShowdownError> {
        self.cards.pop().ok_or(ShowdownError::EmptySource)
    }

    fn cards_left(&self) -> usize {
        self.cards.len()
    }

    fn reset(&mut self) {
        self.fill();
    }
}

/// A 52 card deck that is shuffled every time it's reset.
///
/// `RandomDeck::new()` uses the thread local rng. Pass a seeded rng to
/// [`RandomDeck::new_with_rng`] to get the same deals every run.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use showdown::core::{CardSource, RandomDeck};
///
/// let mut a = RandomDeck::new_with_rng(StdRng::seed_from_u64(420));
/// let mut b = RandomDeck::new_with_rng(StdRng::seed_from_u64(420));
/// assert_eq!(a.draw().unwrap(), b.draw().unwrap());
/// ```
#[derive(Debug)]
pub struct RandomDeck<R: Rng = ThreadRng> {
    deck: OrderedDeck,
    rng: R,
}

impl RandomDeck<ThreadRng> {
    pub fn new() -> Self {
        Self::new_with_rng(rand::rng())
    }
}

impl Default for RandomDeck<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDeck<R> {
    /// Create a shuffled deck using the provided rng.
    pub fn new_with_rng(rng: R) -> Self {
        let mut deck = Self {
            deck: OrderedDeck::default(),
            rng,
        };
        deck.reset();
        deck
    }
}

impl<R: Rng> CardSource for RandomDeck<R> {
    fn draw(&mut self) -> Result<Card, ShowdownError> {
        self.deck.draw()
    }

    fn cards_left(&self) -> usize {
        self.deck.cards_left()
    }

    fn reset(&mut self) {
        self.deck.fill();
        self.deck.cards.shuffle(&mut self.rng);
    }
}
