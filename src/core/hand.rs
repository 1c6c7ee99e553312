use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use super::{Card, ShowdownError};

/// An ordered collection of distinct cards.
///
/// Cards keep the order they were added in. Adding a card that's already in
/// the hand is a no-op, so a `Hand` is always a valid pool to rank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(Vec::with_capacity(7))
    }

    /// Create a hand from the cards. Repeated cards are only kept once.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self::new();
        hand.extend(cards);
        hand
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    /// Add a card to the end of the hand. Returns false if the card was
    /// already there.
    pub fn insert(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            return false;
        }
        self.0.push(c);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    /// Parse a hand from a string of two character cards like `"AdKh7c"`.
    ///
    /// ```
    /// use showdown::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AdKh").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert!(hand.contains(&Card::new(Value::King, Suit::Heart)));
    ///
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, ShowdownError> {
        let mut chars = hand_string.chars();
        let mut hand = Self::new();

        // Keep looping until we explicitly break
        loop {
            let vco = chars.next();
            if vco.is_none() {
                break;
            } else {
                let sco = chars.next();
                let v = vco
                    .and_then(super::Value::from_char)
                    .ok_or(ShowdownError::UnexpectedValueChar)?;
                let s = sco
                    .ok_or(ShowdownError::TooFewChars)
                    .map(super::Suit::from_char)?
                    .ok_or(ShowdownError::UnexpectedSuitChar)?;

                let c = Card::new(v, s);
                if !hand.insert(c) {
                    return Err(ShowdownError::DuplicateCardInHand(c));
                }
            }
        }

        Ok(hand)
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

/// Writes cards as `[Ac Kd 7h]`.
pub(crate) fn write_cards(f: &mut impl fmt::Write, cards: &[Card]) -> fmt::Result {
    f.write_char('[')?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{c}")?;
    }
    f.write_char(']')
}
