use std::fmt;

use crate::core::{Card, Suit, Value};

#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suitedness {
    OffSuit,
    Suited,
}

/// `StartingHand` is the shape of two hole cards: the two values, high
/// first, and whether they share a suit.
///
/// There are 169 of them; the actual 1326 two card combinations collapse
/// onto these.
///
/// ```
/// use showdown::core::Card;
/// use showdown::holdem::{StartingHand, Suitedness};
///
/// let hole = [Card::try_from("7h").unwrap(), Card::try_from("Kh").unwrap()];
/// let starting = StartingHand::from_hole(hole);
/// assert_eq!(Suitedness::Suited, starting.suitedness);
/// assert_eq!("K7s", starting.to_string());
/// ```
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingHand {
    /// The higher value, or the value of both cards for a pair.
    pub high: Value,
    /// The lower value.
    pub low: Value,
    pub suitedness: Suitedness,
}

impl StartingHand {
    pub fn from_hole(hole: [Card; 2]) -> Self {
        let [a, b] = hole;
        let (high, low) = if a.value >= b.value {
            (a.value, b.value)
        } else {
            (b.value, a.value)
        };
        let suitedness = if a.suit == b.suit {
            Suitedness::Suited
        } else {
            Suitedness::OffSuit
        };
        Self {
            high,
            low,
            suitedness,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Every two card combination with this shape.
    pub fn possible_hands(&self) -> Vec<[Card; 2]> {
        match self.suitedness {
            Suitedness::Suited => self.create_suited(),
            Suitedness::OffSuit => self.create_offsuit(),
        }
    }

    fn create_suited(&self) -> Vec<[Card; 2]> {
        // Can't have a suited pair. Not unless you're cheating.
        if self.is_pair() {
            return vec![];
        }
        Suit::suits()
            .into_iter()
            .map(|s| [Card::new(self.high, s), Card::new(self.low, s)])
            .collect()
    }

    fn create_offsuit(&self) -> Vec<[Card; 2]> {
        let suits = Suit::suits();
        let mut hands = Vec::with_capacity(if self.is_pair() { 6 } else { 12 });
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                hands.push([
                    Card::new(self.high, *suit_one),
                    Card::new(self.low, *suit_two),
                ]);

                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    hands.push([
                        Card::new(self.high, *suit_two),
                        Card::new(self.low, *suit_one),
                    ]);
                }
            }
        }
        hands
    }

    /// Every possible starting hand, strongest values first.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(169);
        let mut values = Value::values();
        values.reverse();
        for (i, high) in values.iter().enumerate() {
            for low in &values[i..] {
                if high != low {
                    hands.push(StartingHand {
                        high: *high,
                        low: *low,
                        suitedness: Suitedness::Suited,
                    });
                }
                hands.push(StartingHand {
                    high: *high,
                    low: *low,
                    suitedness: Suitedness::OffSuit,
                });
            }
        }
        hands
    }
}

impl fmt::Display for StartingHand {
    /// `AA`, `AKs` or `AKo`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        match (self.is_pair(), self.suitedness) {
            (true, _) => Ok(()),
            (false, Suitedness::Suited) => f.write_str("s"),
            (false, Suitedness::OffSuit) => f.write_str("o"),
        }
    }
}
