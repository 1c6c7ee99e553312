use std::fmt;

use super::ShowdownError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// ```
    /// use showdown::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::values()[0]);
    /// assert_eq!(Value::Ace, Value::values()[12]);
    /// ```
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a u8 ordinal and convert it to a value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a valid ordinal (0..=12).
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v)]
    }

    /// The ordinal of this value. Two is 0 and Ace is 12.
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Parse the single character form of a value.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The single character form of a value.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 ordinal and convert it to a suit.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid ordinal (0..=3).
    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s)]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' | 'D' => Some(Suit::Diamond),
            's' | 'S' => Some(Suit::Spade),
            'h' | 'H' => Some(Suit::Heart),
            'c' | 'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards are small `Copy` values compared structurally, so any two
/// constructions of the same value and suit are the same card. Each of the
/// 52 cards also has a stable index in `0..52` (`value * 4 + suit`).
///
/// ```
/// use showdown::core::{Card, Suit, Value};
///
/// let c = Card::new(Value::Six, Suit::Club);
/// assert_eq!(c, Card::from(17));
/// assert_eq!(17, u8::from(c));
/// assert_eq!("6c", c.to_string());
/// ```
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Orders cards by value, highest first. Cards of the same value are
    /// ordered by suit so the order is deterministic.
    pub fn cmp_value_desc(&self, other: &Card) -> std::cmp::Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl From<u8> for Card {
    /// # Panics
    ///
    /// Panics if the index is not below 52.
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.value as u8) * 4 + card.suit as u8
    }
}

impl TryFrom<&str> for Card {
    type Error = ShowdownError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(ShowdownError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(ShowdownError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(ShowdownError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(ShowdownError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(ShowdownError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
