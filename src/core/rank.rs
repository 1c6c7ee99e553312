use std::cmp::Ordering;
use std::fmt;

use super::{Card, Hand, Suit, Value};

/// All the different possible hand categories, weakest first.
///
/// Categories are compared by position only; the score stored in an
/// [`EvaluatedHand`] breaks ties between hands of the same category.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pairs of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to Ace all of the same suit.
    RoyalFlush = 9,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

impl HandCategory {
    /// Every category, weakest first.
    pub const fn categories() -> [HandCategory; 10] {
        CATEGORIES
    }

    /// Position of the category, 0 for high card up to 9 for a royal flush.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five card hand found in a pool of cards.
///
/// The score only orders hands of the same category. Use
/// [`EvaluatedHand::cmp_strength`] to compare any two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: [Card; 5],
    score: u32,
}

impl EvaluatedHand {
    fn new(category: HandCategory, cards: [Card; 5], score: u32) -> Self {
        Self {
            category,
            cards,
            score,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards making the hand. The made combination comes first,
    /// highest group first, followed by the kickers from high to low.
    /// Straights start with their high card; the wheel starts with the ace.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Tie breaking score within the category.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Compare the strength of two hands, category first then score.
    ///
    /// ```
    /// use showdown::core::{Hand, Rankable};
    /// use std::cmp::Ordering;
    ///
    /// let pair = Hand::new_from_str("AsAd7c4h2s").unwrap().rank();
    /// let two_pair = Hand::new_from_str("3s3d2c2h9s").unwrap().rank();
    /// assert_eq!(Ordering::Less, pair.cmp_strength(&two_pair));
    /// ```
    pub fn cmp_strength(&self, other: &EvaluatedHand) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.score.cmp(&other.score))
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::hand::write_cards(f, &self.cards)?;
        write!(f, " {}", self.category)
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Find the best five card hand. It doesn't do any caching so it's left
    /// up to the user to understand that duplicate work will be done if this
    /// is called more than once.
    fn rank(&self) -> EvaluatedHand;
}

impl Rankable for [Card] {
    fn rank(&self) -> EvaluatedHand {
        evaluate(self)
    }
}

impl Rankable for Vec<Card> {
    fn rank(&self) -> EvaluatedHand {
        evaluate(self)
    }
}

impl Rankable for Hand {
    fn rank(&self) -> EvaluatedHand {
        evaluate(self.as_slice())
    }
}

/// Evaluate a pool of five or more distinct cards.
///
/// Categories are tried strongest first and the first one that matches wins,
/// so a pool always produces a hand; high card is the fallback.
///
/// ```
/// use showdown::core::{evaluate, Card, HandCategory};
///
/// let pool: Vec<Card> = ["2d", "9c", "Tc", "Jc", "Qc", "Kc", "Ac"]
///     .into_iter()
///     .map(|s| Card::try_from(s).unwrap())
///     .collect();
/// assert_eq!(HandCategory::RoyalFlush, evaluate(&pool).category());
/// ```
///
/// # Panics
///
/// Panics if there are fewer than five cards.
pub fn evaluate(cards: &[Card]) -> EvaluatedHand {
    assert!(
        cards.len() >= 5,
        "Ranking needs at least 5 cards, got {}",
        cards.len()
    );
    let pool = Pool::new(cards);

    pool.straight_flush()
        .or_else(|| pool.four_of_a_kind())
        .or_else(|| pool.full_house())
        .or_else(|| pool.flush())
        .or_else(|| pool.straight())
        .or_else(|| pool.three_of_a_kind())
        .or_else(|| pool.two_pair())
        .or_else(|| pool.pair())
        .unwrap_or_else(|| pool.high_card())
}

/// Find the highest five card straight in cards sorted by value, highest
/// first.
///
/// Cards with the same value as their neighbour are skipped without breaking
/// the run. The result starts with the high card. If there is no run of five
/// the wheel (A-2-3-4-5) is tried, returned as `[A, 5, 4, 3, 2]`.
///
/// ```
/// use showdown::core::{find_straight, Card, Value};
///
/// let mut cards: Vec<Card> = ["9s", "8c", "8d", "7h", "6s", "5c", "2d"]
///     .into_iter()
///     .map(|s| Card::try_from(s).unwrap())
///     .collect();
/// cards.sort_by(Card::cmp_value_desc);
///
/// let run = find_straight(&cards).unwrap();
/// assert_eq!(Value::Nine, run[0].value);
/// assert_eq!(Value::Five, run[4].value);
/// ```
///
/// # Panics
///
/// Panics if the cards aren't sorted by value from highest to lowest.
pub fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    assert!(
        cards.windows(2).all(|w| w[0].value >= w[1].value),
        "Cards must be sorted by value in descending order"
    );

    let mut run: Vec<Card> = Vec::with_capacity(5);
    for w in cards.windows(2) {
        let (curr, next) = (w[0], w[1]);
        if curr.value.ordinal() == next.value.ordinal() + 1 {
            run.push(curr);
            if run.len() == 4 {
                run.push(next);
                return run.try_into().ok();
            }
        } else if curr.value != next.value {
            run.clear();
        }
    }

    let wheel = [Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two]
        .map(|v| cards.iter().find(|c| c.value == v).copied());
    match wheel {
        [Some(a), Some(five), Some(four), Some(three), Some(two)] => {
            Some([a, five, four, three, two])
        }
        _ => None,
    }
}

/// A straight scores as its high card, except the wheel which plays as five
/// high.
fn straight_score(run: &[Card; 5]) -> u32 {
    if run[0].value == Value::Ace && run[1].value == Value::Five {
        Value::Five.ordinal()
    } else {
        run[0].value.ordinal()
    }
}

/// Base 100 positional score of cards sorted highest first. The lowest card
/// is the least significant digit.
fn positional_score(cards: &[Card]) -> u32 {
    cards
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| c.value.ordinal() * 100u32.pow(i as u32))
        .sum()
}

/// Counts over a pool of cards sorted by value, highest first.
struct Pool {
    cards: Vec<Card>,
    value_counts: [u8; 13],
    suit_counts: [u8; 4],
    max_count: u8,
}

impl Pool {
    fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by(Card::cmp_value_desc);

        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for c in &sorted {
            value_counts[c.value as usize] += 1;
            suit_counts[c.suit as usize] += 1;
        }
        let max_count = value_counts.iter().copied().max().unwrap_or(0);

        Self {
            cards: sorted,
            value_counts,
            suit_counts,
            max_count,
        }
    }

    fn count(&self, value: Value) -> u8 {
        self.value_counts[value as usize]
    }

    /// Highest value whose count satisfies the predicate.
    fn highest_value<P: Fn(Value, u8) -> bool>(&self, pred: P) -> Option<Value> {
        Value::values()
            .into_iter()
            .rev()
            .find(|v| pred(*v, self.count(*v)))
    }

    /// Suits with at least five cards.
    fn flush_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits()
            .into_iter()
            .filter(move |s| self.suit_counts[*s as usize] >= 5)
    }

    fn suited(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit == suit).collect()
    }

    /// Up to `n` cards of the value in pool order, spades before diamonds.
    fn take(&self, value: Value, n: usize) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(move |c| c.value == value)
            .take(n)
    }

    /// The `n` highest cards whose value isn't excluded.
    fn kickers(&self, exclude: &[Value], n: usize) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| !exclude.contains(&c.value))
            .take(n)
            .collect()
    }

    fn straight_flush(&self) -> Option<EvaluatedHand> {
        self.flush_suits()
            .filter_map(|suit| find_straight(&self.suited(suit)))
            .map(|run| {
                let category = if run[0].value == Value::Ace && run[4].value == Value::Ten {
                    HandCategory::RoyalFlush
                } else {
                    HandCategory::StraightFlush
                };
                EvaluatedHand::new(category, run, straight_score(&run))
            })
            .max_by_key(|h| h.score)
    }

    fn four_of_a_kind(&self) -> Option<EvaluatedHand> {
        if self.max_count != 4 {
            return None;
        }
        let quad = self.highest_value(|_, n| n == 4)?;
        let kicker = self.kickers(&[quad], 1);
        let score = quad.ordinal() * 100 + kicker.first()?.value.ordinal();

        let best: Vec<Card> = self.take(quad, 4).chain(kicker).collect();
        Some(EvaluatedHand::new(
            HandCategory::FourOfAKind,
            best.try_into().ok()?,
            score,
        ))
    }

    fn full_house(&self) -> Option<EvaluatedHand> {
        if self.max_count < 3 {
            return None;
        }
        let trips = self.highest_value(|_, n| n >= 3)?;
        let pair = self.highest_value(|v, n| v != trips && n >= 2)?;
        let score = trips.ordinal() * 100 + pair.ordinal();

        let best: Vec<Card> = self.take(trips, 3).chain(self.take(pair, 2)).collect();
        Some(EvaluatedHand::new(
            HandCategory::FullHouse,
            best.try_into().ok()?,
            score,
        ))
    }

    fn flush(&self) -> Option<EvaluatedHand> {
        self.flush_suits()
            .filter_map(|suit| {
                let best: [Card; 5] = self.suited(suit).get(..5)?.try_into().ok()?;
                Some(EvaluatedHand::new(
                    HandCategory::Flush,
                    best,
                    positional_score(&best),
                ))
            })
            .max_by_key(|h| h.score)
    }

    fn straight(&self) -> Option<EvaluatedHand> {
        find_straight(&self.cards)
            .map(|run| EvaluatedHand::new(HandCategory::Straight, run, straight_score(&run)))
    }

    fn three_of_a_kind(&self) -> Option<EvaluatedHand> {
        if self.max_count != 3 {
            return None;
        }
        let trips = self.highest_value(|_, n| n == 3)?;
        let kickers = self.kickers(&[trips], 2);
        let score = trips.ordinal() * 100u32.pow(2) + positional_score(&kickers);

        let best: Vec<Card> = self.take(trips, 3).chain(kickers).collect();
        Some(EvaluatedHand::new(
            HandCategory::ThreeOfAKind,
            best.try_into().ok()?,
            score,
        ))
    }

    fn two_pair(&self) -> Option<EvaluatedHand> {
        if self.max_count != 2 {
            return None;
        }
        let high = self.highest_value(|_, n| n == 2)?;
        let low = self.highest_value(|v, n| v != high && n == 2)?;
        let kicker = self.kickers(&[high, low], 1);
        let score = high.ordinal() * 100u32.pow(2)
            + low.ordinal() * 100
            + kicker.first()?.value.ordinal();

        let best: Vec<Card> = self
            .take(high, 2)
            .chain(self.take(low, 2))
            .chain(kicker)
            .collect();
        Some(EvaluatedHand::new(
            HandCategory::TwoPair,
            best.try_into().ok()?,
            score,
        ))
    }

    fn pair(&self) -> Option<EvaluatedHand> {
        if self.max_count != 2 {
            return None;
        }
        let pair = self.highest_value(|_, n| n == 2)?;
        let kickers = self.kickers(&[pair], 3);
        let score = pair.ordinal() * 100u32.pow(3) + positional_score(&kickers);

        let best: Vec<Card> = self.take(pair, 2).chain(kickers).collect();
        Some(EvaluatedHand::new(
            HandCategory::Pair,
            best.try_into().ok()?,
            score,
        ))
    }

    fn high_card(&self) -> EvaluatedHand {
        let c = &self.cards;
        let best = [c[0], c[1], c[2], c[3], c[4]];
        EvaluatedHand::new(HandCategory::HighCard, best, positional_score(&best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use std::collections::HashSet;

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into()
    }

    fn sorted_desc(s: &str) -> Vec<Card> {
        let mut c = cards(s);
        c.sort_by(Card::cmp_value_desc);
        c
    }

    fn values(hand: &EvaluatedHand) -> Vec<Value> {
        hand.cards().iter().map(|c| c.value).collect()
    }

    fn card_set(cards: &[Card]) -> HashSet<Card> {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::HighCard < HandCategory::ThreeOfAKind);
        assert!(HandCategory::StraightFlush < HandCategory::RoyalFlush);

        // Declaration order is the strength order.
        let all = HandCategory::categories();
        for w in all.windows(2) {
            assert!(w[0] < w[1]);
            assert_eq!(w[0].ordinal() + 1, w[1].ordinal());
        }
    }

    #[test]
    fn test_royal_flush() {
        let hand = cards("2d9cTcJcQcKcAc").rank();
        assert_eq!(HandCategory::RoyalFlush, hand.category());
        assert_eq!(card_set(&cards("TcJcQcKcAc")), card_set(hand.cards()));
        assert_eq!(Value::Ace.ordinal(), hand.score());
    }

    #[test]
    fn test_broadway_off_suit_is_a_straight() {
        let hand = cards("TcJcQcKcAd2h3s").rank();
        assert_eq!(HandCategory::Straight, hand.category());
        assert_eq!(Value::Ace.ordinal(), hand.score());
    }

    #[test]
    fn test_wheel_straight_flush() {
        let wheel = cards("Ac2c3c4c5c6d7d").rank();
        assert_eq!(HandCategory::StraightFlush, wheel.category());
        assert_eq!(card_set(&cards("Ac2c3c4c5c")), card_set(wheel.cards()));
        assert_eq!(Value::Ace, wheel.cards()[0].value);
        assert_eq!(Value::Five.ordinal(), wheel.score());

        let six_high = cards("2c3c4c5c6cKdKh").rank();
        assert_eq!(HandCategory::StraightFlush, six_high.category());
        assert!(wheel.score() < six_high.score());
        assert_eq!(Ordering::Less, wheel.cmp_strength(&six_high));
    }

    #[test]
    fn test_straight_flush_not_mixed_with_other_suit() {
        // 9-5 hearts is a straight flush even though a higher off suit
        // straight is possible.
        let hand = cards("9h8h7h6h5hTs4c").rank();
        assert_eq!(HandCategory::StraightFlush, hand.category());
        assert_eq!(Value::Nine.ordinal(), hand.score());
        assert!(hand.cards().iter().all(|c| c.suit == Suit::Heart));
    }

    #[test]
    fn test_flush_with_gap_and_straight_is_flush() {
        // Hearts flush, off suit straight, no straight flush.
        let hand = cards("Kh9h7h6h5h8s4c").rank();
        assert_eq!(HandCategory::Flush, hand.category());
    }

    #[test]
    fn test_two_flush_suits() {
        let hand = cards("AhKhQhJh9hAsKsQsJsTs").rank();
        assert_eq!(HandCategory::RoyalFlush, hand.category());
        assert!(hand.cards().iter().all(|c| c.suit == Suit::Spade));

        let hand = cards("AhKhQhJh9hKsQsJsTs8s").rank();
        assert_eq!(HandCategory::Flush, hand.category());
        assert!(hand.cards().iter().all(|c| c.suit == Suit::Heart));
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = cards("AsAcAhAdKs2c3d").rank();
        assert_eq!(HandCategory::FourOfAKind, hand.category());
        assert_eq!(
            vec![Value::Ace, Value::Ace, Value::Ace, Value::Ace, Value::King],
            values(&hand)
        );
        assert_eq!(12 * 100 + 11, hand.score());
    }

    #[test]
    fn test_four_of_a_kind_kicker_from_trips() {
        let hand = cards("7s7c7h7dKsKcKh").rank();
        assert_eq!(HandCategory::FourOfAKind, hand.category());
        assert_eq!(Value::King, hand.cards()[4].value);
        assert_eq!(5 * 100 + 11, hand.score());
    }

    #[test]
    fn test_full_house() {
        let hand = cards("KsKcKh9d9s2c3d").rank();
        assert_eq!(HandCategory::FullHouse, hand.category());
        assert_eq!(
            vec![Value::King, Value::King, Value::King, Value::Nine, Value::Nine],
            values(&hand)
        );
        assert_eq!(11 * 100 + 7, hand.score());
    }

    #[test]
    fn test_full_house_from_two_trips() {
        let hand = cards("9d9s9cKsKcKh2d").rank();
        assert_eq!(HandCategory::FullHouse, hand.category());
        assert_eq!(11 * 100 + 7, hand.score());
        assert_eq!(
            vec![Value::King, Value::King, Value::King, Value::Nine, Value::Nine],
            values(&hand)
        );
    }

    #[test]
    fn test_full_house_picks_highest_pair() {
        let hand = cards("2s2c2hQdQs5c5d").rank();
        assert_eq!(HandCategory::FullHouse, hand.category());
        assert_eq!(10, hand.score());
        assert_eq!(Value::Queen, hand.cards()[3].value);
    }

    #[test]
    fn test_trips_without_pair_falls_through() {
        let hand = cards("KsKcKh9d8s2c3d").rank();
        assert_eq!(HandCategory::ThreeOfAKind, hand.category());
        assert_eq!(
            vec![Value::King, Value::King, Value::King, Value::Nine, Value::Eight],
            values(&hand)
        );
        assert_eq!(11 * 100 * 100 + 7 * 100 + 6, hand.score());
    }

    #[test]
    fn test_flush_scores() {
        let akqj9 = cards("AcKcQcJc9c2d3h").rank();
        let akqj7 = cards("AcKcQcJc7c2d3h").rank();
        let kqj98 = cards("KcQcJc9c8c2d3h").rank();
        for h in [&akqj9, &akqj7, &kqj98] {
            assert_eq!(HandCategory::Flush, h.category());
        }
        assert!(akqj9.score() > akqj7.score());
        assert!(akqj7.score() > kqj98.score());
        assert_eq!(
            7 + 9 * 100 + 10 * 100u32.pow(2) + 11 * 100u32.pow(3) + 12 * 100u32.pow(4),
            akqj9.score()
        );
    }

    #[test]
    fn test_flush_uses_top_five_of_suit() {
        let hand = cards("Ac9c7c5c3c2cKd").rank();
        assert_eq!(HandCategory::Flush, hand.category());
        assert_eq!(
            vec![Value::Ace, Value::Nine, Value::Seven, Value::Five, Value::Three],
            values(&hand)
        );
    }

    #[test]
    fn test_straight_with_duplicates() {
        let hand = cards("9s8c8d7h6s5c2d").rank();
        assert_eq!(HandCategory::Straight, hand.category());
        assert_eq!(
            vec![Value::Nine, Value::Eight, Value::Seven, Value::Six, Value::Five],
            values(&hand)
        );
        assert_eq!(Value::Nine.ordinal(), hand.score());
    }

    #[test]
    fn test_highest_straight_wins() {
        let hand = cards("4s5c6d7h8s9cTd").rank();
        assert_eq!(HandCategory::Straight, hand.category());
        assert_eq!(Value::Ten.ordinal(), hand.score());
    }

    #[test]
    fn test_wheel() {
        let wheel = cards("As2c3d4h5s9cKd").rank();
        assert_eq!(HandCategory::Straight, wheel.category());
        assert_eq!(Value::Five.ordinal(), wheel.score());

        let six_high = cards("2c3d4h5s6s9cKd").rank();
        assert_eq!(HandCategory::Straight, six_high.category());
        assert!(wheel.score() < six_high.score());
    }

    #[test]
    fn test_no_wrap_around_straight() {
        let hand = cards("QsKcAd2h3s9c7d").rank();
        assert_eq!(HandCategory::HighCard, hand.category());
        assert_eq!(Value::Ace, hand.cards()[0].value);
    }

    #[test]
    fn test_two_pair() {
        let hand = cards("AsAcKdKh2s7c4d").rank();
        assert_eq!(HandCategory::TwoPair, hand.category());
        assert_eq!(
            vec![Value::Ace, Value::Ace, Value::King, Value::King, Value::Seven],
            values(&hand)
        );
        assert_eq!(12 * 100 * 100 + 11 * 100 + 5, hand.score());
    }

    #[test]
    fn test_two_pair_kicker_from_third_pair() {
        let hand = cards("AsAcKdKhQsQc2d").rank();
        assert_eq!(HandCategory::TwoPair, hand.category());
        assert_eq!(Value::Queen, hand.cards()[4].value);
        assert_eq!(12 * 100 * 100 + 11 * 100 + 10, hand.score());

        let hand = cards("AsAc2d2hKsQc3c3d").rank();
        assert_eq!(
            vec![Value::Ace, Value::Ace, Value::Three, Value::Three, Value::King],
            values(&hand)
        );
    }

    #[test]
    fn test_pair() {
        let hand = cards("8s8cAdKh2s7c4d").rank();
        assert_eq!(HandCategory::Pair, hand.category());
        assert_eq!(
            vec![Value::Eight, Value::Eight, Value::Ace, Value::King, Value::Seven],
            values(&hand)
        );
        assert_eq!(
            6 * 100u32.pow(3) + 12 * 100u32.pow(2) + 11 * 100 + 5,
            hand.score()
        );
    }

    #[test]
    fn test_pair_kicker_ordering() {
        let better = cards("8s8cAdKh9s").rank();
        let worse = cards("8h8dAcKs7s").rank();
        assert!(better.score() > worse.score());
    }

    #[test]
    fn test_matched_cards_in_suit_order() {
        let pair = cards("AdAs7c4h2s").rank();
        assert_eq!(cards("AsAd"), pair.cards()[..2].to_vec());

        let quads = cards("9d9h9c9sKs").rank();
        assert_eq!(HandCategory::FourOfAKind, quads.category());
        assert_eq!(cards("9s9c9h9d"), quads.cards()[..4].to_vec());
    }

    #[test]
    fn test_high_card() {
        let hand = cards("As9c7dKh2s3c4d").rank();
        assert_eq!(HandCategory::HighCard, hand.category());
        assert_eq!(
            vec![Value::Ace, Value::King, Value::Nine, Value::Seven, Value::Four],
            values(&hand)
        );
        assert_eq!(
            2 + 5 * 100 + 7 * 100u32.pow(2) + 11 * 100u32.pow(3) + 12 * 100u32.pow(4),
            hand.score()
        );
    }

    #[test]
    fn test_five_and_six_card_pools() {
        assert_eq!(HandCategory::Pair, cards("AsAd7c4h2s").rank().category());
        assert_eq!(
            HandCategory::Straight,
            cards("As2d3c4h5sKd").rank().category()
        );
    }

    #[test]
    fn test_order_independent() {
        let mut rng = rand::rng();
        for pool in [
            "2d9cTcJcQcKcAc",
            "7s7c7h7dKsKcKh",
            "AsAcKdKhQsQc2d",
            "9s8c8d7h6s5c2d",
            "As9c7dKh2s3c4d",
        ] {
            let mut c = cards(pool);
            let expected = c.rank();
            for _ in 0..20 {
                c.shuffle(&mut rng);
                let hand = c.rank();
                assert_eq!(expected.category(), hand.category());
                assert_eq!(expected.score(), hand.score());
                assert_eq!(expected.cards(), hand.cards());
            }
        }
    }

    #[test]
    fn test_random_pools_are_consistent() {
        let mut rng = rand::rng();
        let mut deck: Vec<Card> = (0..52u8).map(Card::from).collect();
        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            let pool = &deck[..7];
            let hand = pool.rank();

            // The best hand is five distinct cards out of the pool.
            let best = card_set(hand.cards());
            assert_eq!(5, best.len());
            assert!(best.is_subset(&card_set(pool)));

            // Any five card subset is ranked no higher than the full pool.
            let five = (&pool[..5]).rank();
            assert_ne!(Ordering::Less, hand.cmp_strength(&five));

            // Ranking the best five cards alone gives the same result.
            let again = hand.cards().to_vec().rank();
            assert_eq!(hand.category(), again.category());
            assert_eq!(hand.score(), again.score());
        }
    }

    #[test]
    fn test_find_straight_wheel_order() {
        let run = find_straight(&sorted_desc("As5c4d3h2sKd")).unwrap();
        assert_eq!(
            vec![Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two],
            run.iter().map(|c| c.value).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_find_straight_none() {
        assert!(find_straight(&sorted_desc("AsKdQcJh9s")).is_none());
        assert!(find_straight(&sorted_desc("As3d4c5h7s")).is_none());
    }

    #[test]
    #[should_panic(expected = "sorted")]
    fn test_find_straight_unsorted_panics() {
        find_straight(&cards("2s3d4c5h6s"));
    }

    #[test]
    #[should_panic(expected = "at least 5 cards")]
    fn test_too_few_cards_panics() {
        cards("AsAdAc7h").rank();
    }

    #[test]
    fn test_display() {
        let hand = cards("AsAcKdKh2s7c4d").rank();
        assert_eq!("[As Ac Kh Kd 7c] Two Pair", hand.to_string());
    }
}
