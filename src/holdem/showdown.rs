use std::cmp::Ordering;

use tracing::{Level, event};

use crate::core::{Card, EvaluatedHand, HandCategory, PlayerBitSet, Rankable};

/// The most seats a single deck can deal to with a full board.
pub const MAX_PLAYERS: usize = 23;

/// The outcome of comparing every seat's best hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    hands: Vec<EvaluatedHand>,
    winners: PlayerBitSet,
}

impl Showdown {
    /// Best hand of every seat, in seat order.
    pub fn hands(&self) -> &[EvaluatedHand] {
        &self.hands
    }

    pub fn winners(&self) -> PlayerBitSet {
        self.winners
    }

    /// More than one seat shares the pot.
    pub fn is_split(&self) -> bool {
        self.winners.count() > 1
    }

    /// The hand that won, or `None` when there were no seats.
    pub fn winning_hand(&self) -> Option<&EvaluatedHand> {
        self.winners.ones().next().map(|idx| &self.hands[idx])
    }
}

/// Rank each seat's hole cards together with the community cards and find
/// who wins.
///
/// ```
/// use showdown::core::{Card, Hand};
/// use showdown::holdem::resolve;
///
/// let board: Vec<Card> = Hand::new_from_str("AsAcAhAd2c").unwrap().into();
/// let holes = [
///     [Card::try_from("Kd").unwrap(), Card::try_from("3h").unwrap()],
///     [Card::try_from("Qd").unwrap(), Card::try_from("3s").unwrap()],
/// ];
/// let showdown = resolve(&board, &holes);
/// assert_eq!(vec![0], showdown.winners().ones().collect::<Vec<_>>());
/// ```
///
/// # Panics
///
/// Panics with more than [`MAX_PLAYERS`] seats, or if a seat ends up with
/// fewer than five cards.
pub fn resolve(community: &[Card], holes: &[[Card; 2]]) -> Showdown {
    assert!(
        holes.len() <= MAX_PLAYERS,
        "At most {MAX_PLAYERS} players can be resolved, got {}",
        holes.len()
    );

    let mut pool: Vec<Card> = Vec::with_capacity(2 + community.len());
    let hands: Vec<EvaluatedHand> = holes
        .iter()
        .enumerate()
        .map(|(idx, hole)| {
            pool.clear();
            pool.extend_from_slice(hole);
            pool.extend_from_slice(community);
            let hand = pool.rank();
            event!(Level::TRACE, idx, %hand, "evaluated seat");
            hand
        })
        .collect();

    let winners = pick_winners(&hands);
    event!(
        Level::DEBUG,
        winners = ?winners.ones().collect::<Vec<_>>(),
        "showdown resolved"
    );
    Showdown { hands, winners }
}

/// Find the winning seats among already evaluated hands.
///
/// Only the seats holding the strongest category are candidates. Among
/// those, every seat with the top score wins, so equal hands split.
pub fn pick_winners(hands: &[EvaluatedHand]) -> PlayerBitSet {
    let mut best = HandCategory::HighCard;
    let mut candidates = PlayerBitSet::default();

    for (idx, hand) in hands.iter().enumerate() {
        match hand.category().cmp(&best) {
            Ordering::Greater => {
                best = hand.category();
                candidates.clear();
                candidates.enable(idx);
            }
            Ordering::Equal => candidates.enable(idx),
            Ordering::Less => {}
        }
    }

    if candidates.count() <= 1 {
        return candidates;
    }

    let top = candidates
        .ones()
        .map(|idx| hands[idx].score())
        .max()
        .unwrap_or_default();
    candidates
        .ones()
        .filter(|idx| hands[*idx].score() == top)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into()
    }

    fn hole(s: &str) -> [Card; 2] {
        cards(s).try_into().unwrap()
    }

    fn winners(showdown: &Showdown) -> Vec<usize> {
        showdown.winners().ones().collect()
    }

    #[test]
    fn test_quads_kicker_decides() {
        let board = cards("AsAcAhAd2c");
        let showdown = resolve(&board, &[hole("Kd3h"), hole("Qd3s")]);

        assert_eq!(vec![0], winners(&showdown));
        assert!(!showdown.is_split());
        assert_eq!(
            HandCategory::FourOfAKind,
            showdown.winning_hand().unwrap().category()
        );
    }

    #[test]
    fn test_quads_same_kicker_split() {
        let board = cards("AsAcAhAd2c");
        let showdown = resolve(&board, &[hole("Kd3h"), hole("Kh4s")]);

        assert_eq!(vec![0, 1], winners(&showdown));
        assert!(showdown.is_split());
    }

    #[test]
    fn test_board_plays_for_everyone() {
        let board = cards("TsJsQsKsAs");
        let showdown = resolve(&board, &[hole("2c3d"), hole("4h5c"), hole("AdAh")]);

        assert_eq!(vec![0, 1, 2], winners(&showdown));
        assert!(
            showdown
                .hands()
                .iter()
                .all(|h| h.category() == HandCategory::RoyalFlush)
        );
    }

    #[test]
    fn test_category_beats_score() {
        // A pair of aces scores far above a pair of threes plus deuces once
        // the scores are compared, but two pair is the higher category.
        let board = cards("Ah9c7d3s2h");
        let showdown = resolve(&board, &[hole("AsKd"), hole("3d2c")]);

        assert_eq!(HandCategory::Pair, showdown.hands()[0].category());
        assert_eq!(HandCategory::TwoPair, showdown.hands()[1].category());
        assert_eq!(vec![1], winners(&showdown));
    }

    #[test]
    fn test_later_category_clears_candidates() {
        let board = cards("Kh9c7d4s2h");
        let showdown = resolve(
            &board,
            &[hole("KsQd"), hole("KdJd"), hole("7c7h"), hole("Qh3c")],
        );

        assert_eq!(HandCategory::ThreeOfAKind, showdown.hands()[2].category());
        assert_eq!(vec![2], winners(&showdown));
    }

    #[test]
    fn test_same_category_higher_score_wins() {
        let board = cards("Kh9c7d4s2h");
        let showdown = resolve(&board, &[hole("KsQd"), hole("KdJd"), hole("3c5c")]);

        assert_eq!(vec![0], winners(&showdown));
    }

    #[test]
    fn test_no_seats() {
        let showdown = resolve(&cards("Kh9c7d4s2h"), &[]);
        assert!(showdown.winners().empty());
        assert!(showdown.winning_hand().is_none());
    }

    #[test]
    fn test_pick_winners_from_hands() {
        let hands = vec![
            cards("2c3d5h7s9c").rank(),
            cards("2d3h5s7c9d").rank(),
            cards("2h3s5c7d8h").rank(),
        ];
        assert_eq!(vec![0, 1], pick_winners(&hands).ones().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn test_too_many_players() {
        let board = cards("Kh9c7d4s2h");
        let holes = vec![hole("3c5c"); MAX_PLAYERS + 1];
        resolve(&board, &holes);
    }
}
