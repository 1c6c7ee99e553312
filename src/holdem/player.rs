use std::fmt;

use crate::core::{Card, EvaluatedHand};

/// A seat at the table: two hole cards and the hand they made at the last
/// showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: usize,
    hole_cards: Option<[Card; 2]>,
    hand: Option<EvaluatedHand>,
}

impl Player {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            hole_cards: None,
            hand: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Give the player new hole cards. The hand from the previous round is
    /// forgotten.
    pub fn deal_cards(&mut self, first: Card, second: Card) {
        self.hand = None;
        self.hole_cards = Some([first, second]);
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole_cards
    }

    /// The best hand from the last showdown, if there was one since the deal.
    pub fn hand(&self) -> Option<&EvaluatedHand> {
        self.hand.as_ref()
    }

    pub fn set_hand(&mut self, hand: EvaluatedHand) {
        self.hand = Some(hand);
    }
}

impl fmt::Display for Player {
    /// `P3` before a showdown, `P3 [Ah 3d] [Ah Ac 7h 7s Kd] Two Pair` after.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.id)?;
        if let (Some([a, b]), Some(hand)) = (self.hole_cards, &self.hand) {
            write!(f, " [{a} {b}] {hand}")?;
        }
        Ok(())
    }
}
