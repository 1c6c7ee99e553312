use tracing::{Level, event};

use super::{MAX_PLAYERS, Player, resolve};
use crate::core::{Card, CardSource, ShowdownError};

/// Runs rounds of hold'em at a table: deals hole cards, the flop, turn and
/// river from a [`CardSource`], then decides who won.
///
/// ```
/// use showdown::core::OrderedDeck;
/// use showdown::holdem::Dealer;
///
/// let mut dealer = Dealer::new_with_players(OrderedDeck::default(), 2);
/// let winners = dealer.play_round().unwrap();
///
/// // The second seat holds the queen high straight flush.
/// assert_eq!(vec![1], winners);
/// assert_eq!(5, dealer.community_cards().len());
/// ```
#[derive(Debug)]
pub struct Dealer<S: CardSource> {
    source: S,
    players: Vec<Player>,
    community: Vec<Card>,
}

impl<S: CardSource> Dealer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            players: Vec::new(),
            community: Vec::with_capacity(5),
        }
    }

    /// A dealer with `num_players` seats, with ids matching their seats.
    pub fn new_with_players(source: S, num_players: usize) -> Self {
        let mut dealer = Self::new(source);
        dealer.players = (0..num_players).map(Player::new).collect();
        dealer
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Gather every card back into the source and clear the board.
    pub fn shuffle(&mut self) {
        self.source.reset();
        self.community.clear();
    }

    /// Give every player two cards, one player at a time.
    pub fn deal(&mut self) -> Result<(), ShowdownError> {
        for player in self.players.iter_mut() {
            let first = self.source.draw()?;
            let second = self.source.draw()?;
            player.deal_cards(first, second);
            event!(Level::TRACE, player = player.id(), %first, %second, "dealt");
        }
        Ok(())
    }

    /// Deal three community cards. Returns the board so far.
    pub fn deal_flop(&mut self) -> Result<&[Card], ShowdownError> {
        self.deal_community(3, "flop")
    }

    /// Deal the fourth community card. Returns the board so far.
    pub fn deal_turn(&mut self) -> Result<&[Card], ShowdownError> {
        self.deal_community(1, "turn")
    }

    /// Deal the fifth community card. Returns the board so far.
    pub fn deal_river(&mut self) -> Result<&[Card], ShowdownError> {
        self.deal_community(1, "river")
    }

    fn deal_community(&mut self, n: usize, street: &str) -> Result<&[Card], ShowdownError> {
        for _ in 0..n {
            let card = self.source.draw()?;
            self.community.push(card);
        }
        event!(Level::TRACE, street, community = ?self.community, "dealt community");
        Ok(&self.community)
    }

    /// Evaluate every player's best hand, store it on the player and return
    /// the seats of the winners in seat order.
    ///
    /// At least the flop must be out and every player must hold cards.
    pub fn determine_winners(&mut self) -> Result<Vec<usize>, ShowdownError> {
        if self.community.len() < 3 {
            return Err(ShowdownError::TooFewCommunityCards(self.community.len()));
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ShowdownError::InvalidPlayerCount(self.players.len()));
        }
        let holes = self
            .players
            .iter()
            .map(|p| p.hole_cards().ok_or(ShowdownError::NotDealt(p.id())))
            .collect::<Result<Vec<_>, _>>()?;

        let showdown = resolve(&self.community, &holes);
        for (player, hand) in self.players.iter_mut().zip(showdown.hands()) {
            player.set_hand(*hand);
        }
        Ok(showdown.winners().ones().collect())
    }

    /// Shuffle, deal a full board and find the winners.
    pub fn play_round(&mut self) -> Result<Vec<usize>, ShowdownError> {
        self.shuffle();
        self.deal()?;
        self.deal_flop()?;
        self.deal_turn()?;
        self.deal_river()?;
        self.determine_winners()
    }
}
