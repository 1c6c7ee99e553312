use std::fmt;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{Level, event};

use super::RoundLogger;
use crate::core::{HandCategory, RandomDeck, ShowdownError};
use crate::holdem::{Dealer, MAX_PLAYERS, Player};

/// What happened over a whole simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    pub hands_played: u64,
    /// Rounds where more than one player won.
    pub split_pots: u64,
    /// Rounds won with each category, indexed by `HandCategory::ordinal`.
    pub wins_by_category: [u64; 10],
}

impl SimulationSummary {
    /// Number of rounds won with `category`.
    pub fn wins(&self, category: HandCategory) -> u64 {
        self.wins_by_category[category.ordinal()]
    }

    fn record(&mut self, players: &[Player], winners: &[usize]) {
        self.hands_played += 1;
        if winners.len() > 1 {
            self.split_pots += 1;
        }
        if let Some(hand) = winners.first().and_then(|seat| players[*seat].hand()) {
            self.wins_by_category[hand.category().ordinal()] += 1;
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = |n: u64| {
            if self.hands_played == 0 {
                0.0
            } else {
                n as f64 * 100.0 / self.hands_played as f64
            }
        };
        writeln!(f, "Hands played: {}", self.hands_played)?;
        writeln!(
            f,
            "Split pots:   {} ({:.2}%)",
            self.split_pots,
            percent(self.split_pots)
        )?;
        writeln!(f, "{:<16} {:>12} {:>8}", "Winning hand", "Count", "Share")?;
        for category in HandCategory::categories().into_iter().rev() {
            let wins = self.wins(category);
            writeln!(
                f,
                "{:<16} {:>12} {:>7.2}%",
                category.name(),
                wins,
                percent(wins)
            )?;
        }
        Ok(())
    }
}

/// # MonteCarloSimulationBuilder
///
/// Configures a run of many random rounds at one table. Every setter is
/// optional: the defaults are 100000 hands, 8 players, the thread rng and
/// no loggers.
///
/// ```
/// use showdown::simulation::MonteCarloSimulationBuilder;
///
/// let mut sim = MonteCarloSimulationBuilder::new()
///     .num_hands(100)
///     .num_players(4)
///     .build()
///     .unwrap();
/// let summary = sim.run().unwrap();
/// assert_eq!(100, summary.hands_played);
/// ```
///
/// Pass in a seeded rng for runs that can be repeated:
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use showdown::simulation::MonteCarloSimulationBuilder;
///
/// let run = |seed| {
///     MonteCarloSimulationBuilder::new()
///         .num_hands(50)
///         .rng(StdRng::seed_from_u64(seed))
///         .build()
///         .unwrap()
///         .run()
///         .unwrap()
/// };
/// assert_eq!(run(420), run(420));
/// ```
pub struct MonteCarloSimulationBuilder<R: Rng = ThreadRng> {
    num_hands: u64,
    num_players: usize,
    rng: R,
    loggers: Vec<Box<dyn RoundLogger>>,
}

impl MonteCarloSimulationBuilder<ThreadRng> {
    pub fn new() -> Self {
        Self {
            num_hands: 100_000,
            num_players: 8,
            rng: rand::rng(),
            loggers: vec![],
        }
    }
}

impl Default for MonteCarloSimulationBuilder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MonteCarloSimulationBuilder<R> {
    pub fn num_hands(mut self, num_hands: u64) -> Self {
        self.num_hands = num_hands;
        self
    }

    pub fn num_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Use `rng` to shuffle the deck.
    pub fn rng<T: Rng>(self, rng: T) -> MonteCarloSimulationBuilder<T> {
        MonteCarloSimulationBuilder {
            num_hands: self.num_hands,
            num_players: self.num_players,
            rng,
            loggers: self.loggers,
        }
    }

    /// Set the loggers for the simulation created by this builder.
    pub fn loggers(mut self, loggers: Vec<Box<dyn RoundLogger>>) -> Self {
        self.loggers = loggers;
        self
    }

    /// Add one more logger.
    pub fn logger(mut self, logger: impl RoundLogger + 'static) -> Self {
        self.loggers.push(Box::new(logger));
        self
    }

    /// Check the settings and create the simulation.
    ///
    /// Fails with `InvalidPlayerCount` unless there are between 2 and
    /// `MAX_PLAYERS` players, and with `InvalidHandCount` for zero hands.
    pub fn build(self) -> Result<MonteCarloSimulation<R>, ShowdownError> {
        if !(2..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ShowdownError::InvalidPlayerCount(self.num_players));
        }
        if self.num_hands == 0 {
            return Err(ShowdownError::InvalidHandCount);
        }

        let deck = RandomDeck::new_with_rng(self.rng);
        Ok(MonteCarloSimulation {
            dealer: Dealer::new_with_players(deck, self.num_players),
            num_hands: self.num_hands,
            loggers: self.loggers,
        })
    }
}

/// Plays a fixed number of rounds at one table and feeds every round to the
/// loggers.
pub struct MonteCarloSimulation<R: Rng = ThreadRng> {
    dealer: Dealer<RandomDeck<R>>,
    num_hands: u64,
    loggers: Vec<Box<dyn RoundLogger>>,
}

impl<R: Rng> MonteCarloSimulation<R> {
    pub fn num_hands(&self) -> u64 {
        self.num_hands
    }

    pub fn num_players(&self) -> usize {
        self.dealer.players().len()
    }

    /// Loggers still attached; failing loggers are removed during `run`.
    pub fn num_loggers(&self) -> usize {
        self.loggers.len()
    }

    /// Play every round.
    pub fn run(&mut self) -> Result<SimulationSummary, ShowdownError> {
        let mut summary = SimulationSummary::default();
        // Report every 5%
        let step = (self.num_hands / 20).max(1);

        event!(
            Level::INFO,
            hands = self.num_hands,
            players = self.num_players(),
            "starting simulation"
        );
        for played in 1..=self.num_hands {
            let winners = self.dealer.play_round()?;
            summary.record(self.dealer.players(), &winners);
            self.record_loggers(&winners);

            if played % step == 0 {
                event!(
                    Level::INFO,
                    played,
                    percent = played * 100 / self.num_hands,
                    "simulation progress"
                );
            }
        }
        event!(
            Level::INFO,
            hands = summary.hands_played,
            split_pots = summary.split_pots,
            "simulation complete"
        );
        Ok(summary)
    }

    fn record_loggers(&mut self, winners: &[usize]) {
        let community = self.dealer.community_cards();
        let players = self.dealer.players();
        self.loggers.retain_mut(|logger| {
            match logger.record_round(community, players, winners) {
                Ok(()) => true,
                Err(error) => {
                    event!(Level::WARN, ?error, "dropping logger that failed");
                    false
                }
            }
        });
    }
}
