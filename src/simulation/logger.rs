use std::cell::{BorrowMutError, RefCell};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Add;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;
use tracing::{Level, event};

use crate::core::{Card, HandCategory, Value, write_cards};
use crate::holdem::{Player, StartingHand, Suitedness};

/// LoggerError is the error type for round logger implementations.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("Format Error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[cfg(feature = "serde")]
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Borrow Mut Error: {0}")]
    Borrow(#[from] BorrowMutError),
}

/// Round loggers are told about every finished round of a simulation.
///
/// They only observe: the community cards, every player (with their hole
/// cards and evaluated hands) and the seats that won.
pub trait RoundLogger {
    /// Record one finished round.
    ///
    /// # Arguments
    /// - `community` - The five community cards.
    /// - `players` - Every player at the table, in seat order.
    /// - `winners` - Seats of the winning players, in seat order.
    ///
    /// Returning an error will cause the logger to be dropped from the
    /// `MonteCarloSimulation`.
    fn record_round(
        &mut self,
        community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError>;
}

/// A shared logger can be handed to a simulation while the caller keeps a
/// handle to read the results afterwards.
impl<L: RoundLogger> RoundLogger for Rc<RefCell<L>> {
    fn record_round(
        &mut self,
        community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError> {
        self.try_borrow_mut()?
            .record_round(community, players, winners)
    }
}

/// Keeps a readable text entry for every round.
///
/// ```text
/// Community Cards:
/// [Td 9d 8d 7d 6d]
///
/// Players:
/// P0 [Ad Kd] [Td 9d 8d 7d 6d] Straight Flush
/// P1 [Qd Jd] [Qd Jd Td 9d 8d] Straight Flush (Winner)
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandLogger {
    entries: Vec<String>,
}

impl HandLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write every entry followed by a blank line.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), LoggerError> {
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writeln!(writer)?;
        }
        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), LoggerError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        event!(Level::INFO, path = %path.display(), entries = self.entries.len(), "wrote hand log");
        Ok(())
    }
}

impl RoundLogger for HandLogger {
    fn record_round(
        &mut self,
        community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError> {
        let mut entry = String::from("Community Cards:\n");
        write_cards(&mut entry, community)?;
        entry.push_str("\n\nPlayers:\n");
        for (seat, player) in players.iter().enumerate() {
            write!(entry, "{player}")?;
            if winners.contains(&seat) {
                entry.push_str(" (Winner)");
            }
            entry.push('\n');
        }
        self.entries.push(entry);
        Ok(())
    }
}

/// How many times something was dealt and how many of those won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsLog {
    pub dealt: u64,
    pub won: u64,
}

impl StatsLog {
    pub fn add_stat(&mut self, is_winner: bool) {
        self.dealt += 1;
        if is_winner {
            self.won += 1;
        }
    }

    /// Fraction of the deals that won, between 0 and 1.
    pub fn win_rate(&self) -> f64 {
        if self.dealt == 0 {
            0.0
        } else {
            self.won as f64 / self.dealt as f64
        }
    }
}

impl Add for StatsLog {
    type Output = StatsLog;

    fn add(self, rhs: Self) -> Self::Output {
        StatsLog {
            dealt: self.dealt + rhs.dealt,
            won: self.won + rhs.won,
        }
    }
}

const STARTING_HAND_HEADER: &str = "Rank 1,Rank 2,Number Dealt,Number Won,Win Percentage";
const CATEGORY_HEADER: &str = "Hand Rank,Number Dealt,Number Won,Win Percentage";

/// Win statistics per starting hand and per hand category.
///
/// Split pots count as a win for every player sharing the pot.
#[derive(Debug, Clone, Default)]
pub struct StatsLogger {
    starting_hands: BTreeMap<StartingHand, StatsLog>,
    categories: [StatsLog; 10],
}

impl StatsLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for one starting hand. Never dealt gives an empty log.
    pub fn starting_hand(&self, starting_hand: &StartingHand) -> StatsLog {
        self.starting_hands
            .get(starting_hand)
            .copied()
            .unwrap_or_default()
    }

    /// Starting hands that were dealt at least once, strongest values first.
    pub fn starting_hands(&self) -> impl Iterator<Item = (&StartingHand, &StatsLog)> {
        self.starting_hands.iter().rev()
    }

    /// How often each category was made at showdown and how often it won.
    pub fn category(&self, category: HandCategory) -> StatsLog {
        self.categories[category.ordinal()]
    }

    /// Total number of hole card pairs seen.
    pub fn total_dealt(&self) -> u64 {
        self.starting_hands.values().map(|s| s.dealt).sum()
    }

    /// Suited and offsuit stats merged by value.
    fn combined(&self) -> BTreeMap<(Value, Value), StatsLog> {
        let mut combined: BTreeMap<(Value, Value), StatsLog> = BTreeMap::new();
        for (sh, log) in &self.starting_hands {
            let entry = combined.entry((sh.high, sh.low)).or_default();
            *entry = *entry + *log;
        }
        combined
    }

    pub fn write_combined<W: Write>(&self, writer: &mut W) -> Result<(), LoggerError> {
        writeln!(writer, "{STARTING_HAND_HEADER}")?;
        for ((high, low), log) in self.combined().iter().rev() {
            write_row(writer, &format!("{high},{low}"), log)?;
        }
        Ok(())
    }

    pub fn write_suited<W: Write>(&self, writer: &mut W) -> Result<(), LoggerError> {
        self.write_starting_hands(writer, Suitedness::Suited)
    }

    pub fn write_unsuited<W: Write>(&self, writer: &mut W) -> Result<(), LoggerError> {
        self.write_starting_hands(writer, Suitedness::OffSuit)
    }

    fn write_starting_hands<W: Write>(
        &self,
        writer: &mut W,
        suitedness: Suitedness,
    ) -> Result<(), LoggerError> {
        writeln!(writer, "{STARTING_HAND_HEADER}")?;
        for (sh, log) in self
            .starting_hands()
            .filter(|(sh, _)| sh.suitedness == suitedness)
        {
            write_row(writer, &format!("{},{}", sh.high, sh.low), log)?;
        }
        Ok(())
    }

    /// One row per category that was made, strongest first.
    pub fn write_categories<W: Write>(&self, writer: &mut W) -> Result<(), LoggerError> {
        writeln!(writer, "{CATEGORY_HEADER}")?;
        for category in HandCategory::categories().into_iter().rev() {
            let log = self.category(category);
            if log.dealt > 0 {
                write_row(writer, category.name(), &log)?;
            }
        }
        Ok(())
    }

    /// Write the four csv files next to `base`: for `out/stats.txt` these
    /// are `out/stats combined.txt`, `out/stats suited.txt`,
    /// `out/stats unsuited.txt` and `out/stats handranks.txt`.
    ///
    /// Returns the paths written.
    pub fn write_to_files(&self, base: impl AsRef<Path>) -> Result<Vec<PathBuf>, LoggerError> {
        let base = base.as_ref();
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("stats"));

        let mut written = Vec::with_capacity(4);
        for suffix in ["combined", "suited", "unsuited", "handranks"] {
            let path = base.with_file_name(format!("{stem} {suffix}.txt"));
            let mut writer = BufWriter::new(File::create(&path)?);
            match suffix {
                "combined" => self.write_combined(&mut writer)?,
                "suited" => self.write_suited(&mut writer)?,
                "unsuited" => self.write_unsuited(&mut writer)?,
                _ => self.write_categories(&mut writer)?,
            }
            writer.flush()?;
            event!(Level::INFO, path = %path.display(), "wrote stats");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_row<W: Write>(writer: &mut W, key: &str, log: &StatsLog) -> io::Result<()> {
    writeln!(
        writer,
        "{key},{},{},{:.4}",
        log.dealt,
        log.won,
        log.win_rate()
    )
}

impl RoundLogger for StatsLogger {
    fn record_round(
        &mut self,
        _community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError> {
        for (seat, player) in players.iter().enumerate() {
            let is_winner = winners.contains(&seat);
            if let Some(hole) = player.hole_cards() {
                self.starting_hands
                    .entry(StartingHand::from_hole(hole))
                    .or_default()
                    .add_stat(is_winner);
            }
            if let Some(hand) = player.hand() {
                self.categories[hand.category().ordinal()].add_stat(is_winner);
            }
        }
        Ok(())
    }
}

/// One round as written by [`JsonRoundLogger`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundRecord {
    pub community: Vec<Card>,
    pub players: Vec<PlayerRecord>,
    pub winners: Vec<usize>,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    pub id: usize,
    pub hole: Option<[Card; 2]>,
    pub hand: Option<crate::core::EvaluatedHand>,
}

/// Writes every round as a single line of json.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct JsonRoundLogger<W: Write> {
    writer: W,
}

#[cfg(feature = "serde")]
impl JsonRoundLogger<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and log into it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

#[cfg(feature = "serde")]
impl<W: Write> JsonRoundLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> Result<(), LoggerError> {
        Ok(self.writer.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "serde")]
impl<W: Write> RoundLogger for JsonRoundLogger<W> {
    fn record_round(
        &mut self,
        community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError> {
        let record = RoundRecord {
            community: community.to_vec(),
            players: players
                .iter()
                .map(|p| PlayerRecord {
                    id: p.id(),
                    hole: p.hole_cards(),
                    hand: p.hand().copied(),
                })
                .collect(),
            winners: winners.to_vec(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// A logger that calls a function for every round. Useful for testing and
/// quick collection of numbers.
#[derive(Debug, Clone)]
pub struct FnLogger<F> {
    func: F,
}

impl<F: FnMut(&[Card], &[Player], &[usize]) -> Result<(), LoggerError>> FnLogger<F> {
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F: FnMut(&[Card], &[Player], &[usize]) -> Result<(), LoggerError>> RoundLogger
    for FnLogger<F>
{
    fn record_round(
        &mut self,
        community: &[Card],
        players: &[Player],
        winners: &[usize],
    ) -> Result<(), LoggerError> {
        (self.func)(community, players, winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OrderedDeck, RandomDeck};
    use crate::holdem::Dealer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ordered_round() -> Dealer<OrderedDeck> {
        let mut dealer = Dealer::new_with_players(OrderedDeck::default(), 2);
        dealer.play_round().unwrap();
        dealer
    }

    fn record<L: RoundLogger>(logger: &mut L, dealer: &Dealer<OrderedDeck>, winners: &[usize]) {
        logger
            .record_round(dealer.community_cards(), dealer.players(), winners)
            .unwrap();
    }

    #[test]
    fn test_hand_log_entry() {
        let dealer = ordered_round();
        let mut logger = HandLogger::new();
        record(&mut logger, &dealer, &[1]);

        assert_eq!(1, logger.entries().len());
        assert_eq!(
            "Community Cards:\n\
             [Td 9d 8d 7d 6d]\n\
             \n\
             Players:\n\
             P0 [Ad Kd] [Td 9d 8d 7d 6d] Straight Flush\n\
             P1 [Qd Jd] [Qd Jd Td 9d 8d] Straight Flush (Winner)\n",
            logger.entries()[0]
        );
    }

    #[test]
    fn test_hand_log_write_to_file() {
        let dealer = ordered_round();
        let mut logger = HandLogger::new();
        record(&mut logger, &dealer, &[1]);
        record(&mut logger, &dealer, &[1]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.txt");
        logger.write_to_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(2, contents.matches("Community Cards:").count());
        assert!(contents.ends_with("(Winner)\n\n"));
    }

    #[test]
    fn test_stats_ordered_round() {
        let dealer = ordered_round();
        let mut stats = StatsLogger::new();
        record(&mut stats, &dealer, &[1]);

        let ak = StartingHand {
            high: Value::Ace,
            low: Value::King,
            suitedness: Suitedness::Suited,
        };
        assert_eq!(StatsLog { dealt: 1, won: 0 }, stats.starting_hand(&ak));
        assert_eq!(
            StatsLog { dealt: 2, won: 1 },
            stats.category(HandCategory::StraightFlush)
        );

        let mut suited = Vec::new();
        stats.write_suited(&mut suited).unwrap();
        assert_eq!(
            "Rank 1,Rank 2,Number Dealt,Number Won,Win Percentage\n\
             A,K,1,0,0.0000\n\
             Q,J,1,1,1.0000\n",
            String::from_utf8(suited).unwrap()
        );

        let mut unsuited = Vec::new();
        stats.write_unsuited(&mut unsuited).unwrap();
        assert_eq!(
            "Rank 1,Rank 2,Number Dealt,Number Won,Win Percentage\n",
            String::from_utf8(unsuited).unwrap()
        );

        let mut categories = Vec::new();
        stats.write_categories(&mut categories).unwrap();
        assert_eq!(
            "Hand Rank,Number Dealt,Number Won,Win Percentage\n\
             Straight Flush,2,1,0.5000\n",
            String::from_utf8(categories).unwrap()
        );
    }

    #[test]
    fn test_stats_combined_merges_suits() {
        let players: Vec<Player> = [("Ah", "Kh"), ("As", "Kd"), ("2c", "2d")]
            .into_iter()
            .enumerate()
            .map(|(id, (a, b))| {
                let mut p = Player::new(id);
                p.deal_cards(Card::try_from(a).unwrap(), Card::try_from(b).unwrap());
                p
            })
            .collect();

        let mut stats = StatsLogger::new();
        stats.record_round(&[], &players, &[0, 1]).unwrap();
        stats.record_round(&[], &players, &[2]).unwrap();

        let mut combined = Vec::new();
        stats.write_combined(&mut combined).unwrap();
        assert_eq!(
            "Rank 1,Rank 2,Number Dealt,Number Won,Win Percentage\n\
             A,K,4,2,0.5000\n\
             2,2,2,1,0.5000\n",
            String::from_utf8(combined).unwrap()
        );
        assert_eq!(6, stats.total_dealt());
    }

    #[test]
    fn test_stats_totals_over_many_rounds() {
        let deck = RandomDeck::new_with_rng(StdRng::seed_from_u64(3));
        let mut dealer = Dealer::new_with_players(deck, 6);
        let mut stats = StatsLogger::new();

        for _ in 0..200 {
            let winners = dealer.play_round().unwrap();
            stats
                .record_round(dealer.community_cards(), dealer.players(), &winners)
                .unwrap();
        }

        assert_eq!(200 * 6, stats.total_dealt());
        let made: u64 = HandCategory::categories()
            .into_iter()
            .map(|c| stats.category(c).dealt)
            .sum();
        assert_eq!(200 * 6, made);

        let won: u64 = stats.starting_hands().map(|(_, log)| log.won).sum();
        assert!(won >= 200);
    }

    #[test]
    fn test_stats_write_to_files() {
        let dealer = ordered_round();
        let mut stats = StatsLogger::new();
        record(&mut stats, &dealer, &[1]);

        let dir = tempfile::tempdir().unwrap();
        let written = stats
            .write_to_files(dir.path().join("PokerStats.txt"))
            .unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            vec![
                "PokerStats combined.txt",
                "PokerStats suited.txt",
                "PokerStats unsuited.txt",
                "PokerStats handranks.txt"
            ],
            names
        );
        let handranks = std::fs::read_to_string(&written[3]).unwrap();
        assert!(handranks.starts_with("Hand Rank,"));
    }

    #[test]
    fn test_win_rate_empty() {
        assert_eq!(0.0, StatsLog::default().win_rate());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_lines() {
        let dealer = ordered_round();
        let mut logger = JsonRoundLogger::new(Vec::new());
        record(&mut logger, &dealer, &[1]);
        record(&mut logger, &dealer, &[1]);

        let out = String::from_utf8(logger.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(2, lines.len());

        let parsed: RoundRecord = serde_json::from_str(lines[0]).unwrap();
        let diamond = crate::core::Suit::Diamond;
        assert_eq!(dealer.community_cards(), parsed.community.as_slice());
        assert_eq!(vec![1], parsed.winners);
        assert_eq!(2, parsed.players.len());
        assert_eq!(dealer.players()[1].hand(), parsed.players[1].hand.as_ref());
        assert_eq!(
            Some([
                Card::new(Value::Ace, diamond),
                Card::new(Value::King, diamond)
            ]),
            parsed.players[0].hole
        );
    }

    #[test]
    fn test_fn_logger() {
        let mut count = 0;
        let dealer = ordered_round();
        {
            let mut logger = FnLogger::new(|community: &[Card], _: &[Player], winners: &[usize]| {
                assert_eq!(5, community.len());
                assert_eq!(&[1], winners);
                count += 1;
                Ok(())
            });
            record(&mut logger, &dealer, &[1]);
            record(&mut logger, &dealer, &[1]);
        }
        assert_eq!(2, count);
    }

    #[test]
    fn test_shared_logger_borrow_error() {
        let dealer = ordered_round();
        let shared = Rc::new(RefCell::new(HandLogger::new()));
        let mut handle = shared.clone();

        record(&mut handle, &dealer, &[1]);
        assert_eq!(1, shared.borrow().entries().len());

        let _held = shared.borrow_mut();
        let result = handle.record_round(dealer.community_cards(), dealer.players(), &[1]);
        assert!(matches!(result, Err(LoggerError::Borrow(_))));
    }
}
