//! Running many random rounds and recording what happened.

/// Observers of finished rounds.
mod logger;
#[cfg(feature = "serde")]
pub use self::logger::{JsonRoundLogger, PlayerRecord, RoundRecord};
pub use self::logger::{FnLogger, HandLogger, LoggerError, RoundLogger, StatsLog, StatsLogger};

/// The simulation loop and its builder.
mod monte_carlo;
pub use self::monte_carlo::{MonteCarloSimulation, MonteCarloSimulationBuilder, SimulationSummary};
