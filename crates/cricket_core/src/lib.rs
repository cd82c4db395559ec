//! # cricket_core - Deterministic Cricket Tournament Simulation Engine
//!
//! Simulates a four-team knockout cricket tournament ball by ball: delivery
//! outcome resolution, innings progression, match play and bracket
//! advancement.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same tournament)
//! - Ball-by-ball innings state machine with explicit phases
//! - Structured event stream for narration, logging or UI front-ends
//! - Every probability threshold exposed through [`SimConfig`]
//!
//! ## Quick start
//!
//! ```
//! use cricket_core::{
//!     Field, FieldSize, NullSink, Player, SimConfig, Team, TournamentPlan, TournamentSimulator,
//! };
//!
//! fn squad(name: &str) -> Team {
//!     let players = (0..5)
//!         .map(|i| Player::new(format!("{} {}", name, i), 0.5, 0.6, 0.5, 0.5, 0.5).unwrap())
//!         .collect();
//!     Team::new(name, players).unwrap()
//! }
//!
//! let plan = TournamentPlan {
//!     teams: [squad("India"), squad("England"), squad("Australia"), squad("Pakistan")],
//!     field: Field::new(FieldSize::Large, 0.7, 0.8, 0.9).unwrap(),
//!     config: SimConfig::default(),
//!     seed: 42,
//! };
//! let result = TournamentSimulator::new(plan).unwrap().run(&mut NullSink).unwrap();
//! println!("{} are champions", result.champion.name);
//! ```

pub mod engine;
pub mod error;
pub mod models;

pub use engine::{
    DeliveryOutcome, InningsPhase, InningsSimulator, MatchSimulator, NarrationSink, NullSink,
    OutcomeResolver, RecordingSink, Scoreboard, SimConfig, SimEvent, TiePolicy, TournamentPlan,
    TournamentSimulator,
};
pub use error::{Result, SimError};
pub use models::{
    Field, FieldSize, MatchDecision, MatchResult, MatchSide, Player, Team, TournamentResult,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
