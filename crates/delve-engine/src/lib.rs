//! Game engine for Delve.
//!
//! Provides procedural dungeon generation, the turn-based combat
//! resolver, the loot resolver, and [`GameSession`] — the top-level
//! state machine a frontend drives with validated commands. The engine
//! never reads input or prints; the frontend owns the read/print loop
//! and calls [`GameSession::apply`].

/// Turn-based combat resolution.
pub mod combat;
/// Error types used throughout the crate.
pub mod error;
/// Procedural dungeon generation.
pub mod generate;
/// Loot take/leave resolution.
pub mod loot;
/// The per-playthrough game session state machine.
pub mod session;

/// Re-export combat types.
pub use combat::{CombatAction, CombatEvent, CombatOutcome, Exchange};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the generator entry point.
pub use generate::generate;
/// Re-export loot types.
pub use loot::LootChoice;
/// Re-export session types.
pub use session::{Command, Event, GameSession, GameView, Phase};
