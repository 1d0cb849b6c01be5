//! Error types for the game engine.

use thiserror::Error;

use crate::session::{Command, Phase};

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command is not part of the current phase's command set.
    /// Frontends recover by re-prompting; never fatal.
    #[error("{command} is not available while {phase}")]
    CommandNotAllowed {
        /// The rejected command.
        command: Command,
        /// The phase the session was in.
        phase: Phase,
    },

    /// A combat command arrived with no enemy in the room. Indicates the
    /// phase got out of sync with the room state, which is a bug.
    #[error("no enemy in this room")]
    NothingToFight,

    /// A loot command arrived with no loot in the room. Indicates the
    /// phase got out of sync with the room state, which is a bug.
    #[error("no loot in this room")]
    NothingToLoot,

    /// The dungeon handed to the session failed validation.
    #[error(transparent)]
    Dungeon(#[from] delve_core::DungeonError),
}
