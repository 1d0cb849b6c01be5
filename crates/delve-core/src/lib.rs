//! Core types for Delve: the player, the dungeon and its rooms, and the
//! random source capability.
//!
//! This crate defines the data model the engine operates on. It is
//! independent of the game loop — you can construct a [`Dungeon`]
//! programmatically or deserialize one from JSON.

/// The dungeon, its rooms, and the encounters they own.
pub mod dungeon;
/// Error types used throughout the crate.
pub mod error;
/// The player aggregate.
pub mod player;
/// The injectable random source and its implementations.
pub mod random;

/// Re-export dungeon types.
pub use dungeon::{Dungeon, Enemy, Loot, ROOM_COUNT, Room};
/// Re-export error types.
pub use error::{CoreResult, DungeonError};
/// Re-export the player aggregate.
pub use player::Player;
/// Re-export random source types.
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
