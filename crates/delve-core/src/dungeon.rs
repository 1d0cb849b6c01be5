//! The dungeon: an ordered sequence of rooms, each owning at most one
//! enemy and one piece of loot, plus the player's position within it.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, DungeonError};

/// How many rooms every dungeon has.
pub const ROOM_COUNT: usize = 10;

/// A hostile occupant of a room.
///
/// Owned exclusively by its room; removed from the room once defeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Remaining health. Never negative.
    pub health: i32,
    /// Damage ceiling for the enemy's retaliation.
    pub attack_power: i32,
    /// Gold granted to the player on victory.
    pub gold_reward: i32,
}

impl Enemy {
    /// Apply incoming damage, flooring health at 0.
    pub fn apply_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "damage must be non-negative");
        self.health = (self.health - amount).max(0);
    }

    /// True once health has reached 0.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// A treasure lying in a room. Removed from the room once taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loot {
    /// Display name.
    pub name: String,
    /// Gold granted to the player when taken.
    pub gold_value: i32,
}

/// One room of the dungeon.
///
/// The optional payloads stand in for the usual `has_enemy`/`has_loot`
/// flags: an encounter either exists or it doesn't, so flag and payload
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Fixed description, assigned at generation time.
    pub description: String,
    /// The enemy occupying this room, if any.
    pub enemy: Option<Enemy>,
    /// The loot lying in this room, if any.
    pub loot: Option<Loot>,
}

impl Room {
    /// Create an empty room with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            enemy: None,
            loot: None,
        }
    }
}

/// The dungeon for one playthrough: the room sequence and the player's
/// position within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// The rooms, in fixed order.
    pub rooms: Vec<Room>,
    /// Index of the room the player is currently in.
    pub current_room_index: usize,
}

impl Dungeon {
    /// Create a dungeon positioned at the first room.
    pub fn new(rooms: Vec<Room>) -> Self {
        debug_assert!(!rooms.is_empty(), "a dungeon needs at least one room");
        Self {
            rooms,
            current_room_index: 0,
        }
    }

    /// The room the player is currently in.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current_room_index]
    }

    /// Mutable access to the room the player is currently in.
    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_room_index]
    }

    /// Move one room forward, saturating at the last room.
    ///
    /// Returns whether movement actually happened; `false` means the
    /// player was already at the boundary, which is not an error.
    pub fn move_next(&mut self) -> bool {
        if self.current_room_index + 1 < self.rooms.len() {
            self.current_room_index += 1;
            true
        } else {
            false
        }
    }

    /// Move one room backward, saturating at the first room.
    ///
    /// Returns whether movement actually happened.
    pub fn move_previous(&mut self) -> bool {
        if self.current_room_index > 0 {
            self.current_room_index -= 1;
            true
        } else {
            false
        }
    }

    /// Number of rooms in the dungeon.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check the structural invariants of a record that came from disk.
    ///
    /// A dungeon built through [`Dungeon::new`] and mutated only through
    /// navigation cannot violate these; a deserialized one can.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rooms.is_empty() {
            return Err(DungeonError::Empty);
        }
        if self.current_room_index >= self.rooms.len() {
            return Err(DungeonError::RoomIndexOutOfBounds {
                index: self.current_room_index,
                rooms: self.rooms.len(),
            });
        }
        Ok(())
    }
}
