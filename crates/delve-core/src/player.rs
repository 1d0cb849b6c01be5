//! The player aggregate: health, attack power, gold, and inventory.

use serde::{Deserialize, Serialize};

/// Health a fresh player starts with.
pub const STARTING_HEALTH: i32 = 100;
/// Attack power a fresh player starts with (static for a playthrough).
pub const STARTING_ATTACK_POWER: i32 = 10;

/// The player of a single playthrough.
///
/// Health is floored at 0 and has no ceiling. Gold only ever increases,
/// and the inventory is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current health. Never negative.
    pub health: i32,
    /// Damage ceiling for the player's attacks.
    pub attack_power: i32,
    /// Gold collected from loot and combat rewards.
    pub gold: i32,
    /// Names of items taken, in the order they were taken.
    pub inventory: Vec<String>,
}

impl Player {
    /// Create a fresh player with the starting stats.
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            attack_power: STARTING_ATTACK_POWER,
            gold: 0,
            inventory: Vec::new(),
        }
    }

    /// Apply incoming damage, flooring health at 0.
    pub fn apply_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "damage must be non-negative");
        self.health = (self.health - amount).max(0);
    }

    /// True once health has reached 0.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Add gold from loot or a combat reward.
    pub fn award_gold(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "gold awards must be non-negative");
        self.gold += amount;
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, name: impl Into<String>) {
        self.inventory.push(name.into());
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
