//! Procedural dungeon generation.
//!
//! Builds a fixed-length room sequence from static catalogs. Room
//! descriptions are assigned in catalog order — never shuffled — so two
//! runs with the same random source produce identical dungeons. Per
//! room the draws happen in a fixed order: enemy presence, then enemy
//! name/health/attack/reward if present, then loot presence, then loot
//! name/value if present.

use delve_core::{Dungeon, Enemy, Loot, ROOM_COUNT, RandomSource, Room};

/// Room descriptions, assigned to rooms 0..9 in this order.
pub const ROOM_DESCRIPTIONS: [&str; ROOM_COUNT] = [
    "A damp antechamber lit by a single guttering torch.",
    "A collapsed gallery, its pillars worn to stumps.",
    "A flooded cistern crossed by a narrow plank.",
    "A bone-littered den that smells of old blood.",
    "A vaulted crypt whose niches stand empty.",
    "A fungal grotto glowing with pale blue light.",
    "An armory stripped of everything but rust.",
    "A spiral stair landing choked with cobwebs.",
    "A shrine to a god whose name has flaked away.",
    "A great hall ending at a sealed obsidian door.",
];

/// Enemy names drawn uniformly when a room rolls an enemy.
pub const ENEMY_NAMES: [&str; 5] = ["Goblin", "Skeleton", "Giant Rat", "Cave Spider", "Bandit"];

/// Loot names drawn uniformly when a room rolls loot.
pub const LOOT_NAMES: [&str; 5] = [
    "Gold Ring",
    "Silver Chalice",
    "Ancient Coin Pouch",
    "Jeweled Dagger",
    "Rune-Etched Amulet",
];

/// Enemy health at creation, inclusive.
pub const ENEMY_HEALTH: (i32, i32) = (15, 30);
/// Enemy attack power at creation, inclusive.
pub const ENEMY_ATTACK_POWER: (i32, i32) = (5, 10);
/// Gold granted for defeating an enemy, inclusive.
pub const ENEMY_GOLD_REWARD: (i32, i32) = (5, 20);
/// Gold value of a piece of loot, inclusive.
pub const LOOT_GOLD_VALUE: (i32, i32) = (10, 50);

/// Draw from an inclusive `(min, max)` pair.
///
/// [`RandomSource::range`] is closed-open, so the documented inclusive
/// ranges need `max + 1` as the upper bound.
fn roll_inclusive(rng: &mut impl RandomSource, (min, max): (i32, i32)) -> i32 {
    rng.range(min, max + 1)
}

/// Draw a name uniformly from a catalog.
fn pick_name(rng: &mut impl RandomSource, catalog: &[&str]) -> String {
    let index = rng.range(0, catalog.len() as i32) as usize;
    catalog[index].to_string()
}

/// Generate a fresh dungeon of [`ROOM_COUNT`] rooms.
///
/// Each room independently has a 50% chance of an enemy and a 50%
/// chance of loot. No side effects beyond the draws; persistence is the
/// caller's concern.
pub fn generate(rng: &mut impl RandomSource) -> Dungeon {
    let rooms = ROOM_DESCRIPTIONS
        .iter()
        .map(|description| {
            let mut room = Room::new(*description);
            if rng.coin_flip() {
                room.enemy = Some(Enemy {
                    name: pick_name(rng, &ENEMY_NAMES),
                    health: roll_inclusive(rng, ENEMY_HEALTH),
                    attack_power: roll_inclusive(rng, ENEMY_ATTACK_POWER),
                    gold_reward: roll_inclusive(rng, ENEMY_GOLD_REWARD),
                });
            }
            if rng.coin_flip() {
                room.loot = Some(Loot {
                    name: pick_name(rng, &LOOT_NAMES),
                    gold_value: roll_inclusive(rng, LOOT_GOLD_VALUE),
                });
            }
            room
        })
        .collect();
    Dungeon::new(rooms)
}
