//! Loot take/leave resolution.

use std::fmt;

use delve_core::{Loot, Player, Room};

/// The player's decision about a room's loot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootChoice {
    /// Take it: inventory and gold are updated and the room is emptied.
    Take,
    /// Leave it where it lies. The room keeps the loot and re-offers it
    /// on every revisit until taken — an intentional rule, not a leak.
    Leave,
}

impl fmt::Display for LootChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Take => write!(f, "take"),
            Self::Leave => write!(f, "leave"),
        }
    }
}

/// Apply a loot decision to the player and the room.
///
/// Returns the loot that was taken, or `None` on leave (or if the room
/// had none to begin with).
pub fn resolve_loot(player: &mut Player, room: &mut Room, choice: LootChoice) -> Option<Loot> {
    match choice {
        LootChoice::Take => {
            let loot = room.loot.take()?;
            player.add_item(loot.name.clone());
            player.award_gold(loot.gold_value);
            Some(loot)
        }
        LootChoice::Leave => None,
    }
}
