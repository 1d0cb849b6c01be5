//! Turn-based combat resolution.
//!
//! One call to [`resolve_exchange`] runs a single player-choice →
//! outcome exchange: the player's action always resolves first, and a
//! killing blow suppresses the enemy's retaliation entirely. The
//! resolver mutates the player and enemy it is handed and reports a
//! tagged outcome plus an event log; clearing the room and moving the
//! player are the caller's job.

use std::fmt;

use delve_core::{Enemy, Player, RandomSource};

/// Smallest damage a player attack can deal.
pub const PLAYER_MIN_DAMAGE: i32 = 5;
/// Smallest damage an enemy retaliation can deal.
pub const ENEMY_MIN_DAMAGE: i32 = 2;

/// What the player chose to do this exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// Strike the enemy.
    Attack,
    /// Attempt to escape to the previous room.
    Flee,
}

impl fmt::Display for CombatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Flee => write!(f, "flee"),
        }
    }
}

/// How an exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Both sides still stand; the encounter continues.
    Continue,
    /// The enemy is dead. Terminal: the caller clears the room's enemy.
    Victory {
        /// Gold already granted to the player.
        gold_reward: i32,
    },
    /// The player escaped. Terminal: the caller moves the player back
    /// one room; the enemy keeps its remaining health.
    Fled,
    /// The player is dead. Terminal regardless of whose turn just
    /// resolved.
    Defeat,
}

/// A renderable record of something that happened during an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player's attack landed.
    PlayerHit {
        /// Enemy name.
        name: String,
        /// Damage dealt.
        damage: i32,
        /// Enemy health after the hit.
        remaining: i32,
    },
    /// The enemy died to the player's attack.
    EnemySlain {
        /// Enemy name.
        name: String,
        /// Gold granted to the player.
        gold_reward: i32,
    },
    /// The enemy's retaliation landed.
    EnemyHit {
        /// Enemy name.
        name: String,
        /// Damage dealt.
        damage: i32,
        /// Player health after the hit.
        remaining: i32,
    },
    /// The flee attempt succeeded.
    FleeSucceeded,
    /// The flee attempt failed; the enemy gets a free hit.
    FleeFailed,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerHit {
                name,
                damage,
                remaining,
            } => write!(f, "You strike the {name} for {damage} damage ({remaining} health left)."),
            Self::EnemySlain { name, gold_reward } => {
                write!(f, "The {name} falls! You claim {gold_reward} gold.")
            }
            Self::EnemyHit {
                name,
                damage,
                remaining,
            } => write!(f, "The {name} hits you for {damage} damage ({remaining} health left)."),
            Self::FleeSucceeded => write!(f, "You slip away."),
            Self::FleeFailed => write!(f, "You fail to escape!"),
        }
    }
}

/// The result of one exchange: a tagged outcome plus its event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// How the exchange ended.
    pub outcome: CombatOutcome,
    /// What happened, in order, for rendering.
    pub events: Vec<CombatEvent>,
}

/// Run one exchange between the player and the enemy in the room.
///
/// Attack: damage is an inclusive draw of `PLAYER_MIN_DAMAGE..=
/// player.attack_power`; if the enemy survives it retaliates with an
/// inclusive draw of `ENEMY_MIN_DAMAGE..=enemy.attack_power`. Flee: a
/// 50% draw; failure costs one retaliation. After any retaliation a
/// dead player means [`CombatOutcome::Defeat`].
pub fn resolve_exchange(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    rng: &mut impl RandomSource,
) -> Exchange {
    let mut events = Vec::new();

    match action {
        CombatAction::Attack => {
            let damage = rng.range(PLAYER_MIN_DAMAGE, player.attack_power + 1);
            enemy.apply_damage(damage);
            events.push(CombatEvent::PlayerHit {
                name: enemy.name.clone(),
                damage,
                remaining: enemy.health,
            });
            if enemy.is_dead() {
                player.award_gold(enemy.gold_reward);
                events.push(CombatEvent::EnemySlain {
                    name: enemy.name.clone(),
                    gold_reward: enemy.gold_reward,
                });
                return Exchange {
                    outcome: CombatOutcome::Victory {
                        gold_reward: enemy.gold_reward,
                    },
                    events,
                };
            }
        }
        CombatAction::Flee => {
            if rng.coin_flip() {
                events.push(CombatEvent::FleeSucceeded);
                return Exchange {
                    outcome: CombatOutcome::Fled,
                    events,
                };
            }
            events.push(CombatEvent::FleeFailed);
        }
    }

    let damage = rng.range(ENEMY_MIN_DAMAGE, enemy.attack_power + 1);
    player.apply_damage(damage);
    events.push(CombatEvent::EnemyHit {
        name: enemy.name.clone(),
        damage,
        remaining: player.health,
    });

    let outcome = if player.is_dead() {
        CombatOutcome::Defeat
    } else {
        CombatOutcome::Continue
    };
    Exchange { outcome, events }
}
