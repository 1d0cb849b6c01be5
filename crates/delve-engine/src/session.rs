//! The per-playthrough game session.
//!
//! `GameSession` owns the player, the dungeon, and the random source,
//! and exposes the top-level state machine as `view()` / `apply(Command)`.
//! It performs no I/O: a frontend renders [`GameView`]s, reads input,
//! and calls back in with validated commands. Persistence is likewise
//! the frontend's job, driven by the `Saved` and `GameOver` terminals.

use std::fmt;

use delve_core::{Dungeon, Enemy, Loot, Player, RandomSource, Room};

use crate::combat::{self, CombatAction, CombatEvent, CombatOutcome};
use crate::error::{EngineError, EngineResult};
use crate::loot::{self, LootChoice};

/// Where the session currently is in the per-room cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The room has an enemy; accepts attack/flee.
    Combat,
    /// The room has loot (and no enemy); accepts take/leave.
    Loot,
    /// The room is resolved; accepts forward/back/save-quit.
    Navigation,
    /// Terminal: the player chose to save and quit.
    Saved,
    /// Terminal: the player died. The save is to be cleared.
    GameOver,
}

impl Phase {
    /// True for the two terminal phases.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Saved | Self::GameOver)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combat => write!(f, "in combat"),
            Self::Loot => write!(f, "inspecting loot"),
            Self::Navigation => write!(f, "exploring"),
            Self::Saved => write!(f, "saved"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// A fully validated command from the frontend.
///
/// Free-form token parsing happens in the frontend; the engine only
/// checks that the command belongs to the current phase's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Strike the enemy (combat).
    Attack,
    /// Attempt to escape to the previous room (combat).
    Flee,
    /// Take the room's loot (loot).
    Take,
    /// Leave the room's loot for later (loot).
    Leave,
    /// Move to the next room (navigation).
    Forward,
    /// Move to the previous room (navigation).
    Back,
    /// Save the game and end the session (navigation).
    SaveQuit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Flee => write!(f, "flee"),
            Self::Take => write!(f, "take"),
            Self::Leave => write!(f, "leave"),
            Self::Forward => write!(f, "next"),
            Self::Back => write!(f, "back"),
            Self::SaveQuit => write!(f, "save"),
        }
    }
}

/// Something that happened in response to a command, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A combat event from the resolver.
    Combat(CombatEvent),
    /// The player took the room's loot.
    LootTaken {
        /// Item name, now in the inventory.
        name: String,
        /// Gold added.
        gold_value: i32,
    },
    /// The player left the room's loot where it lies.
    LootLeft {
        /// Item name still in the room.
        name: String,
    },
    /// The player entered a room (by moving or by fleeing into it).
    Entered {
        /// The room's description.
        description: String,
    },
    /// Forward movement bumped the far wall.
    BlockedAhead,
    /// Backward movement bumped the dungeon entrance.
    BlockedBehind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combat(event) => event.fmt(f),
            Self::LootTaken { name, gold_value } => {
                write!(f, "You take the {name} (+{gold_value} gold).")
            }
            Self::LootLeft { name } => write!(f, "You leave the {name} where it lies."),
            Self::Entered { description } => write!(f, "{description}"),
            Self::BlockedAhead => write!(f, "The way ahead is sealed. This is the last room."),
            Self::BlockedBehind => write!(f, "The dungeon entrance is behind you. No retreat."),
        }
    }
}

/// A render snapshot of the session after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Current phase.
    pub phase: Phase,
    /// Description of the current room.
    pub room_description: String,
    /// Player health.
    pub health: i32,
    /// Player gold.
    pub gold: i32,
    /// Player inventory, in take order.
    pub inventory: Vec<String>,
    /// The enemy in the room, while in combat.
    pub enemy: Option<Enemy>,
    /// The loot in the room, while at the loot prompt.
    pub loot: Option<Loot>,
    /// What the last command caused, in order.
    pub events: Vec<Event>,
    /// Final score (gold at death), only on game over.
    pub final_score: Option<i32>,
}

/// The top-level state machine for one playthrough.
pub struct GameSession<R: RandomSource> {
    player: Player,
    dungeon: Dungeon,
    rng: R,
    phase: Phase,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session over the given player and dungeon.
    ///
    /// The initial phase is derived from the current room, so a resumed
    /// save drops the player right back into its room.
    pub fn new(player: Player, dungeon: Dungeon, rng: R) -> EngineResult<Self> {
        dungeon.validate()?;
        let phase = phase_for(dungeon.current_room());
        Ok(Self {
            player,
            dungeon,
            rng,
            phase,
        })
    }

    /// The player aggregate.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The dungeon aggregate.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the session has reached a terminal phase.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// A snapshot of the current state with no events.
    pub fn view(&self) -> GameView {
        self.view_with(Vec::new())
    }

    /// Apply one command and return the resulting view.
    ///
    /// Commands outside the current phase's set are rejected with
    /// [`EngineError::CommandNotAllowed`]; the session is unchanged and
    /// the frontend should re-prompt.
    pub fn apply(&mut self, command: Command) -> EngineResult<GameView> {
        match (self.phase, command) {
            (Phase::Combat, Command::Attack) => self.apply_combat(CombatAction::Attack),
            (Phase::Combat, Command::Flee) => self.apply_combat(CombatAction::Flee),
            (Phase::Loot, Command::Take) => self.apply_loot(LootChoice::Take),
            (Phase::Loot, Command::Leave) => self.apply_loot(LootChoice::Leave),
            (Phase::Navigation, Command::Forward) => Ok(self.apply_move(true)),
            (Phase::Navigation, Command::Back) => Ok(self.apply_move(false)),
            (Phase::Navigation, Command::SaveQuit) => {
                self.phase = Phase::Saved;
                Ok(self.view())
            }
            (phase, command) => Err(EngineError::CommandNotAllowed { command, phase }),
        }
    }

    fn apply_combat(&mut self, action: CombatAction) -> EngineResult<GameView> {
        let exchange = {
            let room = self.dungeon.current_room_mut();
            let Some(enemy) = room.enemy.as_mut() else {
                return Err(EngineError::NothingToFight);
            };
            combat::resolve_exchange(&mut self.player, enemy, action, &mut self.rng)
        };

        let mut events: Vec<Event> = exchange.events.into_iter().map(Event::Combat).collect();
        match exchange.outcome {
            CombatOutcome::Victory { .. } => {
                self.dungeon.current_room_mut().enemy = None;
                self.phase = phase_for(self.dungeon.current_room());
            }
            CombatOutcome::Fled => {
                // Saturates in room 0: fleeing at the entrance re-enters
                // the same fight.
                self.dungeon.move_previous();
                events.push(Event::Entered {
                    description: self.dungeon.current_room().description.clone(),
                });
                self.phase = phase_for(self.dungeon.current_room());
            }
            CombatOutcome::Defeat => {
                self.phase = Phase::GameOver;
            }
            CombatOutcome::Continue => {}
        }
        Ok(self.view_with(events))
    }

    fn apply_loot(&mut self, choice: LootChoice) -> EngineResult<GameView> {
        let room = self.dungeon.current_room_mut();
        if room.loot.is_none() {
            return Err(EngineError::NothingToLoot);
        }

        let events = match loot::resolve_loot(&mut self.player, room, choice) {
            Some(taken) => vec![Event::LootTaken {
                name: taken.name,
                gold_value: taken.gold_value,
            }],
            None => {
                let name = self
                    .dungeon
                    .current_room()
                    .loot
                    .as_ref()
                    .map(|l| l.name.clone())
                    .unwrap_or_default();
                vec![Event::LootLeft { name }]
            }
        };

        self.phase = Phase::Navigation;
        Ok(self.view_with(events))
    }

    fn apply_move(&mut self, forward: bool) -> GameView {
        let moved = if forward {
            self.dungeon.move_next()
        } else {
            self.dungeon.move_previous()
        };

        let events = if moved {
            self.phase = phase_for(self.dungeon.current_room());
            vec![Event::Entered {
                description: self.dungeon.current_room().description.clone(),
            }]
        } else if forward {
            vec![Event::BlockedAhead]
        } else {
            vec![Event::BlockedBehind]
        };
        self.view_with(events)
    }

    fn view_with(&self, events: Vec<Event>) -> GameView {
        let room = self.dungeon.current_room();
        GameView {
            phase: self.phase,
            room_description: room.description.clone(),
            health: self.player.health,
            gold: self.player.gold,
            inventory: self.player.inventory.clone(),
            enemy: room.enemy.clone(),
            loot: room.loot.clone(),
            events,
            final_score: (self.phase == Phase::GameOver).then_some(self.player.gold),
        }
    }
}

/// Derive the phase a room puts the session in on entry.
fn phase_for(room: &Room) -> Phase {
    if room.enemy.is_some() {
        Phase::Combat
    } else if room.loot.is_some() {
        Phase::Loot
    } else {
        Phase::Navigation
    }
}
