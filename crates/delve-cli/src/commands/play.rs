//! The `play` command: the read/print loop that drives a game session.
//!
//! All game rules live in the engine; this module owns token parsing,
//! re-prompting, rendering, and the persistence that the `Saved` and
//! `GameOver` terminals call for.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use delve_core::{Player, RandomSource, SeededRandom};
use delve_engine::{Command, GameSession, GameView, Phase, generate};
use delve_store::SaveStore;

/// How a play loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlayOutcome {
    /// The player saved and quit; both records must be persisted.
    Saved,
    /// The player died; the save must be cleared.
    GameOver,
    /// Input ended (EOF) mid-game; nothing is persisted or cleared.
    Aborted,
}

pub fn run(dir: &Path, seed: Option<u64>) -> Result<(), String> {
    let store = SaveStore::new(dir);
    let mut rng = match seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };

    let (player, dungeon, resumed) = match store.load() {
        Some((player, dungeon)) => (player, dungeon, true),
        None => (Player::new(), generate(&mut rng), false),
    };

    if resumed {
        println!("{}", "Resuming your delve.".bold());
    } else {
        println!(
            "{}",
            format!(
                "Entering a fresh dungeon ({} rooms). Good luck.",
                dungeon.room_count()
            )
            .bold()
        );
    }

    let mut session = GameSession::new(player, dungeon, rng).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let outcome =
        run_loop(&mut session, stdin.lock(), io::stdout()).map_err(|e| e.to_string())?;
    persist_outcome(&store, &session, outcome)
}

/// Persist whatever the loop's terminal state calls for.
fn persist_outcome<R: RandomSource>(
    store: &SaveStore,
    session: &GameSession<R>,
    outcome: PlayOutcome,
) -> Result<(), String> {
    match outcome {
        PlayOutcome::Saved => store
            .save(session.player(), session.dungeon())
            .map_err(|e| format!("failed to save: {e}")),
        PlayOutcome::GameOver => store
            .clear()
            .map_err(|e| format!("failed to clear save: {e}")),
        PlayOutcome::Aborted => {
            println!("Exited without saving.");
            Ok(())
        }
    }
}

/// Drive one session over arbitrary reader/writer pairs.
///
/// Generic over I/O so tests can feed a scripted transcript through a
/// `Cursor` and inspect the output buffer.
fn run_loop<R, In, Out>(
    session: &mut GameSession<R>,
    mut input: In,
    mut out: Out,
) -> io::Result<PlayOutcome>
where
    R: RandomSource,
    In: BufRead,
    Out: Write,
{
    render_view(&mut out, &session.view(), true)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", prompt_for(session.phase()))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayOutcome::Aborted);
        }
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let Some(command) = parse_command(token) else {
            writeln!(
                out,
                "{}",
                format!(
                    "Unknown command: {token}. Try attack, flee, take, leave, next, back, save."
                )
                .yellow()
            )?;
            continue;
        };

        match session.apply(command) {
            Ok(view) => {
                render_view(&mut out, &view, false)?;
                match view.phase {
                    Phase::Saved => return Ok(PlayOutcome::Saved),
                    Phase::GameOver => return Ok(PlayOutcome::GameOver),
                    _ => {}
                }
            }
            Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
        }
    }
}

/// Render one view: events first, then the room's open question.
fn render_view<Out: Write>(out: &mut Out, view: &GameView, include_room: bool) -> io::Result<()> {
    if include_room {
        writeln!(out, "\n{}", view.room_description.bold())?;
    }
    for event in &view.events {
        writeln!(out, "{event}")?;
    }
    match view.phase {
        Phase::Combat => {
            if let Some(enemy) = &view.enemy {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "A {} blocks your way ({} health).",
                        enemy.name, enemy.health
                    )
                    .red()
                )?;
            }
        }
        Phase::Loot => {
            if let Some(loot) = &view.loot {
                writeln!(
                    out,
                    "{}",
                    format!("You spot {} (worth {} gold).", loot.name, loot.gold_value).yellow()
                )?;
            }
        }
        Phase::Navigation => {}
        Phase::Saved => {
            writeln!(out, "Progress saved. The dungeon will wait.")?;
            return Ok(());
        }
        Phase::GameOver => {
            writeln!(
                out,
                "{}",
                format!(
                    "You have fallen. Final score: {} gold.",
                    view.final_score.unwrap_or(0)
                )
                .red()
                .bold()
            )?;
            return Ok(());
        }
    }
    writeln!(out, "Health: {}  Gold: {}", view.health, view.gold)?;
    Ok(())
}

/// The per-phase prompt, listing the commands the engine will accept.
fn prompt_for(phase: Phase) -> &'static str {
    match phase {
        Phase::Combat => "[attack/flee]> ",
        Phase::Loot => "[take/leave]> ",
        Phase::Navigation => "[next/back/save]> ",
        Phase::Saved | Phase::GameOver => "> ",
    }
}

/// Map a trimmed input token onto a command, if it is one.
///
/// Anything else is re-prompted here; the engine never sees free-form
/// text.
fn parse_command(token: &str) -> Option<Command> {
    match token.to_lowercase().as_str() {
        "attack" | "a" => Some(Command::Attack),
        "flee" | "f" | "run" => Some(Command::Flee),
        "take" | "t" => Some(Command::Take),
        "leave" | "l" => Some(Command::Leave),
        "next" | "n" | "forward" => Some(Command::Forward),
        "back" | "b" | "previous" => Some(Command::Back),
        "save" | "s" | "quit" | "q" => Some(Command::SaveQuit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use delve_core::{Dungeon, Enemy, Room, ScriptedRandom};
    use tempfile::TempDir;

    fn empty_rooms(count: usize) -> Vec<Room> {
        (0..count).map(|i| Room::new(format!("Room {i}"))).collect()
    }

    fn scripted_session(
        player: Player,
        rooms: Vec<Room>,
        script: impl IntoIterator<Item = i32>,
    ) -> GameSession<ScriptedRandom> {
        GameSession::new(player, Dungeon::new(rooms), ScriptedRandom::new(script)).unwrap()
    }

    fn drive(
        session: &mut GameSession<ScriptedRandom>,
        transcript: &str,
    ) -> (PlayOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_loop(session, Cursor::new(transcript), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_command_tokens_and_aliases() {
        assert_eq!(parse_command("attack"), Some(Command::Attack));
        assert_eq!(parse_command("FLEE"), Some(Command::Flee));
        assert_eq!(parse_command("t"), Some(Command::Take));
        assert_eq!(parse_command("leave"), Some(Command::Leave));
        assert_eq!(parse_command("n"), Some(Command::Forward));
        assert_eq!(parse_command("back"), Some(Command::Back));
        assert_eq!(parse_command("q"), Some(Command::SaveQuit));
        assert_eq!(parse_command("xyzzy"), None);
        assert_eq!(parse_command("attack the goblin"), None);
    }

    #[test]
    fn save_token_ends_loop_with_saved() {
        let mut session = scripted_session(Player::new(), empty_rooms(10), []);
        let (outcome, output) = drive(&mut session, "save\n");
        assert_eq!(outcome, PlayOutcome::Saved);
        assert!(output.contains("Progress saved"));
    }

    #[test]
    fn eof_aborts_without_terminal_state() {
        let mut session = scripted_session(Player::new(), empty_rooms(10), []);
        let (outcome, _) = drive(&mut session, "");
        assert_eq!(outcome, PlayOutcome::Aborted);
        assert!(!session.is_over());
    }

    #[test]
    fn unknown_token_reprompts() {
        let mut session = scripted_session(Player::new(), empty_rooms(10), []);
        let (outcome, output) = drive(&mut session, "xyzzy\nsave\n");
        assert_eq!(outcome, PlayOutcome::Saved);
        assert!(output.contains("Unknown command: xyzzy"));
    }

    #[test]
    fn out_of_phase_token_reprompts() {
        let mut session = scripted_session(Player::new(), empty_rooms(10), []);
        let (outcome, output) = drive(&mut session, "attack\nsave\n");
        assert_eq!(outcome, PlayOutcome::Saved);
        assert!(output.contains("attack is not available while exploring"));
    }

    #[test]
    fn fight_to_the_death_reports_score_and_clears_save() {
        let mut rooms = empty_rooms(10);
        rooms[0].enemy = Some(Enemy {
            name: "Goblin".to_string(),
            health: 1000,
            attack_power: 10,
            gold_reward: 5,
        });
        let player = Player {
            health: 1,
            gold: 15,
            ..Player::new()
        };
        // Player deals 5, the Goblin survives and retaliates for 4.
        let mut session = scripted_session(player, rooms, [5, 4]);

        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        store.save(session.player(), session.dungeon()).unwrap();

        let (outcome, output) = drive(&mut session, "attack\n");
        assert_eq!(outcome, PlayOutcome::GameOver);
        assert!(output.contains("Final score: 15 gold"));

        persist_outcome(&store, &session, outcome).unwrap();
        assert!(store.load().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn victory_then_save_persists_the_reward() {
        let mut rooms = empty_rooms(10);
        rooms[0].enemy = Some(Enemy {
            name: "Bandit".to_string(),
            health: 5,
            attack_power: 5,
            gold_reward: 20,
        });
        let mut session = scripted_session(Player::new(), rooms, [5]);

        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());

        let (outcome, output) = drive(&mut session, "attack\nsave\n");
        assert_eq!(outcome, PlayOutcome::Saved);
        assert!(output.contains("The Bandit falls!"));

        persist_outcome(&store, &session, outcome).unwrap();
        let (player, dungeon) = store.load().unwrap();
        assert_eq!(player.gold, 20);
        assert!(dungeon.rooms[0].enemy.is_none());
    }

    #[test]
    fn abort_persists_nothing() {
        let mut session = scripted_session(Player::new(), empty_rooms(10), []);
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());

        let (outcome, _) = drive(&mut session, "next\n");
        assert_eq!(outcome, PlayOutcome::Aborted);
        persist_outcome(&store, &session, outcome).unwrap();
        assert!(!store.exists());
    }
}
