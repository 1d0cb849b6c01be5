//! Integration tests for the delve CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use delve_core::{Dungeon, Enemy, Loot, Player, Room};
use delve_store::SaveStore;

fn delve() -> Command {
    Command::cargo_bin("delve").unwrap()
}

fn empty_rooms() -> Vec<Room> {
    (0..10).map(|i| Room::new(format!("Room {i}"))).collect()
}

/// Write a save through the real store so the on-disk format is exactly
/// what `play` will read back.
fn write_save(dir: &TempDir, player: &Player, dungeon: &Dungeon) {
    SaveStore::new(dir.path()).save(player, dungeon).unwrap();
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_without_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entering a fresh dungeon (10 rooms)"));
}

#[test]
fn play_resumes_existing_save() {
    let dir = TempDir::new().unwrap();
    write_save(&dir, &Player::new(), &Dungeon::new(empty_rooms()));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("save\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Resuming your delve")
                .and(predicate::str::contains("Progress saved")),
        );
}

#[test]
fn play_corrupt_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    write_save(&dir, &Player::new(), &Dungeon::new(empty_rooms()));
    fs::write(dir.path().join("player.json"), "{ not json").unwrap();

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entering a fresh dungeon"));
}

#[test]
fn save_quit_persists_position_and_gold() {
    let dir = TempDir::new().unwrap();
    let player = Player {
        gold: 7,
        ..Player::new()
    };
    write_save(&dir, &player, &Dungeon::new(empty_rooms()));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("next\nsave\n")
        .assert()
        .success();

    let (saved_player, saved_dungeon) = SaveStore::new(dir.path()).load().unwrap();
    assert_eq!(saved_player.gold, 7);
    assert_eq!(saved_dungeon.current_room_index, 1);
}

#[test]
fn death_clears_save_and_reports_final_score() {
    let dir = TempDir::new().unwrap();
    let mut rooms = empty_rooms();
    // Any retaliation (min 2) kills a 1-health player; 1000 health means
    // no attack roll can win first.
    rooms[0].enemy = Some(Enemy {
        name: "Goblin".to_string(),
        health: 1000,
        attack_power: 10,
        gold_reward: 5,
    });
    let player = Player {
        health: 1,
        gold: 31,
        ..Player::new()
    };
    write_save(&dir, &player, &Dungeon::new(rooms));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("attack\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 31 gold"));

    assert!(!dir.path().join("player.json").exists());
    assert!(!dir.path().join("dungeon.json").exists());
}

#[test]
fn victory_grants_the_reward_before_saving() {
    let dir = TempDir::new().unwrap();
    let mut rooms = empty_rooms();
    // 1 health: the weakest possible hit (5) is a killing blow, so no
    // retaliation happens and the transcript is deterministic.
    rooms[0].enemy = Some(Enemy {
        name: "Bandit".to_string(),
        health: 1,
        attack_power: 5,
        gold_reward: 10,
    });
    write_save(&dir, &Player::new(), &Dungeon::new(rooms));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("attack\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Bandit falls!"));

    let (saved_player, saved_dungeon) = SaveStore::new(dir.path()).load().unwrap();
    assert_eq!(saved_player.gold, 10);
    assert!(saved_dungeon.rooms[0].enemy.is_none());
}

#[test]
fn loot_take_lands_in_the_saved_inventory() {
    let dir = TempDir::new().unwrap();
    let mut rooms = empty_rooms();
    rooms[0].loot = Some(Loot {
        name: "Gold Ring".to_string(),
        gold_value: 25,
    });
    write_save(&dir, &Player::new(), &Dungeon::new(rooms));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("take\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You take the Gold Ring (+25 gold)."));

    let (saved_player, saved_dungeon) = SaveStore::new(dir.path()).load().unwrap();
    assert_eq!(saved_player.gold, 25);
    assert_eq!(saved_player.inventory, vec!["Gold Ring"]);
    assert!(saved_dungeon.rooms[0].loot.is_none());
}

#[test]
fn unknown_token_reprompts() {
    let dir = TempDir::new().unwrap();
    write_save(&dir, &Player::new(), &Dungeon::new(empty_rooms()));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("xyzzy\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: xyzzy"));
}

#[test]
fn out_of_phase_command_reprompts() {
    let dir = TempDir::new().unwrap();
    let mut rooms = empty_rooms();
    rooms[0].enemy = Some(Enemy {
        name: "Skeleton".to_string(),
        health: 1000,
        attack_power: 10,
        gold_reward: 5,
    });
    write_save(&dir, &Player::new(), &Dungeon::new(rooms));

    delve()
        .args(["play", "-d", dir.path().to_str().unwrap()])
        .write_stdin("take\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("take is not available while in combat"));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_without_save() {
    let dir = TempDir::new().unwrap();
    delve()
        .args(["status", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game"));
}

#[test]
fn status_summarizes_save() {
    let dir = TempDir::new().unwrap();
    let mut player = Player {
        gold: 12,
        ..Player::new()
    };
    player.add_item("Jeweled Dagger");
    let mut dungeon = Dungeon::new(empty_rooms());
    dungeon.move_next();
    write_save(&dir, &player, &dungeon);

    delve()
        .args(["status", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Room 2 of 10")
                .and(predicate::str::contains("Health: 100"))
                .and(predicate::str::contains("Gold: 12"))
                .and(predicate::str::contains("Jeweled Dagger")),
        );
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_removes_save() {
    let dir = TempDir::new().unwrap();
    write_save(&dir, &Player::new(), &Dungeon::new(empty_rooms()));

    delve()
        .args(["reset", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed the saved game"));

    assert!(!dir.path().join("player.json").exists());
    assert!(!dir.path().join("dungeon.json").exists());
}

#[test]
fn reset_without_save() {
    let dir = TempDir::new().unwrap();
    delve()
        .args(["reset", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game"));
}
