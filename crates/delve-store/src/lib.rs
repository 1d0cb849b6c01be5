//! Save-file persistence for Delve.
//!
//! A save is two independent JSON documents under one directory: the
//! player record and the dungeon record. From the caller's point of
//! view `save` is one logical transaction; the two files are still
//! written independently, and a partial write is an accepted risk at
//! this scope. Loading treats absence and corruption the same way — as
//! "no prior save" — so a damaged file silently starts a fresh game
//! instead of surfacing a fatal error.

/// Error types used throughout the crate.
pub mod error;

/// Re-export error types.
pub use error::{StoreError, StoreResult};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use delve_core::{Dungeon, Player};

/// File name of the player record.
pub const PLAYER_FILE: &str = "player.json";
/// File name of the dungeon record.
pub const DUNGEON_FILE: &str = "dungeon.json";

/// The persistence gateway for one save directory.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Create a store over the given directory.
    ///
    /// The directory is created lazily on the first `save`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// True if any save record is present (even a damaged one).
    pub fn exists(&self) -> bool {
        self.player_path().exists() || self.dungeon_path().exists()
    }

    /// Load the saved player and dungeon.
    ///
    /// Returns `None` if either record is missing, unreadable, fails to
    /// parse, or the dungeon violates its structural invariants.
    pub fn load(&self) -> Option<(Player, Dungeon)> {
        let player: Player = read_record(&self.player_path())?;
        let dungeon: Dungeon = read_record(&self.dungeon_path())?;
        dungeon.validate().ok()?;
        Some((player, dungeon))
    }

    /// Persist both records.
    pub fn save(&self, player: &Player, dungeon: &Dungeon) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.player_path(), serde_json::to_string_pretty(player)?)?;
        fs::write(self.dungeon_path(), serde_json::to_string_pretty(dungeon)?)?;
        Ok(())
    }

    /// Remove both records. Files that are already gone are fine.
    ///
    /// Called exactly once per playthrough, on player death — never on
    /// a voluntary save-and-quit.
    pub fn clear(&self) -> StoreResult<()> {
        remove_if_exists(&self.player_path())?;
        remove_if_exists(&self.dungeon_path())?;
        Ok(())
    }

    fn player_path(&self) -> PathBuf {
        self.dir.join(PLAYER_FILE)
    }

    fn dungeon_path(&self) -> PathBuf {
        self.dir.join(DUNGEON_FILE)
    }
}

/// Read and parse one record, mapping every failure to `None`.
fn read_record<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

/// Remove a file, tolerating one that is already gone.
fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
