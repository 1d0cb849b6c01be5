//! The `reset` command: delete the saved game.

use std::path::Path;

use delve_store::SaveStore;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = SaveStore::new(dir);
    if !store.exists() {
        println!("No saved game in {}.", dir.display());
        return Ok(());
    }

    store
        .clear()
        .map_err(|e| format!("failed to clear save: {e}"))?;
    println!("Removed the saved game in {}.", dir.display());
    Ok(())
}
