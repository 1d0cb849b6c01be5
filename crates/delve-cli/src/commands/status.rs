//! The `status` command: summarize the saved game without playing it.

use std::path::Path;

use colored::Colorize;

use delve_store::SaveStore;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = SaveStore::new(dir);

    let Some((player, dungeon)) = store.load() else {
        println!("No saved game in {}.", dir.display());
        return Ok(());
    };

    println!(
        "{}",
        format!(
            "Room {} of {}: {}",
            dungeon.current_room_index + 1,
            dungeon.room_count(),
            dungeon.current_room().description
        )
        .bold()
    );
    println!("Health: {}", player.health);
    println!("Gold: {}", player.gold);
    if player.inventory.is_empty() {
        println!("Inventory: (empty)");
    } else {
        println!("Inventory: {}", player.inventory.join(", "));
    }
    Ok(())
}
