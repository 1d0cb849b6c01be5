/// Alias for `Result<T, DungeonError>`.
pub type CoreResult<T> = Result<T, DungeonError>;

/// Errors that can occur when validating a dungeon record.
#[derive(Debug, thiserror::Error)]
pub enum DungeonError {
    /// The dungeon has no rooms at all.
    #[error("dungeon has no rooms")]
    Empty,

    /// The current room index points outside the room sequence.
    #[error("current room index {index} out of bounds for {rooms} rooms")]
    RoomIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// How many rooms the dungeon actually has.
        rooms: usize,
    },
}
