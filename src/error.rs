//! Error types for moves and game snapshots.
//!
//! The search itself never fails; these errors belong to the edges of the
//! crate where untrusted input arrives.

/// A move that cannot be played on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),

    #[error("cell index {0} is already occupied")]
    Occupied(usize),
}

/// Errors that can occur when loading or checking a game snapshot.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("failed to read game snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse game snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("both players share the same identifier")]
    SamePlayers,

    #[error("the player to move is not registered in the game")]
    UnknownTurn,

    #[error("cell at row {row}, column {col} holds an unregistered player")]
    UnknownOccupant { row: usize, col: usize },
}
