//! Game snapshots and the top-level move decision.
//!
//! A snapshot is what a session layer hands the engine: the two registered
//! players, whose turn it is, and the 3x3 board. [`decide`] turns it into a
//! coordinate, or `None` when there is nothing left to play.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Coord, Grid};
use crate::error::GameError;
use crate::minimax::next_move_scored;

/// A game snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game<P> {
    /// The two registered players.
    pub players: [P; 2],
    /// The player to move.
    pub turn: P,
    /// The board, row by row.
    pub board: Grid<P>,
}

impl<P: PartialEq> Game<P> {
    pub fn new(players: [P; 2], turn: P, board: Grid<P>) -> Self {
        Self {
            players,
            turn,
            board,
        }
    }

    /// The registered player that is not [`Game::turn`].
    pub fn other_player(&self) -> &P {
        if self.players[0] == self.turn {
            &self.players[1]
        } else {
            &self.players[0]
        }
    }

    /// Reject snapshots the engine does not accept as input.
    ///
    /// The engine itself trusts its input; callers holding data from outside
    /// run this first.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players[0] == self.players[1] {
            return Err(GameError::SamePlayers);
        }
        if !self.players.contains(&self.turn) {
            return Err(GameError::UnknownTurn);
        }
        if let Some((at, _)) = self
            .board
            .occupants()
            .find(|(_, player)| !self.players.contains(*player))
        {
            return Err(GameError::UnknownOccupant {
                row: at.row,
                col: at.col,
            });
        }
        Ok(())
    }
}

impl Game<String> {
    /// Parse a JSON snapshot with string identifiers.
    ///
    /// Empty cells may be written as `""` or `null`:
    ///
    /// ```json
    /// {"players": ["x", "o"], "turn": "o", "board": [["x", "", ""], ["", "", ""], ["", "", ""]]}
    /// ```
    pub fn from_json(s: &str) -> Result<Self, GameError> {
        let game: Self = serde_json::from_str(s)?;
        Ok(game.with_blank_cells_cleared())
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, GameError> {
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        Self::from_json(&s)
    }

    fn with_blank_cells_cleared(mut self) -> Self {
        for cell in self.board.rows.iter_mut().flatten() {
            if cell.as_deref() == Some("") {
                *cell = None;
            }
        }
        self
    }
}

/// Choose the move for the player whose turn it is.
///
/// Searches a flattened, borrowed copy of the board; the snapshot is never
/// modified. Returns `None` when the board is full or already won, which is
/// distinct from a move at `(0, 0)`.
#[instrument(level = "debug", skip_all)]
pub fn decide<P: PartialEq>(game: &Game<P>) -> Option<Coord> {
    let board = game.board.each_ref().flatten();
    let Some((index, score)) = next_move_scored(&board, &game.turn, game.other_player()) else {
        debug!("no move available");
        return None;
    };
    debug!(index, score, "selected move");
    Some(Coord::from_index(index))
}
