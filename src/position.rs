//! Flat board representation and move execution.
//!
//! This module provides the board the search runs on:
//! - A 9-cell, row-major array of optional player identifiers
//! - Terminal detection and legal move generation
//! - Pure move application (every move produces a new board)
//! - Text coordinates (`a1` .. `c3`) for the protocol and the CLI
//!
//! Player identifiers are opaque: the only operation the engine needs is
//! equality. The search copies boards freely, so it runs on `Copy`
//! identifiers; owned identifiers such as `String` are searched through a
//! borrowed view (see [`Board::each_ref`]).

use crate::constants::{CELLS, SIZE};
use crate::error::MoveError;
use crate::patterns::is_winning_pattern;

/// A flat board: 9 cells in row-major order, each empty or holding a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<P> {
    /// Cell contents; `None` is an empty cell.
    pub cells: [Option<P>; CELLS],
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Board<P> {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    pub fn from_cells(cells: [Option<P>; CELLS]) -> Self {
        Self { cells }
    }

    /// Borrow every occupant, giving a board the search can copy cheaply.
    pub fn each_ref(&self) -> Board<&P> {
        Board {
            cells: self.cells.each_ref().map(Option::as_ref),
        }
    }

    /// Convert every occupant with `f`, keeping empty cells empty.
    pub fn map<Q>(self, mut f: impl FnMut(P) -> Q) -> Board<Q> {
        Board {
            cells: self.cells.map(|cell| cell.map(&mut f)),
        }
    }

    /// Indices of the empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }
}

/// Check whether every cell is occupied.
///
/// Occupancy, not a win, is the completion signal: a full board without a
/// winner is done with no winner.
pub fn is_done<P>(board: &Board<P>) -> bool {
    board.cells.iter().all(Option::is_some)
}

/// Legal moves for the position, in ascending index order.
///
/// Returns no moves once the position is terminal: either player holds a
/// winning pattern, or the board is full. The win checks come first, so a
/// full board with a winner is terminal because of the win.
pub fn next_moves<P: Copy + PartialEq>(board: &Board<P>, players: [P; 2]) -> Vec<usize> {
    if is_winning_pattern(board, players[0])
        || is_winning_pattern(board, players[1])
        || is_done(board)
    {
        return Vec::new();
    }
    board.empty_cells().collect()
}

/// Return a copy of `board` with `player` placed at `index`.
///
/// The input is left untouched. `index` must be an empty cell taken from
/// [`next_moves`]; anything else is a caller error.
#[inline]
pub fn apply_move<P: Copy>(board: &Board<P>, index: usize, player: P) -> Board<P> {
    debug_assert!(board.cells[index].is_none(), "cell {index} is occupied");
    let mut next = *board;
    next.cells[index] = Some(player);
    next
}

/// Checked variant of [`apply_move`] for moves coming from outside the engine.
///
/// # Errors
/// - [`MoveError::OutOfRange`] - if `index` is not a board cell
/// - [`MoveError::Occupied`] - if the cell already holds a player
pub fn try_apply_move<P: Copy>(
    board: &Board<P>,
    index: usize,
    player: P,
) -> Result<Board<P>, MoveError> {
    match board.cells.get(index) {
        None => Err(MoveError::OutOfRange(index)),
        Some(Some(_)) => Err(MoveError::Occupied(index)),
        Some(None) => Ok(apply_move(board, index, player)),
    }
}

/// Parse a coordinate string (e.g. `"b2"`) into a flat cell index.
///
/// The letter selects the column (`a`..`c`, left to right) and the digit the
/// row (`1`..`3`, top to bottom). Case is ignored. Returns `None` for
/// anything else.
pub fn parse_coord(s: &str) -> Option<usize> {
    let [col, row] = s.as_bytes() else {
        return None;
    };

    let col = col.to_ascii_lowercase().checked_sub(b'a')? as usize;
    let row = row.checked_sub(b'1')? as usize;
    if col >= SIZE || row >= SIZE {
        return None;
    }

    Some(row * SIZE + col)
}

/// Convert a flat cell index to a coordinate string (e.g. `4` -> `"b2"`).
pub fn str_coord(index: usize) -> String {
    let row = index / SIZE;
    let col = index % SIZE;
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}
