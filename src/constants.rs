//! Board geometry and scoring constants.
//!
//! The board is a 3x3 grid stored as a flat, row-major array of 9 cells:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A cell at `(row, col)` lives at index `row * SIZE + col`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows (and columns) of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the flat board.
pub const CELLS: usize = SIZE * SIZE;

/// Bitmask with one bit set per cell of the board.
pub const FULL_MASK: u16 = (1 << CELLS) - 1;

// =============================================================================
// Scores
// =============================================================================

/// Search score type.
pub type Score = i32;

/// Score of a terminal board won by the maximizing player.
pub const WIN_SCORE: Score = 10;

/// Score of a terminal board won by the minimizing player.
pub const LOSS_SCORE: Score = -10;

/// Score of a terminal board with no winner.
pub const DRAW_SCORE: Score = 0;
