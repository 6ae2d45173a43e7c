//! Tictactoe-AI: a perfect-play tic-tac-toe move engine.
//!
//! Given a snapshot of a two-player game, the engine runs an exhaustive
//! minimax search and returns the coordinate of the best move for the player
//! to move, or `None` when nothing is left to play.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and scores
//! - [`patterns`] - Winning-pattern masks and win detection
//! - [`position`] - Flat board, legal moves, move application
//! - [`board`] - Row-major 3x3 board and coordinates
//! - [`minimax`] - Full-depth minimax search
//! - [`game`] - Game snapshots and the top-level decision
//! - [`playout`] - Self-play and random playouts
//! - [`ttp`] - Text protocol for driving the engine over stdin/stdout
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tictactoe_ai::board::{Coord, Grid};
//! use tictactoe_ai::game::{Game, decide};
//!
//! let board = Grid::from_rows([
//!     [Some("x"), None, None],
//!     [None, None, None],
//!     [None, None, None],
//! ]);
//! let game = Game::new(["x", "o"], "o", board);
//!
//! // The only non-losing reply to a corner opening is the center.
//! assert_eq!(decide(&game), Some(Coord::new(1, 1)));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod minimax;
pub mod patterns;
pub mod playout;
pub mod position;
pub mod ttp;
