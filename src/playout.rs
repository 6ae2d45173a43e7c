//! Whole-game simulation.
//!
//! A playout plays moves from a starting board until the game ends and
//! reports the result. Two flavours are provided:
//! - [`self_play`]: the engine plays both sides
//! - [`random_playout`]: the engine plays one side against uniformly random
//!   legal moves, drawn from a caller-seeded [`fastrand::Rng`] so runs are
//!   reproducible

use crate::minimax::next_move;
use crate::patterns::is_winning_pattern;
use crate::position::{Board, apply_move, is_done, next_moves};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    Won(P),
    Draw,
}

/// Outcome of `board`, or `None` if the game is still open.
pub fn outcome<P: Copy + PartialEq>(board: &Board<P>, players: [P; 2]) -> Option<Outcome<P>> {
    for player in players {
        if is_winning_pattern(board, player) {
            return Some(Outcome::Won(player));
        }
    }
    if is_done(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// A finished game.
#[derive(Debug, Clone)]
pub struct Playout<P> {
    /// Final board
    pub board: Board<P>,
    /// Cell indices in the order they were played
    pub moves: Vec<usize>,
    pub outcome: Outcome<P>,
}

/// Play the game out with the engine choosing every move.
///
/// `to_move` plays first from `board`; `waiting` replies.
pub fn self_play<P: Copy + PartialEq>(board: Board<P>, to_move: P, waiting: P) -> Playout<P> {
    play_out(board, to_move, waiting, next_move)
}

/// Play the game out with the engine as `engine` and random moves for the
/// other player.
pub fn random_playout<P: Copy + PartialEq>(
    board: Board<P>,
    engine: P,
    opponent: P,
    to_move: P,
    rng: &mut fastrand::Rng,
) -> Playout<P> {
    let waiting = if to_move == engine { opponent } else { engine };
    play_out(board, to_move, waiting, |board, current, other| {
        if current == engine {
            next_move(board, current, other)
        } else {
            let moves = next_moves(board, [current, other]);
            (!moves.is_empty()).then(|| moves[rng.usize(..moves.len())])
        }
    })
}

fn play_out<P: Copy + PartialEq>(
    mut board: Board<P>,
    mut current: P,
    mut other: P,
    mut choose: impl FnMut(&Board<P>, P, P) -> Option<usize>,
) -> Playout<P> {
    let players = [current, other];
    let mut moves = Vec::new();

    let result = loop {
        if let Some(result) = outcome(&board, players) {
            break result;
        }
        let Some(m) = choose(&board, current, other) else {
            break Outcome::Draw;
        };
        board = apply_move(&board, m, current);
        moves.push(m);
        std::mem::swap(&mut current, &mut other);
    };

    Playout {
        board,
        moves,
        outcome: result,
    }
}
