//! Full-depth minimax search.
//!
//! The search explores every continuation down to a terminal board:
//! - No alpha-beta pruning, no transposition table, no depth limit
//! - Terminal boards score +10 / -10 / 0 from the root player's perspective
//! - Ties between root moves keep the lowest cell index
//!
//! A 3x3 board bounds the tree at 9 plies, which keeps exhaustive search
//! cheap enough to run inline for every decision.

use tracing::trace;

use crate::constants::{DRAW_SCORE, LOSS_SCORE, Score, WIN_SCORE};
use crate::patterns::is_winning_pattern;
use crate::position::{Board, apply_move, is_done, next_moves};

/// Score a board for `current` against `other`.
///
/// Returns [`WIN_SCORE`] if `current` holds a winning pattern, [`LOSS_SCORE`]
/// if `other` does, [`DRAW_SCORE`] otherwise. `current` is checked first, so
/// it takes priority on a board where both players have a line.
pub fn evaluate_score<P: Copy + PartialEq>(board: &Board<P>, current: P, other: P) -> Score {
    if is_winning_pattern(board, current) {
        WIN_SCORE
    } else if is_winning_pattern(board, other) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

/// Score a terminal board from the root maximizer's perspective.
///
/// `current` is the player to move at this node. Turns alternate with the
/// maximizing flag, so on a minimizing node the player to move is the root's
/// opponent and the two roles are swapped back before scoring.
#[inline]
pub fn terminal_score<P: Copy + PartialEq>(
    board: &Board<P>,
    current: P,
    other: P,
    is_maximizing: bool,
) -> Score {
    if is_maximizing {
        evaluate_score(board, current, other)
    } else {
        evaluate_score(board, other, current)
    }
}

/// Minimax value of `board` with `current` to move.
///
/// Every child swaps mover and opponent and flips `is_maximizing`; a node
/// takes the maximum of its children when maximizing and the minimum
/// otherwise.
pub fn minimax<P: Copy + PartialEq>(
    board: &Board<P>,
    current: P,
    other: P,
    is_maximizing: bool,
) -> Score {
    let moves = next_moves(board, [current, other]);
    if moves.is_empty() {
        return terminal_score(board, current, other, is_maximizing);
    }

    let scores = moves
        .into_iter()
        .map(|m| minimax(&apply_move(board, m, current), other, current, !is_maximizing));

    if is_maximizing {
        scores.fold(Score::MIN, Score::max)
    } else {
        scores.fold(Score::MAX, Score::min)
    }
}

/// Best move for `current` together with its minimax value.
///
/// Returns `None` when the board is full or already won. Candidates are
/// scanned in ascending index order and the incumbent is only replaced on a
/// strictly better score.
pub fn next_move_scored<P: Copy + PartialEq>(
    board: &Board<P>,
    current: P,
    other: P,
) -> Option<(usize, Score)> {
    if is_done(board) {
        return None;
    }

    let mut best: Option<(usize, Score)> = None;
    for m in next_moves(board, [current, other]) {
        let score = minimax(&apply_move(board, m, current), other, current, false);
        trace!(index = m, score, "root candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((m, score));
        }
    }
    best
}

/// Best move for `current`, as a flat cell index.
///
/// `None` means there is no move to make: the board is full or a player has
/// already won.
pub fn next_move<P: Copy + PartialEq>(board: &Board<P>, current: P, other: P) -> Option<usize> {
    next_move_scored(board, current, other).map(|(index, _)| index)
}
