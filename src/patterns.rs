//! Winning-pattern matching.
//!
//! A winning pattern is a set of three cells forming a row, a column or a
//! diagonal. Each pattern is stored as a 9-bit mask where bit `i` stands for
//! flat cell `i`:
//!
//! ```text
//! 0 1 2      bit 0 is the least significant bit
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Testing a board for a player folds the cells that player occupies into a
//! mask of the same shape (see [`occupancy`]), so a pattern test is a single
//! AND per pattern.

use crate::position::Board;

/// The 8 winning patterns: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_PATTERNS: [u16; 8] = [
    0b000_000_111, // top row: 0 1 2
    0b000_111_000, // middle row: 3 4 5
    0b111_000_000, // bottom row: 6 7 8
    0b001_001_001, // left column: 0 3 6
    0b010_010_010, // middle column: 1 4 7
    0b100_100_100, // right column: 2 5 8
    0b100_010_001, // main diagonal: 0 4 8
    0b001_010_100, // anti-diagonal: 2 4 6
];

/// Bitmask of the cells occupied by `player`.
#[inline]
pub fn occupancy<P: PartialEq>(board: &Board<P>, player: P) -> u16 {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.as_ref() == Some(&player))
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// Check whether `player` holds every cell of at least one winning pattern.
///
/// Cells outside the pattern are ignored.
#[inline]
pub fn is_winning_pattern<P: PartialEq>(board: &Board<P>, player: P) -> bool {
    let mask = occupancy(board, player);
    WINNING_PATTERNS
        .iter()
        .any(|&pattern| mask & pattern == pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CELLS, FULL_MASK};

    fn pattern_cells(pattern: u16) -> Vec<usize> {
        (0..CELLS).filter(|i| pattern & (1 << i) != 0).collect()
    }

    fn board_with(cells: &[usize], player: char) -> Board<char> {
        let mut board = Board::new();
        for &i in cells {
            board.cells[i] = Some(player);
        }
        board
    }

    #[test]
    fn test_patterns_mark_three_cells() {
        for pattern in WINNING_PATTERNS {
            assert_eq!(pattern.count_ones(), 3, "pattern {pattern:#011b}");
            assert_eq!(pattern & !FULL_MASK, 0);
        }
    }

    #[test]
    fn test_patterns_are_distinct() {
        for (i, a) in WINNING_PATTERNS.iter().enumerate() {
            for b in &WINNING_PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_patterns_are_lines() {
        let lines: Vec<Vec<usize>> = WINNING_PATTERNS.iter().map(|&p| pattern_cells(p)).collect();
        assert_eq!(
            lines,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_occupancy() {
        let mut board = board_with(&[0, 4, 8], 'x');
        board.cells[1] = Some('o');
        assert_eq!(occupancy(&board, 'x'), 0b100_010_001);
        assert_eq!(occupancy(&board, 'o'), 0b000_000_010);
        assert_eq!(occupancy(&Board::<char>::new(), 'x'), 0);
    }

    #[test]
    fn test_every_pattern_wins() {
        for pattern in WINNING_PATTERNS {
            let board = board_with(&pattern_cells(pattern), 'x');
            assert!(is_winning_pattern(&board, 'x'), "pattern {pattern:#011b}");
            assert!(!is_winning_pattern(&board, 'o'));
        }
    }

    #[test]
    fn test_one_differing_cell_breaks_the_pattern() {
        for pattern in WINNING_PATTERNS {
            let cells = pattern_cells(pattern);
            for &broken in &cells {
                let mut board = board_with(&cells, 'x');
                board.cells[broken] = Some('o');
                assert!(!is_winning_pattern(&board, 'x'));

                board.cells[broken] = None;
                assert!(!is_winning_pattern(&board, 'x'));
            }
        }
    }

    #[test]
    fn test_unmarked_cells_are_ignored() {
        for pattern in WINNING_PATTERNS {
            let mut board = Board::new();
            for i in 0..CELLS {
                board.cells[i] = Some(if pattern & (1 << i) != 0 { 'x' } else { 'o' });
            }
            assert!(is_winning_pattern(&board, 'x'));
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::<&str>::new();
        assert!(!is_winning_pattern(&board, "x"));
        assert!(!is_winning_pattern(&board, "o"));
    }
}
