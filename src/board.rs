use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SIZE;
use crate::position::Board;

/// A `(row, column)` pair, each in `0..3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate of a flat cell index.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Flat cell index of this coordinate.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

/// Row-major 3x3 board, the shape game snapshots arrive in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid<P> {
    pub rows: [[Option<P>; SIZE]; SIZE],
}

impl<P> Default for Grid<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Grid<P> {
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    pub fn from_rows(rows: [[Option<P>; SIZE]; SIZE]) -> Self {
        Self { rows }
    }

    pub fn get(&self, at: Coord) -> Option<&P> {
        self.rows.get(at.row)?.get(at.col)?.as_ref()
    }

    pub fn set(&mut self, at: Coord, cell: Option<P>) {
        self.rows[at.row][at.col] = cell;
    }

    pub fn each_ref(&self) -> Grid<&P> {
        Grid {
            rows: self.rows.each_ref().map(|row| row.each_ref().map(Option::as_ref)),
        }
    }

    /// Occupied cells with their coordinates, row by row.
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, &P)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| Some((Coord::new(row, col), cell.as_ref()?)))
        })
    }

    /// Lay the rows end to end into a flat board.
    pub fn flatten(self) -> Board<P> {
        let mut cells = self.rows.into_iter().flatten();
        Board::from_cells(std::array::from_fn(|_| cells.next().flatten()))
    }
}

impl<P> From<Board<P>> for Grid<P> {
    fn from(board: Board<P>) -> Self {
        let mut cells = board.cells.into_iter();
        Self {
            rows: std::array::from_fn(|_| std::array::from_fn(|_| cells.next().flatten())),
        }
    }
}

impl<P: fmt::Display> fmt::Display for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
