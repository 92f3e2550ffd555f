//! Board state and win-line detection.

use duelgrid_protocol::PlayerSlot;
use serde::{Deserialize, Serialize};

/// A single cell on the board.
///
/// Once occupied, a cell is never reset or reassigned; no API on
/// [`Board`] can clear a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(PlayerSlot),
}

/// The eight candidate lines of a 3×3 board, in scan order: rows
/// top-to-bottom, columns left-to-right, main diagonal, anti-diagonal.
///
/// The order is a tie-break only (under alternating single-mark play two
/// lines can't complete in the same move) but it keeps the scan
/// deterministic.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A fully-occupied, single-owner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    /// The three cell indices of the line, in scan order.
    pub cells: [usize; 3],
    /// The player who owns all three.
    pub owner: PlayerSlot,
}

/// The square grid of a session, with its remaining-move counter.
///
/// Invariant: `remaining + occupied count == size²` at all times. The
/// counter is stored (not recomputed) because it is part of the persisted
/// bundle, restored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    remaining: usize,
}

impl Board {
    /// An empty board with `size × size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            remaining: size * size,
        }
    }

    /// Reassembles a board from persisted parts. The caller is
    /// responsible for shape validation; fields are taken verbatim.
    pub fn from_parts(size: usize, cells: Vec<Cell>, remaining: usize) -> Self {
        Self {
            size,
            cells,
            remaining,
        }
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Moves left before the board is full.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether a flattened index addresses a cell on this board.
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.size * self.size
    }

    /// Splits a flattened index into `(row, column)`.
    pub fn decode(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// The cell at a flattened index.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Places a mark for `slot` at `index`.
    ///
    /// Returns `false` without mutating anything if the cell is already
    /// occupied; otherwise marks the cell and decrements the counter.
    pub fn place(&mut self, index: usize, slot: PlayerSlot) -> bool {
        if self.cells[index] != Cell::Empty {
            return false;
        }
        self.cells[index] = Cell::Occupied(slot);
        self.remaining -= 1;
        true
    }

    /// Scans for a completed line.
    ///
    /// Returns the first fully-occupied single-owner line in scan order,
    /// or `None`. Line detection is defined for the canonical 3×3 board
    /// only; other sizes always report no win.
    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.size != 3 {
            return None;
        }
        for line in WIN_LINES {
            let Cell::Occupied(owner) = self.cells[line[0]] else {
                continue;
            };
            if line[1..]
                .iter()
                .all(|&i| self.cells[i] == Cell::Occupied(owner))
            {
                return Some(WinningLine { cells: line, owner });
            }
        }
        None
    }

    #[cfg(test)]
    fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !matches!(c, Cell::Empty))
            .count()
    }
}
