//! Block families and their digit occupancy records.
//!
//! A block is a row, a column or a 3x3 square: a collection of exactly nine
//! cells that must end up holding each digit exactly once. Instead of pushing
//! a placed digit out of the candidate lists of all twenty affected peers,
//! the solver keeps one existence array per block and checks candidates
//! against the three blocks containing their cell. Placing or retracting a
//! digit then costs three writes, and undoing a wrong path touches nothing
//! else.

use std::fmt;

use crate::errors::SolveError;
use crate::table::Cell;

/// One of the three ways to partition the 81 cells into 9 blocks of 9.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A horizontal line of nine cells. Topmost row is 0.
    Row,
    /// A vertical line of nine cells. Leftmost column is 0.
    Column,
    /// A 3x3 square, numbered from left to right, top to bottom.
    Square,
}

impl BlockKind {
    pub(crate) const ALL: [BlockKind; 3] = [BlockKind::Row, BlockKind::Column, BlockKind::Square];

    /// Index of the block of this family that contains `cell`, from 0 to 8.
    #[inline]
    pub fn index_of(self, cell: Cell) -> u8 {
        match self {
            BlockKind::Row => cell.row(),
            BlockKind::Column => cell.col(),
            BlockKind::Square => cell.row() / 3 * 3 + cell.col() / 3,
        }
    }

    /// The block family name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Row => "row",
            BlockKind::Column => "column",
            BlockKind::Square => "square",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digit occupancy for all 27 blocks.
///
/// One `[bool; 10]` per block, indexed directly by digit; slot 0 is unused.
#[derive(Clone, Debug)]
pub(crate) struct Occupancy {
    exists: [[[bool; 10]; 9]; 3],
}

impl Occupancy {
    pub(crate) fn new() -> Self {
        Occupancy {
            exists: [[[false; 10]; 9]; 3],
        }
    }

    #[inline]
    fn slot(&mut self, kind: BlockKind, cell: Cell, digit: u8) -> &mut bool {
        &mut self.exists[kind as usize][kind.index_of(cell) as usize][digit as usize]
    }

    /// Whether `digit` already occupies any of the three blocks containing
    /// `cell`.
    #[inline]
    pub(crate) fn contains(&self, cell: Cell, digit: u8) -> bool {
        BlockKind::ALL
            .iter()
            .any(|&kind| self.exists[kind as usize][kind.index_of(cell) as usize][digit as usize])
    }

    /// Marks `digit` in the three blocks containing `cell`.
    #[inline]
    pub(crate) fn record(&mut self, cell: Cell, digit: u8) {
        for &kind in &BlockKind::ALL {
            *self.slot(kind, cell, digit) = true;
        }
    }

    /// Like [`record`](Self::record), but fails if the digit is already
    /// present in one of the blocks. Only setup paths take this; the search
    /// loop checks availability before every write.
    pub(crate) fn record_checked(&mut self, cell: Cell, digit: u8) -> Result<(), SolveError> {
        for &kind in &BlockKind::ALL {
            if *self.slot(kind, cell, digit) {
                return Err(SolveError::Conflict {
                    kind,
                    index: kind.index_of(cell),
                    digit,
                });
            }
        }
        self.record(cell, digit);
        Ok(())
    }

    /// Clears the marks made by [`record`](Self::record).
    #[inline]
    pub(crate) fn unrecord(&mut self, cell: Cell, digit: u8) {
        for &kind in &BlockKind::ALL {
            *self.slot(kind, cell, digit) = false;
        }
    }
}
