//! Errors raised while validating and solving a table.

use crate::blocks::BlockKind;

/// Errors raised by [`Table`](crate::Table) validation and by
/// [`SudokuSolver`](crate::SudokuSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A cell value outside the range 0 to 9.
    #[error("expected cell ({row}, {col}) to be in the range 0 to 9, got {value}")]
    ValueOutOfRange {
        /// Row of the offending cell, 0 to 8.
        row: u8,
        /// Column of the offending cell, 0 to 8.
        col: u8,
        /// The out-of-range value.
        value: u8,
    },
    /// A row or column index outside the range 0 to 8.
    #[error("expected {axis} index to be in the range 0 to 8, got {index}")]
    IndexOutOfRange {
        /// "row" or "column".
        axis: &'static str,
        /// The out-of-range index.
        index: u8,
    },
    /// The same nonzero digit twice in one row, column or square.
    #[error("{kind} {index} already contains {digit}")]
    Conflict {
        /// The block family the duplicate was found in.
        kind: BlockKind,
        /// Index of the block within its family, 0 to 8.
        index: u8,
        /// The duplicated digit.
        digit: u8,
    },
    /// Every possibility of every empty cell was exhausted.
    #[error("table has no solution")]
    Unsolvable,
    /// The host-imposed step budget ran out before the search finished.
    #[error("search aborted after {0} steps")]
    StepLimit(u64),
}
