//! The sudoku table and its cell index type.

use std::fmt;

use crate::blocks::Occupancy;
use crate::errors::SolveError;

pub(crate) const N_CELLS: usize = 81;

/// A cell position on the 9x9 grid, stored as a linear index from 0 to 80,
/// going from left to right, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a cell from row and column indices, both from 0 to 8.
    pub fn new(row: u8, col: u8) -> Result<Self, SolveError> {
        if row > 8 {
            return Err(SolveError::IndexOutOfRange {
                axis: "row",
                index: row,
            });
        }
        if col > 8 {
            return Err(SolveError::IndexOutOfRange {
                axis: "column",
                index: col,
            });
        }
        Ok(Cell(row * 9 + col))
    }

    /// Row index from 0 to 8, topmost row is 0.
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from 0 to 8, leftmost column is 0.
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    #[inline]
    pub(crate) fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_CELLS as u8).map(Cell)
    }
}

/// The 9x9 sudoku table. Cell values are the digits 1 to 9; 0 marks an empty
/// cell.
///
/// A table can only be obtained through [`from_grid`](Self::from_grid), which
/// rejects out-of-range values and duplicate digits up front. The solver
/// relies on that: it never re-validates the whole table afterwards and keeps
/// the no-duplicates invariant by construction while it fills cells in.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Table([u8; N_CELLS]);

impl Table {
    /// Validates and accepts a 9x9 grid of cell values, row-major.
    ///
    /// Fails with [`SolveError::ValueOutOfRange`] if any value exceeds 9, or
    /// with [`SolveError::Conflict`] if a row, column or square contains the
    /// same nonzero digit twice.
    pub fn from_grid(grid: [[u8; 9]; 9]) -> Result<Self, SolveError> {
        let mut cells = [0; N_CELLS];
        for (row, row_values) in grid.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(SolveError::ValueOutOfRange {
                        row: row as u8,
                        col: col as u8,
                        value,
                    });
                }
                cells[row * 9 + col] = value;
            }
        }
        let table = Table(cells);
        table.check_duplicates()?;
        Ok(table)
    }

    fn check_duplicates(&self) -> Result<(), SolveError> {
        let mut occupancy = Occupancy::new();
        for cell in Cell::all() {
            match self.get(cell) {
                0 => {}
                digit => occupancy.record_checked(cell, digit)?,
            }
        }
        Ok(())
    }

    /// The value of `cell`, 0 if empty.
    #[inline]
    pub fn get(&self, cell: Cell) -> u8 {
        self.0[cell.as_index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0[cell.as_index()] = value;
    }

    #[inline]
    pub(crate) fn clear(&mut self, cell: Cell) {
        self.0[cell.as_index()] = 0;
    }

    /// Returns the table as a 9x9 array of cell values, row-major.
    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for cell in Cell::all() {
            grid[cell.row() as usize][cell.col() as usize] = self.get(cell);
        }
        grid
    }

    /// Whether no empty cell remains.
    pub fn is_filled(&self) -> bool {
        self.0.iter().all(|&value| value != 0)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row(), cell.col()) {
                (0, 0) => {}
                (_, 3) | (_, 6) => write!(f, " ")?,  // separate squares in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate squares in rows
                (_, 0) => writeln!(f)?,
                _ => {}
            }
            match self.get(cell) {
                0 => write!(f, "_")?,
                digit => write!(f, "{}", digit)?,
            }
        }
        Ok(())
    }
}
