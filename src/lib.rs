#![warn(missing_docs)]
//! A backtracking sudoku solver
//!
//! ## Overview
//!
//! This crate fills in 9x9 sudoku tables by exhaustive, constraint-guided
//! backtracking. A [`Table`] validates its input once, eagerly; the
//! [`SudokuSolver`] then drains the empty cells with an iterative
//! trial-and-retreat loop that prunes candidates through per-row, per-column
//! and per-square digit occupancy records. The [`csv`] module reads and
//! writes tables as plain 9x9 CSV files.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::{SudokuSolver, Table};
//!
//! let grid = [
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9],
//! ];
//!
//! let table = Table::from_grid(grid)?;
//! let solution = SudokuSolver::new(table).solve()?;
//!
//! assert!(solution.is_filled());
//! println!("{}", solution);
//! # Ok::<(), sudoku_solver::SolveError>(())
//! ```

mod blocks;
mod errors;
mod solver;
mod table;

pub mod csv;

pub use crate::blocks::BlockKind;
pub use crate::errors::SolveError;
pub use crate::solver::SudokuSolver;
pub use crate::table::{Cell, Table};
