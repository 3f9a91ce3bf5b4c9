//! Reading and writing tables as 9x9 CSV files.
//!
//! The expected layout is nine lines of nine comma-separated unsigned
//! integers, no header, 0 marking an empty cell. Writing produces the same
//! layout the table was read from. Everything that can go wrong with a file
//! is reported through [`CsvError`] before the solver is ever invoked.

use std::fs;
use std::path::Path;

use crate::errors::SolveError;
use crate::table::Table;

/// Errors raised while reading or writing a CSV table.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// The file could not be read or written.
    #[error("failed to access the file: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not hold exactly 9 non-empty rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// A row does not hold exactly 9 cells.
    #[error("expected 9 cells in row {row}, found {found}")]
    WrongCellCount {
        /// Index of the malformed row, 0 to 8.
        row: usize,
        /// Number of cells the row actually holds.
        found: usize,
    },
    /// A cell is not an unsigned integer.
    #[error("row {row}, column {col}: invalid cell value '{text}'")]
    InvalidCell {
        /// Row of the malformed cell.
        row: usize,
        /// Column of the malformed cell.
        col: usize,
        /// The cell text as found in the file.
        text: String,
    },
    /// The grid parsed, but is not a valid sudoku table.
    #[error(transparent)]
    Invalid(#[from] SolveError),
}

/// Parses a table from CSV text. Blank lines are skipped, cell values may
/// carry surrounding whitespace.
pub fn parse_grid(text: &str) -> Result<Table, CsvError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() != 9 {
        return Err(CsvError::WrongRowCount(lines.len()));
    }

    let mut grid = [[0u8; 9]; 9];
    for (row, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != 9 {
            return Err(CsvError::WrongCellCount {
                row,
                found: cells.len(),
            });
        }
        for (col, text) in cells.iter().enumerate() {
            grid[row][col] = text.trim().parse().map_err(|_| CsvError::InvalidCell {
                row,
                col,
                text: (*text).to_string(),
            })?;
        }
    }

    Ok(Table::from_grid(grid)?)
}

/// Serializes a table into the same cell layout [`parse_grid`] reads.
pub fn to_csv_string(table: &Table) -> String {
    let mut out = String::with_capacity(2 * 81 + 9);
    for row in &table.to_grid() {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Reads and validates a table from the CSV file at `path`.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table, CsvError> {
    parse_grid(&fs::read_to_string(path)?)
}

/// Writes the table to a CSV file at `path`, overwriting it if it exists.
pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<(), CsvError> {
    fs::write(path, to_csv_string(table))?;
    Ok(())
}
