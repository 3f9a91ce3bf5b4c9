//! The backtracking engine.
//!
//! Solving is iterative, not recursive. At setup every empty cell gets a
//! record holding its untried and tried candidate digits, and all records go
//! onto a "to be filled" stack. The loop pops a record, commits the first
//! candidate that is still available in the cell's row, column and square,
//! and moves the record onto a "filled" stack. A record with no live
//! candidate left sends the search one step back: the most recently filled
//! cell is cleared and retried with its own next candidate. The two stacks
//! together are the complete placement history, so undoing a wrong path never
//! touches more state than the three occupancy marks of the undone cell.

use log::debug;

use crate::blocks::Occupancy;
use crate::errors::SolveError;
use crate::table::{Cell, Table};

/// Bookkeeping for one empty cell on the current search path.
///
/// `untried` is ordered so that popping yields digits in ascending order.
/// Attempted digits move onto `tried` and are swapped back when the search
/// retreats through this cell, restoring the original order for the next
/// visit.
#[derive(Debug)]
struct EmptyCell {
    cell: Cell,
    untried: Vec<u8>,
    tried: Vec<u8>,
}

impl EmptyCell {
    fn new(cell: Cell) -> Self {
        EmptyCell {
            cell,
            untried: Vec::new(),
            tried: Vec::new(),
        }
    }

    /// Moves all attempted digits back into `untried`, in the original
    /// ascending pop order. Without this a backtracked-into cell would have
    /// no candidates left and the search could spuriously fail.
    fn restore_possibilities(&mut self) {
        std::mem::swap(&mut self.untried, &mut self.tried);
        self.untried.reverse();
    }
}

/// Solves one table by exhaustive backtracking.
///
/// The solver owns the table, the occupancy records and both stacks for the
/// duration of one [`solve`](Self::solve) call; nothing else may alias them
/// while the search runs.
pub struct SudokuSolver {
    table: Table,
    occupancy: Occupancy,
    to_be_filled: Vec<EmptyCell>,
    filled: Vec<EmptyCell>,
    step_limit: Option<u64>,
}

impl SudokuSolver {
    /// Creates a solver for `table`.
    pub fn new(table: Table) -> Self {
        SudokuSolver {
            table,
            occupancy: Occupancy::new(),
            to_be_filled: Vec::new(),
            filled: Vec::new(),
            step_limit: None,
        }
    }

    /// Bounds the search to at most `limit` loop steps. Exceeding the budget
    /// aborts the solve with [`SolveError::StepLimit`]; no partial result is
    /// returned.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Runs the search and returns the completed table.
    ///
    /// The result agrees with the input on every originally nonzero cell and
    /// contains no zeros. An already filled valid table is returned as is.
    pub fn solve(mut self) -> Result<Table, SolveError> {
        self.scan_table()?;
        self.seed_possibilities();
        self.fill_empty_cells()?;
        Ok(self.table)
    }

    /// Splits the cells into givens, registered in the occupancy records, and
    /// empty cells pushed onto `to_be_filled` in row-major order.
    ///
    /// The duplicate check is redundant with [`Table::from_grid`] but kept so
    /// the engine stands on its own when handed a table directly.
    fn scan_table(&mut self) -> Result<(), SolveError> {
        for cell in Cell::all() {
            match self.table.get(cell) {
                0 => self.to_be_filled.push(EmptyCell::new(cell)),
                digit => self.occupancy.record_checked(cell, digit)?,
            }
        }
        debug!("{} empty cells to fill", self.to_be_filled.len());
        Ok(())
    }

    /// Computes the static candidate list of every empty cell: the digits not
    /// ruled out by the original givens. Digits placed later, during the
    /// search, are ruled out dynamically at trial time instead.
    fn seed_possibilities(&mut self) {
        for record in &mut self.to_be_filled {
            // pushed high to low, so popping tries digits in ascending order
            for digit in (1..=9).rev() {
                if !self.occupancy.contains(record.cell, digit) {
                    record.untried.push(digit);
                }
            }
        }
    }

    /// The trial/retreat loop. Terminates when `to_be_filled` is empty, which
    /// means every cell holds a committed, conflict-free digit.
    fn fill_empty_cells(&mut self) -> Result<(), SolveError> {
        let mut steps: u64 = 0;
        while let Some(mut current) = self.to_be_filled.pop() {
            steps += 1;
            if let Some(limit) = self.step_limit {
                if steps > limit {
                    return Err(SolveError::StepLimit(limit));
                }
            }
            match self.next_live_possibility(&mut current) {
                Some(digit) => {
                    self.occupancy.record(current.cell, digit);
                    self.table.set(current.cell, digit);
                    self.filled.push(current);
                }
                None => self.retreat(current)?,
            }
        }
        debug!("search finished after {} steps", steps);
        Ok(())
    }

    /// Pops untried digits until one is still absent from all three blocks of
    /// the cell under the placements made so far. Every popped digit moves
    /// onto `tried`, the accepted one included, so that a later retreat
    /// through this cell resumes with the next candidate rather than the same
    /// one.
    fn next_live_possibility(&self, record: &mut EmptyCell) -> Option<u8> {
        while let Some(digit) = record.untried.pop() {
            record.tried.push(digit);
            if !self.occupancy.contains(record.cell, digit) {
                return Some(digit);
            }
        }
        None
    }

    /// Undoes the most recent placement. `current` ran out of candidates: it
    /// gets its full possibility list back and returns to `to_be_filled`,
    /// then the most recently filled cell is cleared and put on top of it, to
    /// be retried next with its own remaining candidates.
    ///
    /// Retreating past an empty `filled` stack means the whole search space
    /// is exhausted.
    fn retreat(&mut self, mut current: EmptyCell) -> Result<(), SolveError> {
        self.clear_committed(&current);
        current.restore_possibilities();
        self.to_be_filled.push(current);

        let last = self.filled.pop().ok_or(SolveError::Unsolvable)?;
        self.clear_committed(&last);
        self.to_be_filled.push(last);
        Ok(())
    }

    /// Clears the table entry and occupancy marks of a reverted cell. On a
    /// record's first visit the cell is still empty and this is a no-op.
    fn clear_committed(&mut self, record: &EmptyCell) {
        match self.table.get(record.cell) {
            0 => {}
            digit => {
                self.occupancy.unrecord(record.cell, digit);
                self.table.clear(record.cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(grid: [[u8; 9]; 9]) -> Result<Table, SolveError> {
        SudokuSolver::new(Table::from_grid(grid).unwrap()).solve()
    }

    fn assert_valid_solution(table: &Table) {
        use crate::blocks::BlockKind;

        for &kind in &BlockKind::ALL {
            for index in 0..9 {
                let mut seen = [false; 10];
                for cell in Cell::all().filter(|&c| kind.index_of(c) == index) {
                    let digit = table.get(cell);
                    assert!((1..=9).contains(&digit), "unfilled cell in solution");
                    assert!(!seen[digit as usize], "{} {} repeats {}", kind, index, digit);
                    seen[digit as usize] = true;
                }
            }
        }
    }

    #[test]
    fn possibilities_restore_in_ascending_order() {
        let mut record = EmptyCell::new(Cell::new(0, 0).unwrap());
        record.untried = vec![7, 5, 2];

        while let Some(digit) = record.untried.pop() {
            record.tried.push(digit);
        }
        assert_eq!(record.tried, [2, 5, 7]);

        record.restore_possibilities();
        assert!(record.tried.is_empty());
        assert_eq!(record.untried.pop(), Some(2));
        assert_eq!(record.untried.pop(), Some(5));
        assert_eq!(record.untried.pop(), Some(7));
    }

    #[test]
    fn solves_the_all_empty_table() {
        let solution = solve([[0; 9]; 9]).unwrap();
        assert_valid_solution(&solution);
    }

    #[test]
    fn solves_a_puzzle_and_keeps_the_givens() {
        let grid = [
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ];
        let solution = solve(grid).unwrap();
        assert_valid_solution(&solution);

        let solved_grid = solution.to_grid();
        for row in 0..9 {
            for col in 0..9 {
                if grid[row][col] != 0 {
                    assert_eq!(solved_grid[row][col], grid[row][col]);
                }
            }
        }
    }

    #[test]
    fn full_valid_table_is_returned_unchanged() {
        let grid = [
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ];
        let solution = solve(grid).unwrap();
        assert_eq!(solution.to_grid(), grid);
    }

    #[test]
    fn unsolvable_table_is_detected() {
        // (8, 8) sees 1 to 8 in its row and 9 in its square, leaving nothing
        let mut grid = [[0u8; 9]; 9];
        grid[8] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        grid[6][8] = 9;
        assert_eq!(solve(grid).unwrap_err(), SolveError::Unsolvable);
    }

    #[test]
    fn step_limit_aborts_the_search() {
        let result = SudokuSolver::new(Table::from_grid([[0; 9]; 9]).unwrap())
            .with_step_limit(10)
            .solve();
        assert_eq!(result.unwrap_err(), SolveError::StepLimit(10));
    }
}
