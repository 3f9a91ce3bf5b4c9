use sudoku_solver::{BlockKind, Cell, SolveError, SudokuSolver, Table};

/// The classic easy puzzle: top-left square fully given, all clues consistent.
const EASY_PUZZLE: [[u8; 9]; 9] = [
    [4, 3, 5, 2, 6, 9, 7, 8, 1],
    [6, 8, 2, 5, 7, 1, 4, 9, 3],
    [1, 9, 7, 8, 3, 4, 5, 6, 2],
    [8, 2, 6, 0, 0, 0, 0, 0, 0],
    [3, 7, 4, 0, 0, 0, 0, 0, 0],
    [9, 5, 1, 0, 0, 0, 0, 0, 0],
    [5, 1, 9, 0, 0, 0, 0, 0, 0],
    [2, 4, 8, 0, 0, 0, 0, 0, 0],
    [7, 6, 3, 0, 0, 0, 0, 0, 0],
];

fn solve(grid: [[u8; 9]; 9]) -> Table {
    let table = Table::from_grid(grid).unwrap_or_else(|err| panic!("{}", err));
    SudokuSolver::new(table)
        .solve()
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Every row, column and square of a solved table must be a permutation of
/// 1 to 9.
fn assert_valid_solution(table: &Table) {
    for &kind in &[BlockKind::Row, BlockKind::Column, BlockKind::Square] {
        for index in 0..9 {
            let mut seen = [false; 10];
            for cell in Cell::all().filter(|&c| kind.index_of(c) == index) {
                let digit = table.get(cell);
                assert!((1..=9).contains(&digit), "cell left unfilled");
                assert!(
                    !seen[digit as usize],
                    "{} {} contains {} twice",
                    kind,
                    index,
                    digit
                );
                seen[digit as usize] = true;
            }
        }
    }
}

#[test]
fn easy_puzzle_converges() {
    let solution = solve(EASY_PUZZLE);
    assert_valid_solution(&solution);
}

#[test]
fn empty_puzzle_converges() {
    let solution = solve([[0; 9]; 9]);
    assert_valid_solution(&solution);
}

#[test]
fn givens_are_never_overwritten() {
    let solution = solve(EASY_PUZZLE).to_grid();
    for row in 0..9 {
        for col in 0..9 {
            if EASY_PUZZLE[row][col] != 0 {
                assert_eq!(solution[row][col], EASY_PUZZLE[row][col]);
            }
        }
    }
}

#[test]
fn solution_round_trips_through_the_validator() {
    let solution = solve(EASY_PUZZLE);
    let revalidated = Table::from_grid(solution.to_grid()).unwrap();
    assert_eq!(revalidated, solution);
}

#[test]
fn solving_a_solved_table_is_idempotent() {
    let solution = solve(EASY_PUZZLE);
    let solved_again = SudokuSolver::new(solution.clone()).solve().unwrap();
    assert_eq!(solved_again, solution);
}

#[test]
fn row_duplicate_names_row_index_and_digit() {
    let mut grid = [[0u8; 9]; 9];
    grid[5][2] = 3;
    grid[5][7] = 3;
    assert_eq!(
        Table::from_grid(grid).unwrap_err(),
        SolveError::Conflict {
            kind: BlockKind::Row,
            index: 5,
            digit: 3,
        }
    );
}

#[test]
fn square_duplicate_names_square_not_row_or_column() {
    // same square, different rows and columns
    let mut grid = [[0u8; 9]; 9];
    grid[3][3] = 8;
    grid[5][5] = 8;
    assert_eq!(
        Table::from_grid(grid).unwrap_err(),
        SolveError::Conflict {
            kind: BlockKind::Square,
            index: 4,
            digit: 8,
        }
    );
}

#[test]
fn out_of_range_value_names_cell_and_value() {
    let mut grid = [[0u8; 9]; 9];
    grid[7][1] = 10;
    assert_eq!(
        Table::from_grid(grid).unwrap_err(),
        SolveError::ValueOutOfRange {
            row: 7,
            col: 1,
            value: 10,
        }
    );
}

#[test]
fn conflict_message_names_the_block_by_name() {
    let mut grid = [[0u8; 9]; 9];
    grid[1][1] = 2;
    grid[2][2] = 2;
    let message = Table::from_grid(grid).unwrap_err().to_string();
    assert_eq!(message, "square 0 already contains 2");
}
