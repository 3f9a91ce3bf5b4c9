//! Console front end: solves 9x9 sudoku tables stored as CSV files, either
//! driven by command line flags or through interactive prompts.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use sudoku_solver::csv::{self, CsvError};
use sudoku_solver::{SudokuSolver, Table};

/// Solve 9x9 sudoku puzzles stored as CSV files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input CSV file holding the puzzle; prompts for a path when omitted
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,
    /// Output CSV file for the solved table
    #[arg(short, long, requires = "input")]
    output: Option<std::path::PathBuf>,
    /// Do not print the solved table
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match args.input {
        Some(input) => run_once(&input, args.output.as_deref(), args.quiet),
        None => run_interactive(),
    }
}

fn run_once(input: &Path, output: Option<&Path>, quiet: bool) -> ExitCode {
    let solution = match solve_file(input) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if !quiet {
        println!("{}", solution);
    }
    if let Some(path) = output {
        if let Err(err) = csv::write_table(path, &solution) {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
        info!("saved solution to {}", path.display());
    }
    ExitCode::SUCCESS
}

fn run_interactive() -> ExitCode {
    println!("Sudoku solver: reads a 9x9 CSV puzzle and fills it in.");
    println!();

    loop {
        let input = prompt_non_empty("Path of the input CSV file:");
        print!("Solving sudoku table... ");
        io::stdout().flush().ok();

        let solution = match solve_file(Path::new(&input)) {
            Ok(solution) => {
                println!("done.");
                println!();
                solution
            }
            Err(err) => {
                println!();
                println!("That didn't work: {}", err);
                println!();
                continue;
            }
        };

        if ask_yes_no("Show the solved table here?", true) {
            println!("{}", solution);
            println!();
        }
        if ask_yes_no("Save the result?", true) {
            let output = prompt_non_empty("Path of the output CSV file:");
            if let Err(err) = csv::write_table(Path::new(&output), &solution) {
                println!("That didn't work: {}", err);
                println!();
            }
        }
        if !ask_yes_no("Another sudoku to solve?", false) {
            return ExitCode::SUCCESS;
        }
    }
}

fn solve_file(path: &Path) -> Result<Table, CsvError> {
    let table = csv::read_table(path)?;
    info!("loaded puzzle from {}", path.display());
    Ok(SudokuSolver::new(table).solve()?)
}

fn ask_yes_no(question: &str, default: bool) -> bool {
    // ask until an interpretable answer is given
    loop {
        print!("{} [{}] ", question, if default { "Y/n" } else { "y/N" });
        io::stdout().flush().ok();

        let answer = read_line();
        match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            None => return default,
            Some('y') => return true,
            Some('n') => return false,
            Some(_) => {}
        }
    }
}

fn prompt_non_empty(message: &str) -> String {
    loop {
        print!("{} ", message);
        io::stdout().flush().ok();

        let input = read_line();
        let input = input.trim();
        if !input.is_empty() {
            return input.to_string();
        }
    }
}

fn read_line() -> String {
    let mut line = String::new();
    if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
        // stdin is closed, treat it as a request to quit
        std::process::exit(0);
    }
    line
}
