//! Circuit Tracer
//!
//! Searches a circuit board read from an input file for every shortest
//! trace between its start and end components, using either a stack or a
//! queue as the search frontier, and prints each solution board to the
//! console.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use tracer::{search, Board, Discipline};

/// Finds every shortest trace on a circuit board.
#[derive(Parser)]
#[command(name = "tracer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Frontier discipline: -s for stack or -q for queue.
    #[arg(allow_hyphen_values = true, value_parser = parse_discipline)]
    discipline: Discipline,

    /// Output mode: -c for console or -g for graphical.
    #[arg(allow_hyphen_values = true, value_parser = parse_output_mode)]
    output: OutputMode,

    /// Input board file.
    file: PathBuf,
}

/// Where solution boards are rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum OutputMode {
    Console,
    Graphical,
}

fn parse_discipline(arg: &str) -> Result<Discipline, String> {
    match arg {
        "-s" => Ok(Discipline::Stack),
        "-q" => Ok(Discipline::Queue),
        _ => Err(format!("expected -s or -q, got {arg:?}")),
    }
}

fn parse_output_mode(arg: &str) -> Result<OutputMode, String> {
    match arg {
        "-c" => Ok(OutputMode::Console),
        "-g" => Ok(OutputMode::Graphical),
        _ => Err(format!("expected -c or -g, got {arg:?}")),
    }
}

/// Prints instructions for running the tracer from the command line.
fn print_usage() {
    println!("Usage: tracer -s|-q -c|-g <file>");
    println!(" -s for stack or -q for queue");
    println!(" -c for console or -g for graphical");
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
    };
    run(&cli)
}

/// Loads the board, runs the search, and renders the results.
fn run(cli: &Cli) -> ExitCode {
    let board = match Board::parse(&cli.file) {
        Ok(board) => board,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let solutions = search::shortest_traces(&board, cli.discipline.frontier());

    match cli.output {
        OutputMode::Console => {
            // each render ends with a newline; println adds the blank
            // separator line
            for solution in &solutions {
                println!("{}", solution.board());
            }
        }
        OutputMode::Graphical => {
            println!("graphical output is not supported in this version");
        }
    }
    ExitCode::SUCCESS
}
