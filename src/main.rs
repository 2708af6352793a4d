use anyhow::Result;

use chess_league::cli::Command;
use chess_league::{
    handle_completions, handle_evening, handle_export, handle_next, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Standings { results_dir, json } => handle_standings(results_dir, json),
        Command::Evening {
            date,
            results_dir,
            json,
        } => handle_evening(&date, results_dir, json),
        Command::Next { results_dir } => handle_next(results_dir),
        Command::Export { out, results_dir } => handle_export(out, results_dir),
        Command::Completions { shell } => handle_completions(shell),
    }
}
