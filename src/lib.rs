pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod league;
pub mod parser;
pub mod rating;
pub mod report;
pub mod services;
pub mod source;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::export::JsonStore;
use crate::league::{League, parse_evening_date};
use crate::services::SeasonService;
use crate::source::ResultsDirectory;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_standings(results_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let league = build_league(results_dir)?;
    let standings = league.standings();

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        print!("{}", report::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_evening(date: &str, results_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let date = parse_evening_date(date)?;
    let league = build_league(results_dir)?;

    match league.evening_result(date) {
        Some(evening) if json => println!("{}", serde_json::to_string_pretty(evening)?),
        Some(evening) => print!("{}", report::render_evening(evening)),
        None => println!("No results for {}", date),
    }
    Ok(())
}

pub fn handle_next(results_dir: Option<PathBuf>) -> Result<()> {
    let league = build_league(results_dir)?;

    match league.next_event() {
        Some(next) => println!("{}", next.format("%Y-%m-%d")),
        None => println!("No evenings processed yet"),
    }
    Ok(())
}

pub fn handle_export(out: PathBuf, results_dir: Option<PathBuf>) -> Result<()> {
    let league = build_league(results_dir)?;
    let store = JsonStore::new(&out)?;
    let written = store.export_season(&league)?;

    info!("Exported season and {} evenings to {}", written, out.display());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_league(results_dir: Option<PathBuf>) -> Result<League> {
    let config = AppConfig::new();
    let dir = config.source.resolve_results_dir(results_dir);
    let source = ResultsDirectory::new(&dir, config.source.clone());

    SeasonService::new(config)
        .build(&source)
        .with_context(|| format!("Failed to build season from {}", dir.display()))
}
