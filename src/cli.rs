use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "chess-league", author, version, about = "chess-league standings engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the season standings
    Standings {
        /// Directory with evening result files (defaults to $LEAGUE_RESULTS_DIR or ./results)
        #[arg(short, long)]
        results_dir: Option<PathBuf>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the ranking and games of one evening
    Evening {
        /// Evening date (YYYY-MM-DD)
        date: String,
        #[arg(short, long)]
        results_dir: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the date of the next league evening
    Next {
        #[arg(short, long)]
        results_dir: Option<PathBuf>,
    },
    /// Write season and evening snapshots as JSON files
    Export {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
        #[arg(short, long)]
        results_dir: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_evening_command() {
        let cli = Cli::parse_from(["chess-league", "evening", "2024-03-05", "--json"]);
        assert_eq!(
            cli.command,
            Command::Evening {
                date: "2024-03-05".to_string(),
                results_dir: None,
                json: true,
            }
        );
    }

    #[test]
    fn test_parse_export_command() {
        let cli = Cli::parse_from(["chess-league", "export", "--out", "site", "-r", "data"]);
        assert_eq!(
            cli.command,
            Command::Export {
                out: PathBuf::from("site"),
                results_dir: Some(PathBuf::from("data")),
            }
        );
    }
}
