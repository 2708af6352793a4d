use std::path::Path;

use anyhow::Context as _;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single match line was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LineError {
    #[error("no boundary between players and score")]
    MissingScore,
    #[error("expected two player names, got '{0}'")]
    MalformedPlayers(String),
    #[error("expected an integer score pair, got '{0}'")]
    MalformedScore(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("evening {0} has already been processed")]
    DuplicateEvening(NaiveDate),
    #[error("invalid evening date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Add context to file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}
