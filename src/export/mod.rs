use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{EveningResult, StandingsEntry};
use crate::league::League;

/// Everything a static site needs to show the season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSnapshot {
    pub standings: Vec<StandingsEntry>,
    pub evenings: Vec<EveningResult>,
    pub next_event: Option<NaiveDate>,
}

impl SeasonSnapshot {
    pub fn from_league(league: &League) -> Self {
        Self {
            standings: league.standings(),
            evenings: league.evenings().cloned().collect(),
            next_event: league.next_event(),
        }
    }
}

/// File-based JSON store for exported league data
pub struct JsonStore {
    out_dir: PathBuf,
}

impl JsonStore {
    /// Create a new store, creating the directory if needed
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Result<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();

        fs::create_dir_all(&out_dir).context("Failed to create export directory")?;

        Ok(Self { out_dir })
    }

    /// Save data as `<key>.json`
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.file_path(key);

        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        fs::write(&file_path, json).with_context(|| format!("Failed to write {}", file_path.display()))?;

        info!("Saved {}", file_path.display());
        Ok(())
    }

    /// Load `<key>.json`, `None` when it does not exist
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.file_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read export file")?;

        let data = serde_json::from_str(&json).context("Failed to deserialize export data")?;

        Ok(Some(data))
    }

    /// Write `season.json` plus one `evening-<date>.json` per evening
    pub fn export_season(&self, league: &League) -> Result<usize> {
        let snapshot = SeasonSnapshot::from_league(league);
        self.save("season", &snapshot)?;

        for evening in &snapshot.evenings {
            self.save(&evening_key(evening.date), evening)?;
        }

        Ok(snapshot.evenings.len())
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", key))
    }
}

pub fn evening_key(date: NaiveDate) -> String {
    format!("evening-{}", date.format("%Y-%m-%d"))
}
