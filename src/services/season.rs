use anyhow::{Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::league::League;
use crate::source::{EveningFile, ResultsDirectory};

/// Replays every evening of a results directory into a fresh league
pub struct SeasonService {
    config: AppConfig,
}

impl SeasonService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, source: &ResultsDirectory) -> Result<League> {
        info!("=== Building season from {} ===", source.path().display());

        let evenings = source.load_evenings()?;
        let league = self.replay(&evenings)?;

        info!(
            "=== Season built: {} evenings, {} players ===",
            evenings.len(),
            league.ledger().len()
        );
        Ok(league)
    }

    /// Apply evenings in the given order
    pub fn replay(&self, evenings: &[EveningFile]) -> Result<League> {
        let mut league = League::new(self.config.league.clone())?;

        for evening in evenings {
            league
                .apply_evening_text(&evening.text, evening.date)
                .with_context(|| format!("Failed to apply evening {}", evening.date))?;
        }

        Ok(league)
    }
}
