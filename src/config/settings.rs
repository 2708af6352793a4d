use std::path::PathBuf;

const RESULTS_DIR_ENV: &str = "LEAGUE_RESULTS_DIR";
const DEFAULT_RESULTS_DIR: &str = "results";

/// Rating and points rules of the league
#[derive(Debug, Clone)]
pub struct LeagueSettings {
    pub initial_rating: f64,
    pub k_factor: f64,
    /// Points for finishing positions, best first ("Eurovision" table)
    pub points_table: Vec<u32>,
    pub event_interval_days: u64,
    pub friendly_marker: char,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            k_factor: 32.0,
            points_table: vec![12, 10, 8, 7, 6, 5, 4, 3, 2, 1],
            event_interval_days: 14,
            friendly_marker: '*',
        }
    }
}

impl LeagueSettings {
    /// Sum of the full points table, the most one evening can hand out
    pub fn points_budget(&self) -> f64 {
        self.points_table.iter().map(|&p| p as f64).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub index_file: &'static str,
    pub extension: &'static str,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            index_file: "index.json",
            extension: "txt",
        }
    }
}

impl SourceSettings {
    /// CLI flag first, then $LEAGUE_RESULTS_DIR, then ./results
    pub fn resolve_results_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| std::env::var(RESULTS_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub league: LeagueSettings,
    pub source: SourceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            league: LeagueSettings::default(),
            source: SourceSettings::default(),
        }
    }
}
