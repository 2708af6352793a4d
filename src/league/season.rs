use std::collections::HashMap;

use anyhow::Result;
use chrono::{Days, NaiveDate};
use log::info;

use super::ledger::LeagueLedger;
use super::ranking::rank_evening;
use crate::config::LeagueSettings;
use crate::domain::{EveningResult, Match, MatchScore, StandingsEntry};
use crate::errors::LeagueError;
use crate::parser::{EveningParser, GameOutcome, ParsedGame};

/// Parse an evening key in `YYYY-MM-DD` form
pub fn parse_evening_date(raw: &str) -> Result<NaiveDate, LeagueError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LeagueError::InvalidDate(raw.to_string()))
}

/// A season of league evenings, fed in chronological order
pub struct League {
    settings: LeagueSettings,
    parser: EveningParser,
    ledger: LeagueLedger,
    evenings: HashMap<NaiveDate, EveningResult>,
    processed: Vec<NaiveDate>,
}

impl League {
    pub fn new(settings: LeagueSettings) -> Result<Self> {
        let parser = EveningParser::new(settings.friendly_marker)?;
        let ledger = LeagueLedger::new(settings.initial_rating, settings.k_factor);

        Ok(Self {
            settings,
            parser,
            ledger,
            evenings: HashMap::new(),
            processed: Vec::new(),
        })
    }

    /// Parse one evening's result text, apply every game, rank the evening
    /// and add its points to the season. A date can only be applied once.
    pub fn apply_evening_text(&mut self, text: &str, date: NaiveDate) -> Result<&EveningResult, LeagueError> {
        if self.evenings.contains_key(&date) {
            return Err(LeagueError::DuplicateEvening(date));
        }

        let parsed = self.parser.parse(text);
        let evening_matches: Vec<Match> = parsed
            .games
            .iter()
            .map(|game| self.apply_game(game))
            .collect();

        let rankings = rank_evening(&evening_matches, &self.ledger, &self.settings.points_table);
        for entry in &rankings {
            self.ledger.award_points(&entry.name, entry.points);
        }

        let result = EveningResult {
            date,
            matches: parsed
                .games
                .iter()
                .filter(|g| !g.friendly)
                .map(ParsedGame::to_display)
                .collect(),
            rankings,
            issues: parsed.issues,
        };

        info!(
            "Evening {}: {} games applied, {} lines skipped, {} players ranked, {} of {} points awarded",
            date,
            evening_matches.len(),
            result.issues.len(),
            result.rankings.len(),
            result.points_awarded(),
            self.settings.points_budget()
        );

        self.processed.push(date);
        Ok(self.evenings.entry(date).or_insert(result))
    }

    pub fn standings(&self) -> Vec<StandingsEntry> {
        self.ledger.standings()
    }

    /// Stored result for `date`, `None` when that evening was never processed
    pub fn evening_result(&self, date: NaiveDate) -> Option<&EveningResult> {
        self.evenings.get(&date)
    }

    /// Evenings in the order they were processed
    pub fn evenings(&self) -> impl Iterator<Item = &EveningResult> {
        self.processed.iter().filter_map(|date| self.evenings.get(date))
    }

    pub fn last_evening(&self) -> Option<NaiveDate> {
        self.processed.last().copied()
    }

    /// The evening after the most recently processed one
    pub fn next_event(&self) -> Option<NaiveDate> {
        self.last_evening()?
            .checked_add_days(Days::new(self.settings.event_interval_days))
    }

    pub fn ledger(&self) -> &LeagueLedger {
        &self.ledger
    }

    fn apply_game(&mut self, game: &ParsedGame) -> Match {
        let (winner, loser, score) = match game.outcome() {
            GameOutcome::WhiteWins => (&game.white, &game.black, MatchScore::Win),
            GameOutcome::BlackWins => (&game.black, &game.white, MatchScore::Win),
            GameOutcome::Draw => (&game.white, &game.black, MatchScore::Draw),
        };
        self.ledger.apply_match(winner, loser, score, game.friendly)
    }
}
