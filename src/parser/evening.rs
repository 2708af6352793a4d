use anyhow::{Context, Result};
use log::warn;
use regex::Regex;

use super::match_line::{ParsedGame, parse_players, parse_scores};
use crate::domain::ParseIssue;
use crate::errors::LineError;

/// Output of parsing one evening's text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedEvening {
    pub games: Vec<ParsedGame>,
    pub issues: Vec<ParseIssue>,
}

/// Parser for "<White>-<Black> <ScoreWhite>-<ScoreBlack>" result lines
pub struct EveningParser {
    boundary: Regex,
    friendly_marker: char,
}

impl EveningParser {
    pub fn new(friendly_marker: char) -> Result<Self> {
        Ok(Self {
            boundary: Self::compile_regex()?,
            friendly_marker,
        })
    }

    /// Parse every non-blank line; bad lines end up in `issues`
    pub fn parse(&self, text: &str) -> ParsedEvening {
        let mut evening = ParsedEvening::default();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(game) => evening.games.push(game),
                Err(reason) => {
                    warn!("Skipping match line {}: '{}' ({})", idx + 1, line.trim(), reason);
                    evening.issues.push(ParseIssue {
                        line_number: idx + 1,
                        line: line.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        evening
    }

    pub fn parse_line(&self, line: &str) -> Result<ParsedGame, LineError> {
        let (body, friendly) = self.strip_friendly_marker(line.trim());
        let (players, scores) = self.split_segments(body)?;
        let (white, black) = parse_players(players)?;
        let (white_score, black_score) = parse_scores(scores)?;

        Ok(ParsedGame {
            white,
            black,
            white_score,
            black_score,
            friendly,
        })
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        // Whitespace run between a word character and a digit
        Regex::new(r"\w(\s+)\d").context("Failed to compile player/score boundary regex")
    }

    // --- Line Helpers ---

    fn strip_friendly_marker<'a>(&self, line: &'a str) -> (&'a str, bool) {
        match line.strip_prefix(self.friendly_marker) {
            Some(rest) => (rest.trim_start(), true),
            None => (line, false),
        }
    }

    fn split_segments<'a>(&self, body: &'a str) -> Result<(&'a str, &'a str), LineError> {
        let gap = self
            .boundary
            .captures(body)
            .and_then(|caps| caps.get(1))
            .ok_or(LineError::MissingScore)?;
        Ok((&body[..gap.start()], &body[gap.end()..]))
    }
}
