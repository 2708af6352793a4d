use crate::domain::{DisplayedMatch, canonical_name};
use crate::errors::LineError;

/// One valid result line, names already canonical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGame {
    pub white: String,
    pub black: String,
    pub white_score: u32,
    pub black_score: u32,
    pub friendly: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl ParsedGame {
    pub fn outcome(&self) -> GameOutcome {
        use std::cmp::Ordering;

        match self.white_score.cmp(&self.black_score) {
            Ordering::Greater => GameOutcome::WhiteWins,
            Ordering::Less => GameOutcome::BlackWins,
            Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn score_label(&self) -> String {
        format!("{}-{}", self.white_score, self.black_score)
    }

    pub fn to_display(&self) -> DisplayedMatch {
        DisplayedMatch {
            white: self.white.clone(),
            black: self.black.clone(),
            score: self.score_label(),
        }
    }
}

// --- Segment Parsing ---

pub(super) fn parse_players(segment: &str) -> Result<(String, String), LineError> {
    let names: Vec<&str> = segment.split('-').map(str::trim).collect();
    match names.as_slice() {
        [white, black] if !white.is_empty() && !black.is_empty() => {
            Ok((canonical_name(white), canonical_name(black)))
        }
        _ => Err(LineError::MalformedPlayers(segment.trim().to_string())),
    }
}

pub(super) fn parse_scores(segment: &str) -> Result<(u32, u32), LineError> {
    let malformed = || LineError::MalformedScore(segment.trim().to_string());
    let tokens: Vec<&str> = segment.split('-').map(str::trim).collect();
    match tokens.as_slice() {
        [white, black] => {
            let white = white.parse::<u32>().map_err(|_| malformed())?;
            let black = black.parse::<u32>().map_err(|_| malformed())?;
            Ok((white, black))
        }
        _ => Err(malformed()),
    }
}
