use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LineError;

/// Season record of one player, keyed by canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: f64,
    pub points: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Player {
    pub fn new(name: String, rating: f64) -> Self {
        Self {
            name,
            rating,
            points: 0.0,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    /// Total chess score: a win counts 1, a draw 0.5
    pub fn score(&self) -> f64 {
        self.wins as f64 + 0.5 * self.draws as f64
    }
}

/// Outcome from the recorded winner's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchScore {
    Win,
    Draw,
}

impl MatchScore {
    pub fn value(self) -> f64 {
        match self {
            MatchScore::Win => 1.0,
            MatchScore::Draw => 0.5,
        }
    }
}

/// A game applied to the ledger. For a draw `winner` is the white player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub winner: String,
    pub loser: String,
    pub score: MatchScore,
    pub friendly: bool,
}

impl Match {
    /// Win-equivalent credited to the recorded winner
    pub fn winner_credit(&self) -> f64 {
        self.score.value()
    }

    /// Win-equivalent credited to the recorded loser (0.5 on a draw)
    pub fn loser_credit(&self) -> f64 {
        1.0 - self.score.value()
    }
}

/// A counting game as shown in the evening's game list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMatch {
    pub white: String,
    pub black: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub wins: f64,
    pub performance: i64,
    pub points: f64,
}

/// A match line that was dropped while parsing an evening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseIssue {
    pub line_number: usize,
    pub line: String,
    pub reason: LineError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveningResult {
    pub date: NaiveDate,
    pub matches: Vec<DisplayedMatch>,
    pub rankings: Vec<RankingEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ParseIssue>,
}

impl EveningResult {
    pub fn points_awarded(&self) -> f64 {
        self.rankings.iter().map(|r| r.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub name: String,
    pub rating: f64,
    pub points: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub score: f64,
}

impl From<&Player> for StandingsEntry {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            rating: player.rating,
            points: player.points,
            wins: player.wins,
            draws: player.draws,
            losses: player.losses,
            score: player.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_score_counts_half_draws() {
        let mut player = Player::new("Alice".to_string(), 1500.0);
        player.wins = 3;
        player.draws = 3;
        player.losses = 1;
        assert_eq!(player.score(), 4.5);
    }

    #[test]
    fn test_match_credits() {
        let decisive = Match {
            winner: "Alice".to_string(),
            loser: "Bob".to_string(),
            score: MatchScore::Win,
            friendly: false,
        };
        assert_eq!((decisive.winner_credit(), decisive.loser_credit()), (1.0, 0.0));

        let draw = Match {
            score: MatchScore::Draw,
            ..decisive
        };
        assert_eq!((draw.winner_credit(), draw.loser_credit()), (0.5, 0.5));
    }

    #[test]
    fn test_issues_omitted_when_empty() {
        let evening = EveningResult {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            matches: Vec::new(),
            rankings: Vec::new(),
            issues: Vec::new(),
        };
        let json = serde_json::to_value(&evening).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert!(json.get("issues").is_none());
    }
}
