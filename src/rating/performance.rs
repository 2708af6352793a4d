/// Running sums for one player's games on a single evening
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceTally {
    pub opponent_rating_total: f64,
    pub games: u32,
    pub score: f64,
}

impl PerformanceTally {
    pub fn record(&mut self, opponent_rating: f64, score: f64) {
        self.opponent_rating_total += opponent_rating;
        self.games += 1;
        self.score += score;
    }

    /// Average opponent rating shifted by `400 * (2p - 1)`, where `p` is
    /// the score percentage. Falls back to `current_rating` without games.
    pub fn rating(&self, current_rating: f64) -> f64 {
        if self.games == 0 {
            return current_rating;
        }
        let games = self.games as f64;
        let average_opponent = self.opponent_rating_total / games;
        let percentage = self.score / games;
        average_opponent + 400.0 * (2.0 * percentage - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_games_falls_back() {
        let tally = PerformanceTally::default();
        assert_eq!(tally.rating(1532.0), 1532.0);
    }

    #[test]
    fn test_perfect_score() {
        let mut tally = PerformanceTally::default();
        tally.record(1500.0, 1.0);
        tally.record(1600.0, 1.0);
        assert_eq!(tally.rating(0.0), 1950.0);
    }

    #[test]
    fn test_even_score_is_average_opponent() {
        let mut tally = PerformanceTally::default();
        tally.record(1400.0, 1.0);
        tally.record(1600.0, 0.0);
        tally.record(1500.0, 0.5);
        assert_eq!(tally.games, 3);
        assert_eq!(tally.rating(0.0), 1500.0);
    }
}
