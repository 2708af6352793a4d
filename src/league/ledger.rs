use std::collections::HashMap;

use log::debug;

use crate::domain::{Match, MatchScore, Player, StandingsEntry, canonical_name};
use crate::rating::rating_delta;

/// Season-scoped player registry keyed by canonical name
#[derive(Debug, Clone)]
pub struct LeagueLedger {
    initial_rating: f64,
    k_factor: f64,
    players: HashMap<String, Player>,
}

impl LeagueLedger {
    pub fn new(initial_rating: f64, k_factor: f64) -> Self {
        Self {
            initial_rating,
            k_factor,
            players: HashMap::new(),
        }
    }

    /// Apply one game: update both ratings from their pre-game values and
    /// bump the win/draw/loss tallies. Unknown players are created on the fly.
    pub fn apply_match(&mut self, winner: &str, loser: &str, score: MatchScore, friendly: bool) -> Match {
        let winner = canonical_name(winner);
        let loser = canonical_name(loser);

        let winner_rating = self.ensure_player(&winner).rating;
        let loser_rating = self.ensure_player(&loser).rating;
        let delta = rating_delta(winner_rating, loser_rating, score.value(), self.k_factor) as f64;

        debug!(
            "{} vs {} ({:?}{}): {:+}",
            winner,
            loser,
            score,
            if friendly { ", friendly" } else { "" },
            delta
        );

        if let Some(player) = self.players.get_mut(&winner) {
            player.rating += delta;
            match score {
                MatchScore::Win => player.wins += 1,
                MatchScore::Draw => player.draws += 1,
            }
        }
        if let Some(player) = self.players.get_mut(&loser) {
            player.rating -= delta;
            match score {
                MatchScore::Win => player.losses += 1,
                MatchScore::Draw => player.draws += 1,
            }
        }

        Match {
            winner,
            loser,
            score,
            friendly,
        }
    }

    pub fn award_points(&mut self, name: &str, points: f64) {
        let player = self.ensure_player(&canonical_name(name));
        player.points += points;
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(&canonical_name(name))
    }

    /// Current rating, or the starting rating for an unseen name
    pub fn rating_of(&self, name: &str) -> f64 {
        self.player(name).map_or(self.initial_rating, |p| p.rating)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players by points, then rating, then name
    pub fn standings(&self) -> Vec<StandingsEntry> {
        let mut entries: Vec<StandingsEntry> = self.players.values().map(StandingsEntry::from).collect();
        entries.sort_by(|a, b| {
            b.points
                .total_cmp(&a.points)
                .then(b.rating.total_cmp(&a.rating))
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    fn ensure_player(&mut self, name: &str) -> &mut Player {
        let initial_rating = self.initial_rating;
        self.players
            .entry(name.to_string())
            .or_insert_with(|| Player::new(name.to_string(), initial_rating))
    }
}
