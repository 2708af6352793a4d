use std::collections::HashMap;

use crate::domain::{Match, RankingEntry};
use crate::rating::PerformanceTally;

use super::ledger::LeagueLedger;

struct Participant {
    name: String,
    wins: f64,
    performance: f64,
}

/// Rank the counting games of one evening and split the points table.
///
/// Friendly games are ignored. Players are ordered by win-equivalent
/// (a draw is worth 0.5 to each side), then by performance rating. Players
/// on the same win-equivalent form a tie group and share the table values
/// of the positions they occupy evenly.
pub fn rank_evening(matches: &[Match], ledger: &LeagueLedger, points_table: &[u32]) -> Vec<RankingEntry> {
    let counting: Vec<&Match> = matches.iter().filter(|m| !m.friendly).collect();
    let mut participants = collect_participants(&counting, ledger);
    sort_participants(&mut participants);

    let awards = distribute_points(&participants, points_table);

    participants
        .into_iter()
        .zip(awards)
        .map(|(p, points)| RankingEntry {
            name: p.name,
            wins: p.wins,
            performance: p.performance.round() as i64,
            points,
        })
        .collect()
}

fn collect_participants(matches: &[&Match], ledger: &LeagueLedger) -> Vec<Participant> {
    let mut wins: HashMap<&str, f64> = HashMap::new();
    let mut tallies: HashMap<&str, PerformanceTally> = HashMap::new();

    for game in matches {
        let winner = game.winner.as_str();
        let loser = game.loser.as_str();

        *wins.entry(winner).or_insert(0.0) += game.winner_credit();
        *wins.entry(loser).or_insert(0.0) += game.loser_credit();

        tallies
            .entry(winner)
            .or_default()
            .record(ledger.rating_of(loser), game.winner_credit());
        tallies
            .entry(loser)
            .or_default()
            .record(ledger.rating_of(winner), game.loser_credit());
    }

    wins.into_iter()
        .map(|(name, wins)| {
            let current = ledger.rating_of(name);
            let performance = tallies.get(name).map_or(current, |t| t.rating(current));
            Participant {
                name: name.to_string(),
                wins,
                performance,
            }
        })
        .collect()
}

fn sort_participants(participants: &mut [Participant]) {
    participants.sort_by(|a, b| {
        b.wins
            .total_cmp(&a.wins)
            .then(b.performance.total_cmp(&a.performance))
            .then_with(|| a.name.cmp(&b.name))
    });
}

// --- Points Distribution ---

/// Points per sorted participant; each tie group gets the mean of its positions
fn distribute_points(participants: &[Participant], points_table: &[u32]) -> Vec<f64> {
    let mut awards = Vec::with_capacity(participants.len());

    for group in participants.chunk_by(|a, b| a.wins == b.wins) {
        let start = awards.len();
        let share = group_share(start, group.len(), points_table);
        awards.extend(std::iter::repeat_n(share, group.len()));
    }

    awards
}

fn group_share(start: usize, len: usize, points_table: &[u32]) -> f64 {
    let total: u32 = (start..start + len)
        .map(|pos| points_table.get(pos).copied().unwrap_or(0))
        .sum();
    total as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeagueSettings;
    use crate::domain::MatchScore;

    const TABLE: [u32; 10] = [12, 10, 8, 7, 6, 5, 4, 3, 2, 1];

    fn play(ledger: &mut LeagueLedger, evening: &mut Vec<Match>, winner: &str, loser: &str) {
        evening.push(ledger.apply_match(winner, loser, MatchScore::Win, false));
    }

    fn entry<'a>(ranking: &'a [RankingEntry], name: &str) -> &'a RankingEntry {
        ranking.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_empty_evening() {
        let ledger = LeagueLedger::new(1500.0, 32.0);
        assert!(rank_evening(&[], &ledger, &TABLE).is_empty());
    }

    #[test]
    fn test_tied_group_shares_points() {
        // Alice 2 wins, Bob 2 wins, Carol 1 win, Dave 0
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = Vec::new();
        play(&mut ledger, &mut evening, "Alice", "Carol");
        play(&mut ledger, &mut evening, "Alice", "Dave");
        play(&mut ledger, &mut evening, "Bob", "Carol");
        play(&mut ledger, &mut evening, "Bob", "Dave");
        play(&mut ledger, &mut evening, "Carol", "Dave");

        let ranking = rank_evening(&evening, &ledger, &TABLE);

        assert_eq!(ranking.len(), 4);
        assert_eq!(entry(&ranking, "Alice").points, 11.0);
        assert_eq!(entry(&ranking, "Bob").points, 11.0);
        assert_eq!(entry(&ranking, "Carol").points, 8.0);
        assert_eq!(entry(&ranking, "Dave").points, 7.0);
        assert_eq!(ranking[2].name, "Carol");
        assert_eq!(ranking[3].name, "Dave");
    }

    #[test]
    fn test_loser_only_participant_listed_with_zero() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = Vec::new();
        play(&mut ledger, &mut evening, "Alice", "Bob");

        let ranking = rank_evening(&evening, &ledger, &TABLE);
        assert_eq!(ranking[0].name, "Alice");
        assert_eq!(ranking[0].wins, 1.0);
        assert_eq!(ranking[1].name, "Bob");
        assert_eq!(ranking[1].wins, 0.0);
        assert_eq!(ranking[1].points, 10.0);
    }

    #[test]
    fn test_draw_credits_both_sides() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let evening = vec![ledger.apply_match("Alice", "Bob", MatchScore::Draw, false)];

        let ranking = rank_evening(&evening, &ledger, &TABLE);
        assert!(ranking.iter().all(|r| r.wins == 0.5));
        assert!(ranking.iter().all(|r| r.points == 11.0));
        assert!(ranking.iter().all(|r| r.performance == 1500));
    }

    #[test]
    fn test_performance_breaks_ties_in_order() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        ledger.apply_match("Strong", "Filler", MatchScore::Win, true);
        ledger.apply_match("Strong", "Filler", MatchScore::Win, true);

        let mut evening = Vec::new();
        // Both win once; beating the higher-rated opponent gives the better performance
        play(&mut ledger, &mut evening, "Alice", "Strong");
        play(&mut ledger, &mut evening, "Bob", "Filler");

        let ranking = rank_evening(&evening, &ledger, &TABLE);
        assert_eq!(ranking[0].name, "Alice");
        assert_eq!(ranking[1].name, "Bob");
        assert!(ranking[0].performance > ranking[1].performance);
        assert_eq!(ranking[0].points, 11.0);
        assert_eq!(ranking[1].points, 11.0);
    }

    #[test]
    fn test_friendly_games_never_score() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = vec![ledger.apply_match("Alice", "Bob", MatchScore::Win, true)];
        play(&mut ledger, &mut evening, "Carol", "Dave");

        let ranking = rank_evening(&evening, &ledger, &TABLE);
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.name != "Alice" && r.name != "Bob"));
        // Ratings still moved for the friendly game
        assert!(ledger.rating_of("Alice") > 1500.0);
    }

    #[test]
    fn test_short_table_awards_zero_below() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = Vec::new();
        play(&mut ledger, &mut evening, "Alice", "Bob");
        play(&mut ledger, &mut evening, "Carol", "Dave");
        play(&mut ledger, &mut evening, "Alice", "Carol");

        let ranking = rank_evening(&evening, &ledger, &[5, 3]);
        assert_eq!(entry(&ranking, "Alice").points, 5.0);
        assert_eq!(entry(&ranking, "Carol").points, 3.0);
        // Bob and Dave share positions 2 and 3, both beyond the table
        assert_eq!(entry(&ranking, "Bob").points, 0.0);
        assert_eq!(entry(&ranking, "Dave").points, 0.0);
    }

    #[test]
    fn test_points_never_exceed_table() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = Vec::new();
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        for pair in names.chunks(2) {
            play(&mut ledger, &mut evening, pair[0], pair[1]);
        }

        let settings = LeagueSettings::default();
        let ranking = rank_evening(&evening, &ledger, &settings.points_table);
        let awarded: f64 = ranking.iter().map(|r| r.points).sum();
        assert_eq!(ranking.len(), 12);
        assert!(awarded <= settings.points_budget() + 1e-9);
    }

    #[test]
    fn test_friendly_wins_ignored_for_counting_player() {
        let mut ledger = LeagueLedger::new(1500.0, 32.0);
        let mut evening = vec![
            ledger.apply_match("Alice", "Bob", MatchScore::Win, true),
            ledger.apply_match("Alice", "Carol", MatchScore::Win, true),
        ];
        play(&mut ledger, &mut evening, "Bob", "Alice");
        play(&mut ledger, &mut evening, "Carol", "Dave");

        let ranking = rank_evening(&evening, &ledger, &TABLE);
        let alice = entry(&ranking, "Alice");
        assert_eq!(alice.wins, 0.0);
        // Alice and Dave share positions 2 and 3
        assert_eq!(alice.points, 7.5);
        assert_eq!(entry(&ranking, "Dave").points, 7.5);
        assert_eq!(entry(&ranking, "Bob").points, 11.0);
        assert_eq!(entry(&ranking, "Carol").points, 11.0);
        // The friendly wins still count in the season tally
        assert_eq!(ledger.player("Alice").unwrap().wins, 2);
    }
}
