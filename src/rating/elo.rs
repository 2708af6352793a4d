/// Logistic scale: 400 points of difference means 10:1 odds
const SCALE: f64 = 400.0;

/// Expected score of a player rated `rating` against `opponent`, in (0, 1)
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / SCALE))
}

/// Whole-point rating change for the winner side of a game.
///
/// `actual_score` is 1.0 for a decisive result and 0.5 for a draw, seen
/// from the winner's side. The loser moves by the same amount in the
/// opposite direction. Rounds half away from zero.
pub fn rating_delta(winner_rating: f64, loser_rating: f64, actual_score: f64, k_factor: f64) -> i64 {
    let expected = expected_score(winner_rating, loser_rating);
    (k_factor * (actual_score - expected)).round() as i64
}
