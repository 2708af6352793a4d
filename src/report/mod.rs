use std::fmt::Write as _;

use colored::Colorize;

use crate::domain::{EveningResult, StandingsEntry};

/// Season table: rank, name, points, W-D-L, rounded rating
pub fn render_standings(standings: &[StandingsEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("{:>4}  {:<24} {:>7} {:>9} {:>7}", "#", "Player", "Points", "W-D-L", "Rating").bold()
    );

    for (idx, entry) in standings.iter().enumerate() {
        let record = format!("{}-{}-{}", entry.wins, entry.draws, entry.losses);
        let line = format!(
            "{:>4}  {:<24} {:>7} {:>9} {:>7}",
            idx + 1,
            entry.name,
            format_points(entry.points),
            record,
            entry.rating.round()
        );
        let _ = writeln!(out, "{}", highlight_podium(idx, line));
    }

    out
}

/// One evening: the ranking followed by the list of counting games
pub fn render_evening(evening: &EveningResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Evening {}", evening.date.format("%Y-%m-%d")).bold());
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:>6} {:>12} {:>7}",
        "#", "Player", "Score", "Performance", "Points"
    );

    for (idx, entry) in evening.rankings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:<24} {:>6} {:>12} {:>7}",
            idx + 1,
            entry.name,
            format_points(entry.wins),
            entry.performance,
            format_points(entry.points)
        );
        let _ = writeln!(out, "{}", highlight_podium(idx, line));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Games".bold());
    for game in &evening.matches {
        let _ = writeln!(out, "  {} - {} {}", game.white, game.black, game.score);
    }

    for issue in &evening.issues {
        let _ = writeln!(
            out,
            "{}",
            format!("  skipped line {}: {} ({})", issue.line_number, issue.line, issue.reason).yellow()
        );
    }

    out
}

/// Whole numbers without a fraction, shares with up to two decimals
pub fn format_points(points: f64) -> String {
    let rounded = (points * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let formatted = format!("{:.2}", rounded);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn highlight_podium(idx: usize, line: String) -> String {
    match idx {
        0 => line.green().bold().to_string(),
        1 | 2 => line.green().to_string(),
        _ => line,
    }
}
