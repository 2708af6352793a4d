mod evening;
pub mod match_line;

pub use evening::{EveningParser, ParsedEvening};
pub use match_line::{GameOutcome, ParsedGame};
