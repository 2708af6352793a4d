pub mod elo;
pub mod performance;

pub use elo::{expected_score, rating_delta};
pub use performance::PerformanceTally;
