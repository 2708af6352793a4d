pub mod ledger;
pub mod ranking;
mod season;

pub use ledger::LeagueLedger;
pub use ranking::rank_evening;
pub use season::{League, parse_evening_date};
