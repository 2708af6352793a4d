pub mod models;
mod names;

pub use models::*;
pub use names::canonical_name;
