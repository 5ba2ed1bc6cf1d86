// Straight-line word search over a letter grid

pub mod engine;
pub mod plural;

pub use engine::{search, LengthCap, SearchOptions, WordSearcher, DEFAULT_MIN_LENGTH};
pub use plural::is_plural;
