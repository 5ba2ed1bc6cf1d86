pub mod direction;
pub mod grid;
pub mod word_match;

pub use direction::Direction;
pub use grid::{in_bounds, Grid, Position, Walk};
pub use word_match::WordMatch;
