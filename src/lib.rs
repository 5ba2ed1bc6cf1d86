//! Find dictionary words spelled along straight lines of a letter grid.
//!
//! The core is [`search::WordSearcher`]: it walks every start cell in all
//! eight directions and reports each run of letters that is a dictionary
//! word, long enough, and not a simple plural of another listed word.
//! Grid parsing, dictionary loading and report rendering sit around it.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod models;
pub mod render;
pub mod search;
pub mod utils;

pub use dictionary::{Dictionary, WordMembership};
pub use error::GridError;
pub use models::{Direction, Grid, Position, WordMatch};
pub use search::{search, LengthCap, SearchOptions, WordSearcher, DEFAULT_MIN_LENGTH};
