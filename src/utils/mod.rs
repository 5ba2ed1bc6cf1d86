pub mod grid_parser;

pub use grid_parser::{load_grid, parse_grid};
