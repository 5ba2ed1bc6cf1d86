use rayon::prelude::*;

use crate::{
    dictionary::WordMembership,
    error::Result,
    models::{Direction, Grid, Position, WordMatch},
    search::is_plural,
};

/// Shortest word reported unless the caller asks otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// How far a single line is grown from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthCap {
    /// Never longer than the grid is wide, whatever the direction. Tall grids
    /// lose their longest vertical and diagonal words under this cap.
    #[default]
    GridWidth,
    /// Lines run until they leave the grid.
    Unbounded,
}

impl LengthCap {
    pub fn max_length(self, grid: &Grid) -> usize {
        match self {
            LengthCap::GridWidth => grid.cols(),
            LengthCap::Unbounded => grid.rows().max(grid.cols()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub min_length: usize,
    pub length_cap: LengthCap,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            length_cap: LengthCap::default(),
        }
    }
}

/// Finds every dictionary word spelled along a straight line of a grid.
pub struct WordSearcher<'d, D: ?Sized> {
    dictionary: &'d D,
    options: SearchOptions,
}

impl<'d, D: WordMembership + ?Sized> WordSearcher<'d, D> {
    pub fn new(dictionary: &'d D) -> Self {
        Self {
            dictionary,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.options.min_length = min_length;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Check a candidate against the length floor, the dictionary and the
    /// plural heuristic.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.accepts(word, word.chars().count())
    }

    fn accepts(&self, word: &str, length: usize) -> bool {
        length >= self.options.min_length
            && self.dictionary.contains(word)
            && !is_plural(word, self.dictionary)
    }

    /// Scan every start cell, direction and length.
    ///
    /// Results are ordered by start row, then start column, then
    /// [`Direction::ALL`] order, then increasing length. One start cell and
    /// direction can yield several nested words ("CAT" and "CATSUP").
    pub fn search(&self, grid: &Grid) -> Vec<WordMatch> {
        let mut matches = Vec::new();
        for row in 0..grid.rows() {
            self.search_row(grid, row, &mut matches);
        }

        tracing::debug!(
            "Found {} words in {}x{} grid",
            matches.len(),
            grid.rows(),
            grid.cols()
        );
        matches
    }

    fn search_row(&self, grid: &Grid, row: usize, matches: &mut Vec<WordMatch>) {
        let max_length = self.options.length_cap.max_length(grid);
        let mut word = String::with_capacity(max_length);

        for col in 0..grid.cols() {
            let start = Position { row, col };

            for direction in Direction::ALL {
                word.clear();

                for (index, letter) in grid.walk(start, direction).take(max_length).enumerate() {
                    word.push(letter);
                    let length = index + 1;

                    if self.accepts(&word, length) {
                        matches.push(WordMatch {
                            word: word.clone(),
                            start_row: row + 1,
                            start_col: col + 1,
                            length,
                            direction,
                        });
                    }
                }
            }
        }
    }
}

impl<'d, D: WordMembership + Sync + ?Sized> WordSearcher<'d, D> {
    /// Same result as [`WordSearcher::search`], with start rows spread over
    /// the rayon pool. Per-row results are concatenated in row order.
    pub fn search_parallel(&self, grid: &Grid) -> Vec<WordMatch> {
        let per_row: Vec<Vec<WordMatch>> = (0..grid.rows())
            .into_par_iter()
            .map(|row| {
                let mut matches = Vec::new();
                self.search_row(grid, row, &mut matches);
                matches
            })
            .collect();

        let matches: Vec<WordMatch> = per_row.into_iter().flatten().collect();
        tracing::debug!(
            "Found {} words in {}x{} grid (parallel)",
            matches.len(),
            grid.rows(),
            grid.cols()
        );
        matches
    }
}

/// Validate `rows` as a grid and search it with the default length cap.
pub fn search<D: WordMembership + ?Sized>(
    rows: &[Vec<char>],
    dictionary: &D,
    min_length: usize,
) -> Result<Vec<WordMatch>> {
    let grid = Grid::from_rows(rows)?;
    Ok(WordSearcher::new(dictionary)
        .with_min_length(min_length)
        .search(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::models::in_bounds;
    use std::collections::HashSet;

    fn dict(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|l| l.chars().collect()).collect()
    }

    fn grid(lines: &[&str]) -> Grid {
        Grid::new(rows(lines)).unwrap()
    }

    #[test]
    fn test_single_word_right() {
        let matches = search(&rows(&["CAT", "XXX", "XXX"]), &dict(&["CAT"]), 3).unwrap();
        assert_eq!(
            matches,
            vec![WordMatch {
                word: "CAT".to_string(),
                start_row: 1,
                start_col: 1,
                length: 3,
                direction: Direction::Right,
            }]
        );
    }

    #[test]
    fn test_word_not_in_grid_is_not_found() {
        let matches = search(&rows(&["CAT", "XXX", "XXX"]), &dict(&["CAT", "CATS"]), 3).unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches.iter().all(|m| m.word != "CATS"));
    }

    #[test]
    fn test_single_cell_below_min_length() {
        let matches = search(&rows(&["A"]), &dict(&["A"]), DEFAULT_MIN_LENGTH).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_single_letter_reported_once_per_direction() {
        let matches = search(&rows(&["A"]), &dict(&["A"]), 1).unwrap();
        let directions: Vec<Direction> = matches.iter().map(|m| m.direction).collect();
        assert_eq!(directions, Direction::ALL.to_vec());
    }

    #[test]
    fn test_reversed_word_found_leftward_only() {
        let matches = search(&rows(&["TAC"]), &dict(&["CAT"]), 3).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "CAT");
        assert_eq!(matches[0].start_row, 1);
        assert_eq!(matches[0].start_col, 3);
        assert_eq!(matches[0].direction, Direction::Left);
    }

    #[test]
    fn test_nested_words_and_plural_filter() {
        let words = dict(&["CAT", "CATS", "CATSUP"]);
        let matches = search(&rows(&["CATSUP"]), &words, 3).unwrap();
        let found: Vec<(&str, usize)> = matches
            .iter()
            .map(|m| (m.word.as_str(), m.length))
            .collect();
        assert_eq!(found, vec![("CAT", 3), ("CATSUP", 6)]);
    }

    #[test]
    fn test_plural_kept_when_stem_unknown() {
        let matches = search(&rows(&["BUSX"]), &dict(&["BUS"]), 3).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "BUS");
    }

    #[test]
    fn test_same_word_reported_at_every_position() {
        let matches = search(&rows(&["NOON", "XXXX"]), &dict(&["NOON"]), 4).unwrap();
        let directions: Vec<Direction> = matches.iter().map(|m| m.direction).collect();
        assert_eq!(directions, vec![Direction::Right, Direction::Left]);
        assert_eq!((matches[0].start_col, matches[1].start_col), (1, 4));
    }

    #[test]
    fn test_result_order() {
        // Row "ABBA" read both ways, column 1 read downwards
        let g = grid(&["ABBA", "BXXX", "BXXX", "AXXX"]);
        let words = dict(&["ABBA"]);
        let matches = WordSearcher::new(&words).search(&g);
        let found: Vec<(usize, usize, Direction)> = matches
            .iter()
            .map(|m| (m.start_row, m.start_col, m.direction))
            .collect();
        assert_eq!(
            found,
            vec![
                (1, 1, Direction::Right),
                (1, 1, Direction::Down),
                (1, 4, Direction::Left),
                (4, 1, Direction::Up),
            ]
        );
    }

    #[test]
    fn test_diagonal_words() {
        let g = grid(&["WXXX", "XOXX", "XXRX", "XXXD"]);
        let words = dict(&["WORD"]);
        let matches = WordSearcher::new(&words).search(&g);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].direction, Direction::DownRight);

        let g = grid(&["XXXD", "XXRX", "XOXX", "WXXX"]);
        let matches = WordSearcher::new(&words).search(&g);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].direction, Direction::UpRight);
        assert_eq!((matches[0].start_row, matches[0].start_col), (4, 1));
    }

    #[test]
    fn test_width_cap_limits_tall_grid() {
        let g = grid(&["WX", "OX", "RX", "DX", "XX"]);
        let words = dict(&["WORD"]);

        let capped = WordSearcher::new(&words).search(&g);
        assert!(capped.is_empty());

        let unbounded = WordSearcher::new(&words)
            .with_options(SearchOptions {
                min_length: 4,
                length_cap: LengthCap::Unbounded,
            })
            .search(&g);
        assert_eq!(unbounded.len(), 1);
        assert_eq!(unbounded[0].direction, Direction::Down);
    }

    #[test]
    fn test_matches_stay_in_bounds() {
        let g = grid(&["STOPS", "PARTS", "OREOS", "TEAMS", "SLEDS"]);
        let words = dict(&[
            "STOP", "STOPS", "POTS", "TOPS", "PART", "PARTS", "SPOT", "TRAP", "STRAP", "TEAM",
            "SLED", "SEAT", "RATE", "ORE", "EAT", "SPOTS", "SLEDS",
        ]);
        let matches = WordSearcher::new(&words).with_min_length(3).search(&g);
        assert!(!matches.is_empty());

        for m in &matches {
            assert_eq!(m.word.chars().count(), m.length);
            assert!(m.length >= 3);
            assert!(m.start_row >= 1 && m.start_col >= 1);

            let (dr, dc) = m.direction.delta();
            let steps = (m.length - 1) as isize;
            let end_row = (m.start_row - 1) as isize + dr * steps;
            let end_col = (m.start_col - 1) as isize + dc * steps;
            assert!(in_bounds(end_row, end_col, g.rows(), g.cols()));

            let spelled: String = g
                .walk(
                    Position {
                        row: m.start_row - 1,
                        col: m.start_col - 1,
                    },
                    m.direction,
                )
                .take(m.length)
                .collect();
            assert_eq!(spelled, m.word);
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let g = grid(&["TACO", "ARMS", "CODE", "OMEN"]);
        let words = dict(&["TACO", "CODE", "OMEN", "ARMS", "ARM", "TACOS", "MODE"]);
        let searcher = WordSearcher::new(&words).with_min_length(3);
        assert_eq!(searcher.search(&g), searcher.search(&g));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let g = grid(&["TACOS", "ARMSX", "CODES", "OMENS", "SLEDS"]);
        let words = dict(&[
            "TACO", "CODE", "CODES", "OMEN", "OMENS", "ARMS", "ARM", "MODE", "SLED", "SLEDS",
            "DOC", "TAC",
        ]);
        let searcher = WordSearcher::new(&words).with_options(SearchOptions {
            min_length: 3,
            length_cap: LengthCap::Unbounded,
        });
        let sequential = searcher.search(&g);
        assert!(!sequential.is_empty());
        assert_eq!(searcher.search_parallel(&g), sequential);
    }

    #[test]
    fn test_is_valid_word() {
        let words = dict(&["CAT", "CATS", "DOGS"]);
        let searcher = WordSearcher::new(&words).with_min_length(3);
        assert!(searcher.is_valid_word("CAT"));
        assert!(!searcher.is_valid_word("CATS"));
        assert!(searcher.is_valid_word("DOGS"));
        assert!(!searcher.is_valid_word("CA"));
    }

    #[test]
    fn test_rejects_malformed_grid() {
        let words = dict(&["CAT"]);
        assert_eq!(search(&[], &words, 3), Err(GridError::Empty));
        assert_eq!(
            search(&rows(&["CAT", "CA"]), &words, 3),
            Err(GridError::Ragged {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }
}
