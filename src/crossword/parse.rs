//! Parse crossword structures and word lists from text

use crate::collections::grid::{Coord, Grid};
use crate::crossword::error::{ParseError, ParseErrorType};
use crate::crossword::Dictionary;

const OPEN_CELL: char = '_';

/// Parses a grid layout where `_` marks an open cell and any other character a blocked cell. Rows
/// shorter than the longest row are padded with blocked cells.
pub(crate) fn parse_structure(s: &str) -> Result<Grid<bool>, ParseError> {
    let lines: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
    let height = lines.len();
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Err(ParseError::from_type(ParseErrorType::EmptyStructure));
    }
    let structure = Grid::from_fn(width, height, |coord: Coord| {
        lines[coord.row()].get(coord.col()) == Some(&OPEN_CELL)
    });
    debug!(
        "parsed {}x{} structure with {} open cells",
        width,
        height,
        structure.iter_coord().filter(|&(_, &open)| open).count()
    );
    Ok(structure)
}

/// Parses one word per line. Blank lines are skipped; words are upper-cased and deduplicated.
pub(crate) fn parse_words(s: &str) -> Result<Dictionary, ParseError> {
    for (i, line) in s.lines().enumerate() {
        let word = line.trim();
        if word.chars().any(char::is_whitespace) {
            return Err(ParseError::new(ParseErrorType::InvalidWord, word, i + 1));
        }
    }
    let dictionary = Dictionary::new(s.lines());
    debug!("parsed {} words", dictionary.len());
    Ok(dictionary)
}
