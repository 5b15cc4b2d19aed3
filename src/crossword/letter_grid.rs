use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::grid::{Coord, Grid};
use crate::crossword::{Assignment, Crossword};

const BLOCKED_CELL: char = '█';

/// Places the letters of every bound word into a grid of the crossword's size. Cells shared by two
/// variables are written twice and must receive the same letter.
///
/// # Panics
///
/// Panics if two words place different letters in the same cell.
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Grid<Option<char>> {
    let mut letters = Grid::with_value(crossword.width(), crossword.height(), None);
    for (variable_id, word_id) in assignment.iter() {
        let variable = crossword.variable(variable_id);
        let word = crossword.word(word_id);
        for (coord, &letter) in variable.cells().zip(word.letters()) {
            place(&mut letters, coord, letter);
        }
    }
    letters
}

fn place(letters: &mut Grid<Option<char>>, coord: Coord, letter: char) {
    let cell = &mut letters[coord];
    if let Some(existing) = *cell {
        assert_eq!(
            existing, letter,
            "conflicting letters placed at {:?}",
            coord
        );
    }
    *cell = Some(letter);
}

/// A crossword with the letters of an assignment filled in, displayed as text
pub struct FilledCrossword<'a> {
    crossword: &'a Crossword,
    letters: Grid<Option<char>>,
}

impl<'a> FilledCrossword<'a> {
    pub fn new(crossword: &'a Crossword, assignment: &Assignment) -> Self {
        Self {
            crossword,
            letters: letter_grid(crossword, assignment),
        }
    }

    pub fn letters(&self) -> &Grid<Option<char>> {
        &self.letters
    }
}

impl Display for FilledCrossword<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.letters.rows().enumerate() {
            for (col, letter) in letters.iter().enumerate() {
                let c = if self.crossword.is_open(Coord::new(row, col)) {
                    letter.unwrap_or(' ')
                } else {
                    BLOCKED_CELL
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::grid::Coord;
    use crate::crossword::{letter_grid, Assignment, Crossword, FilledCrossword};

    fn crossword() -> Crossword {
        // variable 0 is down, variable 1 is across, crossing at their second letters
        Crossword::parse("#_#\n___\n#_#", "art\ncat\ndog\ndot").unwrap()
    }

    #[test]
    fn places_letters() {
        let crossword = crossword();
        let dictionary = crossword.dictionary();
        let mut assignment = Assignment::new();
        assignment.insert(0, dictionary.find("dog").unwrap());
        assignment.insert(1, dictionary.find("dot").unwrap());
        let letters = letter_grid(&crossword, &assignment);
        assert_eq!(Some('D'), letters[Coord::new(0, 1)]);
        assert_eq!(Some('O'), letters[Coord::new(1, 1)]);
        assert_eq!(Some('G'), letters[Coord::new(2, 1)]);
        assert_eq!(Some('D'), letters[Coord::new(1, 0)]);
        assert_eq!(Some('T'), letters[Coord::new(1, 2)]);
        assert_eq!(None, letters[Coord::new(0, 0)]);
    }

    #[test]
    fn partial_assignment() {
        let crossword = crossword();
        let mut assignment = Assignment::new();
        assignment.insert(1, crossword.dictionary().find("cat").unwrap());
        let letters = letter_grid(&crossword, &assignment);
        assert_eq!(Some('A'), letters[Coord::new(1, 1)]);
        assert_eq!(None, letters[Coord::new(0, 1)]);
        assert_eq!(
            "█ █\nCAT\n█ █\n",
            FilledCrossword::new(&crossword, &assignment).to_string()
        );
    }

    #[test]
    #[should_panic(expected = "conflicting letters")]
    fn conflicting_letters() {
        let crossword = crossword();
        let dictionary = crossword.dictionary();
        let mut assignment = Assignment::new();
        assignment.insert(0, dictionary.find("cat").unwrap());
        assignment.insert(1, dictionary.find("dog").unwrap());
        letter_grid(&crossword, &assignment);
    }

    #[test]
    fn display() {
        let crossword = crossword();
        let dictionary = crossword.dictionary();
        let mut assignment = Assignment::new();
        assignment.insert(0, dictionary.find("dog").unwrap());
        assignment.insert(1, dictionary.find("dot").unwrap());
        let filled = FilledCrossword::new(&crossword, &assignment);
        assert_eq!("█D█\nDOT\n█G█\n", filled.to_string());
    }
}
