use std::fs;
use std::ops::Range;
use std::path::Path;

use ahash::AHashMap;

use crate::collections::grid::{Coord, Grid};
use crate::crossword::error::{CrosswordFromFileError, ParseError};
use crate::crossword::parse::{parse_structure, parse_words};
use crate::crossword::{Dictionary, Direction, Variable, VariableId, Word, WordId};

/// Where two variables share a cell: the letter at offset `first` of the first variable must equal the
/// letter at offset `second` of the second variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
}

impl Overlap {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The same overlap viewed from the other variable
    pub fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }
}

/// An unfilled crossword: which cells are open, the slots to fill, how the slots cross, and the words
/// that may fill them
#[derive(Debug)]
pub struct Crossword {
    structure: Grid<bool>,
    variables: Vec<Variable>,
    overlaps: AHashMap<(VariableId, VariableId), Overlap>,
    neighbors: Vec<Vec<VariableId>>,
    dictionary: Dictionary,
}

impl Crossword {
    pub fn new(structure: Grid<bool>, dictionary: Dictionary) -> Self {
        let variables = find_variables(&structure);
        let (overlaps, neighbors) = find_overlaps(&structure, &variables);
        debug!(
            "crossword has {} variables and {} crossings",
            variables.len(),
            overlaps.len() / 2
        );
        Self {
            structure,
            variables,
            overlaps,
            neighbors,
            dictionary,
        }
    }

    /// Parses a crossword from the text of a structure and a word list
    pub fn parse(structure: &str, words: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_structure(structure)?, parse_words(words)?))
    }

    pub fn from_files(
        structure_path: impl AsRef<Path>,
        words_path: impl AsRef<Path>,
    ) -> Result<Self, CrosswordFromFileError> {
        let structure = fs::read_to_string(structure_path)?;
        let words = fs::read_to_string(words_path)?;
        let crossword = Self::parse(&structure, &words)?;
        Ok(crossword)
    }

    pub fn width(&self) -> usize {
        self.structure.width()
    }

    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// Returns true if the cell is part of the puzzle (open to a letter)
    pub fn is_open(&self, coord: Coord) -> bool {
        self.structure.get(coord).copied().unwrap_or(false)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> Variable {
        self.variables[id]
    }

    pub fn variable_ids(&self) -> Range<VariableId> {
        0..self.variables.len()
    }

    /// Finds the id of the variable starting at `start` in the given direction
    pub fn find_variable(&self, start: Coord, direction: Direction) -> Option<VariableId> {
        self.variables
            .iter()
            .position(|v| v.start() == start && v.direction() == direction)
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Variables that share a cell with `id`, in ascending order
    pub fn neighbors(&self, id: VariableId) -> &[VariableId] {
        &self.neighbors[id]
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn word(&self, id: WordId) -> &Word {
        self.dictionary.word(id)
    }
}

/// Finds every run of two or more open cells, in row-major order of the first cell. A down variable
/// is listed before an across variable starting at the same cell.
fn find_variables(structure: &Grid<bool>) -> Vec<Variable> {
    let is_open = |row: usize, col: usize| {
        structure
            .get(Coord::new(row, col))
            .copied()
            .unwrap_or(false)
    };
    let run_length = |start: Coord, direction: Direction| {
        (0..)
            .map(|k| match direction {
                Direction::Across => (start.row(), start.col() + k),
                Direction::Down => (start.row() + k, start.col()),
            })
            .take_while(|&(row, col)| is_open(row, col))
            .count()
    };
    let mut variables = Vec::new();
    for (start, &open) in structure.iter_coord() {
        if !open {
            continue;
        }
        let (row, col) = (start.row(), start.col());
        let starts = [
            (Direction::Down, row == 0 || !is_open(row - 1, col)),
            (Direction::Across, col == 0 || !is_open(row, col - 1)),
        ];
        for &(direction, starts_word) in &starts {
            if !starts_word {
                continue;
            }
            let length = run_length(start, direction);
            if length > 1 {
                variables.push(Variable::new(start, direction, length));
            }
        }
    }
    variables
}

fn find_overlaps(
    structure: &Grid<bool>,
    variables: &[Variable],
) -> (
    AHashMap<(VariableId, VariableId), Overlap>,
    Vec<Vec<VariableId>>,
) {
    // the variables covering each cell, with the offset of the cell in each
    let mut occupants: Grid<Vec<(VariableId, usize)>> =
        Grid::with_value(structure.width(), structure.height(), Vec::new());
    for (id, variable) in variables.iter().enumerate() {
        for (offset, coord) in variable.cells().enumerate() {
            occupants[coord].push((id, offset));
        }
    }
    let mut overlaps = AHashMap::default();
    let mut neighbors = vec![Vec::new(); variables.len()];
    for (_, cell) in occupants.iter_coord() {
        if let [(a, a_offset), (b, b_offset)] = cell[..] {
            let overlap = Overlap::new(a_offset, b_offset);
            overlaps.insert((a, b), overlap);
            overlaps.insert((b, a), overlap.reversed());
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
    }
    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }
    (overlaps, neighbors)
}

#[cfg(test)]
mod tests {
    use crate::collections::grid::Coord;
    use crate::crossword::{Crossword, Direction, Overlap, Variable};

    const STRUCTURE: &str = "\
#___#
#_##_
#_##_
#_##_
#____";

    fn crossword() -> Crossword {
        Crossword::parse(STRUCTURE, "one\ntwo").unwrap()
    }

    #[test]
    fn variables() {
        let crossword = crossword();
        assert_eq!(
            vec![
                Variable::new(Coord::new(0, 1), Direction::Down, 5),
                Variable::new(Coord::new(0, 1), Direction::Across, 3),
                Variable::new(Coord::new(1, 4), Direction::Down, 4),
                Variable::new(Coord::new(4, 1), Direction::Across, 4),
            ],
            crossword.variables()
        );
    }

    #[test]
    fn single_cells_are_not_variables() {
        let crossword = Crossword::parse("_#_\n#_#", "a").unwrap();
        assert!(crossword.variables().is_empty());
    }

    #[test]
    fn overlaps() {
        let crossword = crossword();
        let down = crossword
            .find_variable(Coord::new(0, 1), Direction::Down)
            .unwrap();
        let top = crossword
            .find_variable(Coord::new(0, 1), Direction::Across)
            .unwrap();
        let right = crossword
            .find_variable(Coord::new(1, 4), Direction::Down)
            .unwrap();
        let bottom = crossword
            .find_variable(Coord::new(4, 1), Direction::Across)
            .unwrap();
        assert_eq!(Some(Overlap::new(0, 0)), crossword.overlap(down, top));
        assert_eq!(Some(Overlap::new(4, 0)), crossword.overlap(down, bottom));
        assert_eq!(Some(Overlap::new(0, 4)), crossword.overlap(bottom, down));
        assert_eq!(Some(Overlap::new(3, 3)), crossword.overlap(bottom, right));
        assert_eq!(None, crossword.overlap(top, right));
        assert_eq!(None, crossword.overlap(top, bottom));
    }

    #[test]
    fn neighbors() {
        let crossword = crossword();
        assert_eq!(&[1, 3], crossword.neighbors(0));
        assert_eq!(&[0], crossword.neighbors(1));
        assert_eq!(&[3], crossword.neighbors(2));
        assert_eq!(&[0, 2], crossword.neighbors(3));
    }

    #[test]
    fn is_open() {
        let crossword = crossword();
        assert_eq!(5, crossword.width());
        assert_eq!(5, crossword.height());
        assert!(crossword.is_open(Coord::new(0, 1)));
        assert!(!crossword.is_open(Coord::new(0, 0)));
        assert!(!crossword.is_open(Coord::new(5, 0)));
    }
}
