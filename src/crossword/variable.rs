use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::grid::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right
    Across,
    /// Top to bottom
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// A slot in the grid to be filled with one word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    start: Coord,
    direction: Direction,
    length: usize,
}

impl Variable {
    pub fn new(start: Coord, direction: Direction, length: usize) -> Self {
        Self {
            start,
            direction,
            length,
        }
    }

    pub fn start(self) -> Coord {
        self.start
    }

    pub fn direction(self) -> Direction {
        self.direction
    }

    pub fn length(self) -> usize {
        self.length
    }

    /// The grid cell holding the letter at `offset` within the slot
    pub fn cell(self, offset: usize) -> Coord {
        assert!(offset < self.length);
        match self.direction {
            Direction::Across => Coord::new(self.start.row(), self.start.col() + offset),
            Direction::Down => Coord::new(self.start.row() + offset, self.start.col()),
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Coord> {
        (0..self.length).map(move |offset| self.cell(offset))
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} : {}", self.start, self.direction, self.length)
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::grid::Coord;
    use crate::crossword::{Direction, Variable};

    #[test]
    fn cells_across() {
        let variable = Variable::new(Coord::new(2, 1), Direction::Across, 3);
        let cells: Vec<_> = variable.cells().collect();
        assert_eq!(
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)],
            cells
        );
    }

    #[test]
    fn cells_down() {
        let variable = Variable::new(Coord::new(0, 4), Direction::Down, 2);
        let cells: Vec<_> = variable.cells().collect();
        assert_eq!(vec![Coord::new(0, 4), Coord::new(1, 4)], cells);
    }


    #[test]
    fn display() {
        let variable = Variable::new(Coord::new(0, 1), Direction::Across, 3);
        assert_eq!("(0, 1) across : 3", variable.to_string());
    }
}
