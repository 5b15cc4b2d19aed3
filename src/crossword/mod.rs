//! Crossword puzzles: grid structure, slots and the word dictionary

pub use self::assignment::Assignment;
pub use self::crossword::{Crossword, Overlap};
pub use self::dictionary::{Dictionary, Word};
pub use self::letter_grid::{letter_grid, FilledCrossword};
pub use self::variable::{Direction, Variable};

pub mod error;
pub mod solve;

mod assignment;
mod crossword;
mod dictionary;
mod letter_grid;
mod parse;
mod variable;

/// Index of a variable in `Crossword::variables`
pub type VariableId = usize;
/// Index of a word in the `Dictionary`
pub type WordId = usize;
