//! Fill crossword grids with words from a dictionary

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod crossword;
