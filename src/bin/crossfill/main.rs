#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use crossfill::crossword::solve::{CrosswordSolver, SolveResult};
use crossfill::crossword::{Crossword, FilledCrossword};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_files(options.structure_path(), options.words_path())
        .with_context(|| {
            format!(
                "failed to load crossword from \"{}\" and \"{}\"",
                options.structure_path().display(),
                options.words_path().display()
            )
        })?;
    info!(
        "Loaded {}x{} crossword with {} slots and {} words",
        crossword.width(),
        crossword.height(),
        crossword.variables().len(),
        crossword.dictionary().len()
    );
    let result = CrosswordSolver::new(&crossword)
        .word_reuse(options.word_reuse())
        .maintain_arc_consistency(options.inference())
        .solve();
    match result {
        SolveResult::Unsolvable => println!("No solution."),
        SolveResult::Solved(data) => {
            info!("{} guesses, max depth {}", data.guesses, data.max_depth);
            print!("{}", FilledCrossword::new(&crossword, &data.assignment));
        }
    }
    Ok(())
}
