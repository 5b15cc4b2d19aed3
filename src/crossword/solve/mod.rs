//! Fill crosswords by constraint propagation and backtracking search

use crate::crossword::solve::arc_consistency::{ac3, PropagateResult};
use crate::crossword::solve::domains::Domains;
use crate::crossword::solve::node_consistency::apply_node_consistency;
use crate::crossword::solve::search::search_solution;
use crate::crossword::{Assignment, Crossword};

mod arc_consistency;
pub(crate) mod consistency;
mod domains;
mod heuristics;
mod node_consistency;
mod search;
mod word_set;

/// Whether one word may fill more than one slot of the same crossword
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordReuse {
    Allow,
    Forbid,
}

impl Default for WordReuse {
    fn default() -> Self {
        WordReuse::Forbid
    }
}

pub enum SolveResult {
    /// No assignment fills every slot
    Unsolvable,
    /// Every slot was filled
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveResult::Solved(data) => Some(data.assignment),
            SolveResult::Unsolvable => None,
        }
    }
}

pub struct SolvedData {
    pub assignment: Assignment,
    /// The number of words tentatively bound during search
    pub guesses: u32,
    /// The deepest level of search reached
    pub max_depth: u32,
}

pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    word_reuse: WordReuse,
    maintain_arc_consistency: bool,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            word_reuse: WordReuse::default(),
            maintain_arc_consistency: true,
        }
    }

    pub fn word_reuse(&mut self, word_reuse: WordReuse) -> &mut Self {
        self.word_reuse = word_reuse;
        self
    }

    /// Whether to run arc consistency after each guess during search (enabled by default)
    pub fn maintain_arc_consistency(&mut self, maintain: bool) -> &mut Self {
        self.maintain_arc_consistency = maintain;
        self
    }

    /// Enforces node consistency, then arc consistency, then searches for a complete assignment
    pub fn solve(&self) -> SolveResult {
        let domains = match self.propagate() {
            None => return SolveResult::Unsolvable,
            Some(domains) => domains,
        };
        info!("Begin backtracking");
        let solved = match search_solution(
            self.crossword,
            &domains,
            self.word_reuse,
            self.maintain_arc_consistency,
        ) {
            None => return SolveResult::Unsolvable,
            Some(solved) => solved,
        };
        info!(
            "Solved after {} guesses (max depth {})",
            solved.guesses, solved.max_depth
        );
        debug_assert!(solved.assignment.is_complete(self.crossword));
        debug_assert!(solved
            .assignment
            .is_consistent(self.crossword, self.word_reuse));
        SolveResult::Solved(solved)
    }

    /// The domains left by node and arc consistency, or `None` if some variable has no words left
    fn propagate(&self) -> Option<Domains> {
        let mut domains = Domains::new(self.crossword);
        apply_node_consistency(self.crossword, &mut domains);
        match ac3(self.crossword, &mut domains, self.word_reuse, None) {
            PropagateResult::Consistent => Some(domains),
            PropagateResult::Invalid(id) => {
                info!(
                    "Arc consistency left no words for {}",
                    self.crossword.variable(id)
                );
                None
            }
        }
    }
}
