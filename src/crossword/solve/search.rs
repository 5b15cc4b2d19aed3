use std::cmp;

use crate::crossword::solve::arc_consistency::{ac3, Arc, PropagateResult};
use crate::crossword::solve::consistency::is_consistent_binding;
use crate::crossword::solve::domains::Domains;
use crate::crossword::solve::heuristics::{order_domain_values, select_unassigned_variable};
use crate::crossword::solve::{SolvedData, WordReuse};
use crate::crossword::{Assignment, Crossword, VariableId, WordId};

struct SearchContext<'a> {
    crossword: &'a Crossword,
    word_reuse: WordReuse,
    maintain_arc_consistency: bool,
    guesses: u32,
    max_depth: u32,
}

/// Backtracking search for a complete, consistent assignment. Returns the first one found.
pub(crate) fn search_solution(
    crossword: &Crossword,
    domains: &Domains,
    word_reuse: WordReuse,
    maintain_arc_consistency: bool,
) -> Option<SolvedData> {
    let mut context = SearchContext {
        crossword,
        word_reuse,
        maintain_arc_consistency,
        guesses: 0,
        max_depth: 0,
    };
    let mut assignment = Assignment::new();
    if !context.search_next(1, domains, &mut assignment) {
        debug!("search failed after {} guesses", context.guesses);
        return None;
    }
    Some(SolvedData {
        assignment,
        guesses: context.guesses,
        max_depth: context.max_depth,
    })
}

impl SearchContext<'_> {
    /// On success the assignment is complete; on failure it is restored to its state on entry.
    fn search_next(&mut self, depth: u32, domains: &Domains, assignment: &mut Assignment) -> bool {
        if assignment.is_complete(self.crossword) {
            return true;
        }
        let variable = match select_unassigned_variable(self.crossword, domains, assignment) {
            Some(variable) => variable,
            None => return false,
        };
        self.max_depth = cmp::max(self.max_depth, depth);
        debug!(
            "Backtracking (depth={}) on {}",
            depth,
            self.crossword.variable(variable)
        );
        let values =
            order_domain_values(self.crossword, domains, assignment, variable, self.word_reuse);
        for (i, word) in values.into_iter().enumerate() {
            self.guesses += 1;
            debug!(
                "Guessing {} for {}, guess #: {}",
                self.crossword.word(word),
                self.crossword.variable(variable),
                i + 1
            );
            assignment.insert(variable, word);
            if self.guess(depth, domains, assignment, variable, word) {
                return true;
            }
            assignment.remove(variable);
            debug!("Guess failed");
        }
        false
    }

    fn guess(
        &mut self,
        depth: u32,
        domains: &Domains,
        assignment: &mut Assignment,
        variable: VariableId,
        word: WordId,
    ) -> bool {
        if !is_consistent_binding(self.crossword, assignment, variable, self.word_reuse) {
            return false;
        }
        if !self.maintain_arc_consistency {
            return self.search_next(depth + 1, domains, assignment);
        }
        // pruning is done on a copy so that it is discarded when the guess fails
        let mut domains = domains.clone();
        domains[variable].retain_only(word);
        let arcs: Vec<Arc> = self
            .crossword
            .neighbors(variable)
            .iter()
            .filter(|&&neighbor| !assignment.contains(neighbor))
            .map(|&neighbor| (neighbor, variable))
            .collect();
        match ac3(self.crossword, &mut domains, self.word_reuse, Some(arcs)) {
            PropagateResult::Invalid(_) => false,
            PropagateResult::Consistent => self.search_next(depth + 1, &domains, assignment),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::crossword::solve::domains::Domains;
    use crate::crossword::solve::node_consistency::apply_node_consistency;
    use crate::crossword::solve::search::search_solution;
    use crate::crossword::solve::WordReuse;
    use crate::crossword::Crossword;

    const STRUCTURE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____";
    const WORDS: &str = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten";

    fn node_consistent(crossword: &Crossword) -> Domains {
        let mut domains = Domains::new(crossword);
        apply_node_consistency(crossword, &mut domains);
        domains
    }

    #[test]
    fn search_with_and_without_inference() {
        let crossword = Crossword::parse(STRUCTURE, WORDS).unwrap();
        let domains = node_consistent(&crossword);
        for &inference in &[false, true] {
            let solved = search_solution(&crossword, &domains, WordReuse::Forbid, inference).unwrap();
            assert!(solved.assignment.is_complete(&crossword));
            assert!(solved.assignment.is_consistent(&crossword, WordReuse::Forbid));
            let words: Vec<String> = solved
                .assignment
                .iter()
                .map(|(_, w)| crossword.word(w).to_string())
                .collect();
            assert_eq!(vec!["SEVEN", "SIX", "FIVE", "NINE"], words);
            assert!(solved.max_depth <= 4);
        }
    }

    #[test]
    fn failed_branches_do_not_leak() {
        // AAA is tried first for the down slot but no other word has an A in the middle. Arc
        // consistency empties the across domain, and the BBB guess still needs CBC from it.
        let crossword = Crossword::parse("#_#\n___\n#_#", "aaa\nbbb\ncbc").unwrap();
        let domains = node_consistent(&crossword);
        let solved = search_solution(&crossword, &domains, WordReuse::Forbid, true).unwrap();
        assert!(solved.assignment.is_consistent(&crossword, WordReuse::Forbid));
        let word_of = |variable| crossword.word(solved.assignment.get(variable).unwrap()).to_string();
        assert_eq!("BBB", word_of(0));
        assert_eq!("CBC", word_of(1));
        // AAA, BBB, then CBC
        assert_eq!(3, solved.guesses);
    }

    #[test]
    fn exhausted_search() {
        let crossword = Crossword::parse("___\n___\n___", "bat\nare\nten").unwrap();
        let domains = node_consistent(&crossword);
        assert!(search_solution(&crossword, &domains, WordReuse::Forbid, false).is_none());
        assert!(search_solution(&crossword, &domains, WordReuse::Forbid, true).is_none());
    }

    #[test]
    fn no_variables() {
        let crossword = Crossword::parse("_#\n#_", "cat").unwrap();
        let domains = node_consistent(&crossword);
        let solved = search_solution(&crossword, &domains, WordReuse::Forbid, true).unwrap();
        assert!(solved.assignment.is_empty());
        assert_eq!(0, solved.guesses);
    }
}
