use crate::crossword::solve::WordReuse;
use crate::crossword::{Assignment, Crossword, VariableId};

/// Returns true if every bound word has its variable's length and every pair of bound, crossing
/// variables agree on their shared letter. With `WordReuse::Forbid`, no word may be bound twice.
pub(crate) fn is_consistent(
    crossword: &Crossword,
    assignment: &Assignment,
    word_reuse: WordReuse,
) -> bool {
    assignment
        .iter()
        .all(|(variable, _)| is_consistent_binding(crossword, assignment, variable, word_reuse))
}

/// Checks one bound variable against the rest of the assignment. If the assignment was consistent
/// before `variable` was bound, this is equivalent to `is_consistent`.
pub(crate) fn is_consistent_binding(
    crossword: &Crossword,
    assignment: &Assignment,
    variable: VariableId,
    word_reuse: WordReuse,
) -> bool {
    let word_id = match assignment.get(variable) {
        Some(word_id) => word_id,
        None => return true,
    };
    let word = crossword.word(word_id);
    if word.len() != crossword.variable(variable).length() {
        return false;
    }
    let crossings_agree = crossword.neighbors(variable).iter().all(|&neighbor| {
        match (assignment.get(neighbor), crossword.overlap(variable, neighbor)) {
            (Some(other), Some(overlap)) => {
                word.letter(overlap.first) == crossword.word(other).letter(overlap.second)
            }
            _ => true,
        }
    });
    if !crossings_agree {
        return false;
    }
    match word_reuse {
        WordReuse::Allow => true,
        WordReuse::Forbid => assignment
            .iter()
            .all(|(other, other_word)| other == variable || other_word != word_id),
    }
}

#[cfg(test)]
mod tests {
    use crate::crossword::solve::consistency::{is_consistent, is_consistent_binding};
    use crate::crossword::solve::WordReuse;
    use crate::crossword::{Assignment, Crossword};

    fn crossword() -> Crossword {
        Crossword::parse("#_#\n___\n#_#\n\n___", "art\ncat\ndog\ndot\nox").unwrap()
    }

    fn assign(crossword: &Crossword, words: &[(usize, &str)]) -> Assignment {
        let mut assignment = Assignment::new();
        for &(variable, word) in words {
            assignment.insert(variable, crossword.dictionary().find(word).unwrap());
        }
        assignment
    }

    #[test]
    fn empty_is_consistent() {
        let crossword = crossword();
        assert!(is_consistent(&crossword, &Assignment::new(), WordReuse::Forbid));
    }

    #[test]
    fn crossing_letters() {
        let crossword = crossword();
        let good = assign(&crossword, &[(0, "dog"), (1, "dot")]);
        assert!(is_consistent(&crossword, &good, WordReuse::Forbid));
        let bad = assign(&crossword, &[(0, "cat"), (1, "dot")]);
        assert!(!is_consistent(&crossword, &bad, WordReuse::Allow));
        assert!(!is_consistent_binding(&crossword, &bad, 1, WordReuse::Allow));
    }

    #[test]
    fn wrong_length() {
        let crossword = crossword();
        let assignment = assign(&crossword, &[(0, "ox")]);
        assert!(!is_consistent(&crossword, &assignment, WordReuse::Allow));
    }

    #[test]
    fn word_reuse() {
        let crossword = crossword();
        // variable 2 is the bottom row and does not cross the others
        let assignment = assign(&crossword, &[(0, "cat"), (2, "cat")]);
        assert!(is_consistent(&crossword, &assignment, WordReuse::Allow));
        assert!(!is_consistent(&crossword, &assignment, WordReuse::Forbid));
    }

    #[test]
    fn unbound_variable() {
        let crossword = crossword();
        let assignment = assign(&crossword, &[(0, "cat")]);
        assert!(is_consistent_binding(&crossword, &assignment, 1, WordReuse::Forbid));
    }
}
