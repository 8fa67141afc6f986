//! Task resolution decision table.
//!
//! Maps a search term plus the already-computed branch facts to one
//! decision. Pure so the table is testable without a repository or a
//! terminal; prompting and git execution happen in the command layer.

/// Outcome of resolving a search term against the branch set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDecision {
    /// No match; create the branch (caller confirms first).
    CreateNew(String),
    /// Unambiguous target; switch to it without prompting.
    Checkout(String),
    /// Several candidates; caller presents a picker.
    Disambiguate(Vec<String>),
    /// Nothing to do; caller reports the reason and fails the run.
    Reject(String),
}

/// Resolve a search term, first matching rule wins:
///
/// 1. an exact branch of that name exists -> checkout the term itself
///    (checkout handles remote tracking setup);
/// 2. no fuzzy matches -> create the term as a new task;
/// 3. exactly one fuzzy match and a non-empty term -> checkout the match;
/// 4. otherwise -> disambiguate among all fuzzy matches.
///
/// The `delete` command word is routed to the deletion workflow before
/// this function is ever called.
pub fn resolve(
    search_term: &str,
    exact_match_exists: bool,
    fuzzy_matches: Vec<String>,
) -> TaskDecision {
    if exact_match_exists {
        return TaskDecision::Checkout(search_term.to_string());
    }

    if fuzzy_matches.is_empty() {
        return TaskDecision::CreateNew(search_term.to_string());
    }

    if !search_term.is_empty() {
        if let [only] = fuzzy_matches.as_slice() {
            return TaskDecision::Checkout(only.clone());
        }
    }

    TaskDecision::Disambiguate(fuzzy_matches)
}
