//! Branch listing normalization
//!
//! Turns raw `git branch -a` output into an ordered, deduplicated set of
//! branch names, filtered by an optional smart-case fuzzy term and an
//! optional exact post-filter.

use anyhow::Result;
use regex::{Regex, RegexBuilder};
use std::path::Path;

use crate::git::runner::run_git_checked;

/// Controls how a raw listing is filtered and transformed.
///
/// `fuzzy` and `exact` combine: the fuzzy filter runs first, `exact`
/// narrows the result afterwards, which lets the same query path answer
/// both "list matches" and "does this exact branch exist". `full_name`
/// keeps the `remotes/<remote>/` qualifier instead of collapsing remote
/// branches to their short names.
#[derive(Debug, Clone, Default)]
pub struct BranchQuery {
    pub fuzzy: Option<String>,
    pub exact: Option<String>,
    pub full_name: bool,
}

impl BranchQuery {
    /// Every branch, short names, no filtering.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn fuzzy(term: &str) -> Self {
        Self {
            fuzzy: Some(term.to_string()),
            ..Self::default()
        }
    }

    pub fn exact(name: &str) -> Self {
        Self {
            exact: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Exact match against the remote-qualified form (`remotes/origin/x`).
    pub fn exact_full(name: &str) -> Self {
        Self {
            exact: Some(name.to_string()),
            full_name: true,
            ..Self::default()
        }
    }
}

/// Smart-case fuzzy matcher, built once per query.
///
/// The term is case-sensitive iff it contains an uppercase letter. Terms
/// that parse as a regex match as one; anything unparsable degrades to
/// plain substring containment under the same case rule.
struct FuzzyMatcher {
    regex: Option<Regex>,
    term: String,
    case_sensitive: bool,
}

impl FuzzyMatcher {
    fn new(term: &str) -> Self {
        let case_sensitive = term.chars().any(|c| c.is_ascii_uppercase());
        let regex = RegexBuilder::new(term)
            .case_insensitive(!case_sensitive)
            .build()
            .ok();
        Self {
            regex,
            term: term.to_string(),
            case_sensitive,
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(re) => re.is_match(candidate),
            None if self.case_sensitive => candidate.contains(&self.term),
            None => candidate
                .to_lowercase()
                .contains(&self.term.to_lowercase()),
        }
    }
}

/// Normalize raw `git branch -a` output into an ordered set of names.
///
/// Each line carries a two-character decoration prefix (`* ` on the
/// current branch). Remote-qualified names collapse to their short form
/// unless `full_name` is set, `HEAD -> ` alias lines are dropped, and
/// duplicates (the same branch visible locally and as a tracking ref)
/// keep only their first occurrence.
pub fn normalize_listing(raw: &str, query: &BranchQuery) -> Vec<String> {
    let matcher = query.fuzzy.as_deref().map(FuzzyMatcher::new);

    let mut branches: Vec<String> = Vec::new();
    for line in raw.lines() {
        let name = strip_decoration(line);
        let name = if query.full_name {
            name.to_string()
        } else {
            strip_remote_qualifier(name)
        };

        if name.is_empty() || name.contains("HEAD -> ") {
            continue;
        }
        if let Some(m) = &matcher {
            if !m.matches(&name) {
                continue;
            }
        }
        if !branches.contains(&name) {
            branches.push(name);
        }
    }

    if let Some(exact) = &query.exact {
        branches.retain(|b| b == exact);
    }

    branches
}

/// Drop the two leading decoration characters (`* ` or spaces).
fn strip_decoration(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next();
    chars.as_str()
}

/// `remotes/<remote>/x/y` -> `x/y`; everything else passes through.
fn strip_remote_qualifier(name: &str) -> String {
    if let Some(rest) = name.strip_prefix("remotes/") {
        if let Some((_remote, short)) = rest.split_once('/') {
            return short.to_string();
        }
    }
    name.to_string()
}

/// List branches matching the query, via `git branch -a`.
pub fn branch_list(query: &BranchQuery, repo_root: &Path) -> Result<Vec<String>> {
    let stdout = run_git_checked(&["branch", "-a", "--no-color"], repo_root)?;
    Ok(normalize_listing(&stdout, query))
}

/// True when at least one branch matches the query.
pub fn branch_exists(query: &BranchQuery, repo_root: &Path) -> Result<bool> {
    Ok(!branch_list(query, repo_root)?.is_empty())
}
