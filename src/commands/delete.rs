//! Task deletion workflows
//! Usage: tsk delete [term]

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::error::{TaskError, PROTECTED_BRANCH};
use crate::git::{self, BranchQuery};
use crate::prompt;

/// Execute deletion: exact name, fuzzy batch, or interactive pick.
pub fn execute(term: Option<&str>) -> Result<()> {
    let repo_root = std::env::current_dir()?;
    git::ensure_repo_ready(&repo_root)?;

    match term {
        Some(term) => delete_by_term(term, &repo_root),
        None => delete_interactive(&repo_root),
    }
}

/// What a deletion request should do, decided before any prompt or git call.
#[derive(Debug, PartialEq, Eq)]
enum DeletePlan {
    /// The term names a branch; delete exactly that one.
    Exact(String),
    /// The term is a search; delete every match after confirmation.
    Batch {
        matches: Vec<String>,
        /// The protected branch was among the matches and was dropped.
        skipped_protected: bool,
    },
}

/// Guard rails for `delete <term>`, pure over the already-computed facts.
///
/// Refuses the protected name outright, refuses deleting the checked-out
/// branch (as an exact target or anywhere in a fuzzy batch), and refuses
/// a search with no results. The protected branch is silently a member of
/// fuzzy batches; it is dropped here so the rest of the batch can proceed.
fn plan_deletion(
    term: &str,
    current: &str,
    exact_exists: bool,
    fuzzy_matches: Vec<String>,
) -> Result<DeletePlan, TaskError> {
    if term == PROTECTED_BRANCH {
        return Err(TaskError::ProtectedBranch(term.to_string()));
    }

    if exact_exists {
        if current == term {
            return Err(TaskError::DeleteCurrentBranch(current.to_string()));
        }
        return Ok(DeletePlan::Exact(term.to_string()));
    }

    if fuzzy_matches.is_empty() {
        return Err(TaskError::NoMatches(term.to_string()));
    }
    if fuzzy_matches.iter().any(|b| b == current) {
        return Err(TaskError::DeleteCurrentBranch(current.to_string()));
    }

    let before = fuzzy_matches.len();
    let matches: Vec<String> = fuzzy_matches
        .into_iter()
        .filter(|b| b != PROTECTED_BRANCH)
        .collect();
    if matches.is_empty() {
        return Err(TaskError::ProtectedBranch(PROTECTED_BRANCH.to_string()));
    }

    Ok(DeletePlan::Batch {
        skipped_protected: matches.len() != before,
        matches,
    })
}

/// Delete an exact branch, or every branch matching a fuzzy term.
fn delete_by_term(term: &str, repo_root: &Path) -> Result<()> {
    let current = git::current_branch(repo_root)?;
    let exact_exists = git::branch_exists(&BranchQuery::exact(term), repo_root)?;
    let fuzzy_matches = if exact_exists {
        Vec::new()
    } else {
        git::branch_list(&BranchQuery::fuzzy(term), repo_root)?
    };

    match plan_deletion(term, &current, exact_exists, fuzzy_matches)? {
        DeletePlan::Exact(name) => {
            delete_task(&name, repo_root)?;
            println!("{}", format!("Deleted branch {name}").green());
            Ok(())
        }
        DeletePlan::Batch {
            matches,
            skipped_protected,
        } => {
            if skipped_protected {
                println!(
                    "{}",
                    format!("Branch {PROTECTED_BRANCH} is protected, skipping it").red()
                );
            }
            println!("Will be deleting the following branches:");
            println!("{}", matches.join("\n").red());
            if !prompt::confirm("Are you sure?")? {
                bail!("user declined");
            }

            // sequential, best effort: earlier deletions stand if a later one fails
            let mut failures = 0;
            for branch in &matches {
                match delete_task(branch, repo_root) {
                    Ok(()) => {}
                    Err(err) => {
                        failures += 1;
                        eprintln!("{}", format!("{err:#}").red());
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} branch(es) could not be deleted");
            }
            println!("{}", "Deleted".green());
            Ok(())
        }
    }
}

/// Present every branch for single-selection deletion.
fn delete_interactive(repo_root: &Path) -> Result<()> {
    let branches = git::branch_list(&BranchQuery::all(), repo_root)?;
    if branches.is_empty() {
        return Err(TaskError::NoMatches(String::new()).into());
    }

    let index = prompt::choose("Choose branch to delete", &branches)?;
    let chosen = &branches[index];

    let current = git::current_branch(repo_root)?;
    if chosen == &current {
        return Err(TaskError::DeleteCurrentBranch(current).into());
    }

    delete_task(chosen, repo_root)?;
    println!("{}", format!("Deleted branch {chosen}").green());
    Ok(())
}

/// Delete one branch, refusing the protected name before any git call.
pub fn delete_task(name: &str, repo_root: &Path) -> Result<()> {
    if name == PROTECTED_BRANCH {
        return Err(TaskError::ProtectedBranch(name.to_string()).into());
    }
    git::delete_branch(name, repo_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn protected_term_is_refused_outright() {
        let err = plan_deletion("master", "dev", true, vec![]).unwrap_err();
        assert_eq!(err, TaskError::ProtectedBranch("master".to_string()));
    }

    #[test]
    fn exact_target_on_current_branch_is_refused() {
        let err = plan_deletion("dev", "dev", true, vec![]).unwrap_err();
        assert_eq!(err, TaskError::DeleteCurrentBranch("dev".to_string()));
    }

    #[test]
    fn exact_target_otherwise_is_deleted() {
        let plan = plan_deletion("dev", "main", true, vec![]).unwrap();
        assert_eq!(plan, DeletePlan::Exact("dev".to_string()));
    }

    #[test]
    fn empty_search_result_is_refused() {
        let err = plan_deletion("nope", "main", false, vec![]).unwrap_err();
        assert_eq!(err, TaskError::NoMatches("nope".to_string()));
    }

    #[test]
    fn batch_containing_current_branch_is_refused_whole() {
        let err = plan_deletion("fix", "fix-auth", false, set(&["fix-layout", "fix-auth"]))
            .unwrap_err();
        assert_eq!(err, TaskError::DeleteCurrentBranch("fix-auth".to_string()));
    }

    #[test]
    fn batch_proceeds_over_all_matches() {
        let plan = plan_deletion("fix", "main", false, set(&["fix-layout", "fix-auth"])).unwrap();
        assert_eq!(
            plan,
            DeletePlan::Batch {
                matches: set(&["fix-layout", "fix-auth"]),
                skipped_protected: false,
            }
        );
    }

    #[test]
    fn protected_branch_is_dropped_from_batches() {
        let plan = plan_deletion("mas", "main", false, set(&["master", "mas-fix"])).unwrap();
        assert_eq!(
            plan,
            DeletePlan::Batch {
                matches: set(&["mas-fix"]),
                skipped_protected: true,
            }
        );
    }

    #[test]
    fn batch_of_only_the_protected_branch_is_refused() {
        let err = plan_deletion("mast", "main", false, set(&["master"])).unwrap_err();
        assert_eq!(err, TaskError::ProtectedBranch("master".to_string()));
    }
}
