//! Resolve-or-create flow for task branches
//! Usage: tsk [term]

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::error::TaskError;
use crate::git::{self, BranchQuery};
use crate::naming::is_name_valid;
use crate::prompt;
use crate::resolve::{resolve, TaskDecision};

/// Label for the picker entry that falls back to branch creation.
const CREATE_NEW_TASK: &str = "Create new task";

/// Execute the resolve-or-create flow for an optional search term.
pub fn execute(term: Option<&str>) -> Result<()> {
    let repo_root = std::env::current_dir()?;
    git::ensure_repo_ready(&repo_root)?;

    let term = term.unwrap_or("");
    let query = if term.is_empty() {
        BranchQuery::all()
    } else {
        BranchQuery::fuzzy(term)
    };
    let fuzzy_matches = git::branch_list(&query, &repo_root)?;
    let exact_exists =
        !term.is_empty() && git::branch_exists(&BranchQuery::exact(term), &repo_root)?;

    let decision = resolve(term, exact_exists, fuzzy_matches);
    apply(decision, term, &repo_root)
}

fn apply(decision: TaskDecision, term: &str, repo_root: &Path) -> Result<()> {
    match decision {
        TaskDecision::Checkout(name) => {
            git::checkout_task(&name, false, repo_root)?;
            println!("{}", "Branch exists, checking out now...".green());
            Ok(())
        }
        TaskDecision::CreateNew(name) => create_task(&name, term, repo_root),
        TaskDecision::Disambiguate(candidates) => {
            let mut items = candidates.clone();
            items.push(CREATE_NEW_TASK.to_string());

            let index = prompt::choose("Choose task", &items)?;
            if index < candidates.len() {
                return apply(TaskDecision::Checkout(candidates[index].clone()), term, repo_root);
            }

            let name = if term.is_empty() {
                prompt::input("New task name")?
            } else {
                term.to_string()
            };
            create_task(&name, term, repo_root)
        }
        TaskDecision::Reject(reason) => bail!(reason),
    }
}

/// Validate, confirm, then create and switch to a new task branch.
fn create_task(name: &str, term: &str, repo_root: &Path) -> Result<()> {
    // empty passes the rule set but is never a branch the user wants
    if name.is_empty() || !is_name_valid(name) {
        return Err(TaskError::InvalidName(name.to_string()).into());
    }

    if !prompt::confirm(&format!("Create task '{name}'?"))? {
        return apply(TaskDecision::Reject("user declined".to_string()), term, repo_root);
    }

    git::checkout_task(name, true, repo_root)?;
    println!("{}", format!("Created task {name}").green());
    Ok(())
}
