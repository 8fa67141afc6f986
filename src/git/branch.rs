//! Branch operations: current branch, remotes, checkout and deletion.

use anyhow::{Context, Result};
use std::path::Path;

use crate::git::listing::{branch_exists, BranchQuery};
use crate::git::runner::{run_git_checked, run_git_ok};

/// Name of the currently checked-out branch.
pub fn current_branch(repo_root: &Path) -> Result<String> {
    let stdout = run_git_checked(&["symbolic-ref", "--short", "HEAD"], repo_root)?;
    Ok(stdout.trim().to_string())
}

/// True when `repo_root` is inside a git work tree.
pub fn is_work_tree(repo_root: &Path) -> bool {
    run_git_ok(&["rev-parse", "--is-inside-work-tree"], repo_root)
}

/// True when the work tree has uncommitted changes.
pub fn has_uncommitted_changes(repo_root: &Path) -> bool {
    !run_git_ok(&["diff", "--exit-code"], repo_root)
}

/// Configured remotes, with `origin` always first even if unconfigured.
///
/// Checkout probes remotes in this order when looking for a tracking
/// candidate, so `origin` wins ties deterministically.
pub fn list_remotes(repo_root: &Path) -> Result<Vec<String>> {
    let stdout = run_git_checked(&["remote"], repo_root)?;

    let mut remotes = vec!["origin".to_string()];
    for line in stdout.lines() {
        let remote = line.trim().to_string();
        if !remote.is_empty() && !remotes.contains(&remote) {
            remotes.push(remote);
        }
    }
    Ok(remotes)
}

/// Check out a task branch, creating it when `is_new` is set.
///
/// For existing names the remotes are probed in [`list_remotes`] order;
/// when a `remotes/<remote>/<name>` ref exists the checkout creates a
/// local branch tracking it, otherwise it is a plain `-B` checkout.
pub fn checkout_task(name: &str, is_new: bool, repo_root: &Path) -> Result<()> {
    if is_new {
        run_git_checked(&["checkout", "-b", name], repo_root)
            .context("Something went wrong creating the branch")?;
        return Ok(());
    }

    let mut tracked: Option<String> = None;
    for remote in list_remotes(repo_root)? {
        let qualified = format!("remotes/{remote}/{name}");
        if branch_exists(&BranchQuery::exact_full(&qualified), repo_root)? {
            tracked = Some(format!("{remote}/{name}"));
            break;
        }
    }

    match tracked {
        Some(upstream) => run_git_checked(&["checkout", "--track", "-B", name, &upstream], repo_root),
        None => run_git_checked(&["checkout", "-B", name], repo_root),
    }
    .context("Something went wrong creating the branch")?;

    Ok(())
}

/// Force-delete a branch (`-D`: succeeds even if not fully merged).
pub fn delete_branch(name: &str, repo_root: &Path) -> Result<()> {
    run_git_checked(&["branch", "-D", name], repo_root)
        .context("Something went wrong deleting the branch")?;
    Ok(())
}
