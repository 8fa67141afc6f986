//! Git plumbing for tsk
//!
//! This module provides:
//! - A centralized subprocess runner for git commands
//! - Branch listing normalization with smart-case fuzzy filtering
//! - Branch operations (checkout with tracking, creation, force deletion)
//! - Repository precondition checks run before any resolution logic

pub mod branch;
pub mod listing;
pub mod runner;

pub use branch::{
    checkout_task, current_branch, delete_branch, has_uncommitted_changes, is_work_tree,
    list_remotes,
};
pub use listing::{branch_exists, branch_list, normalize_listing, BranchQuery};
pub use runner::{run_git, run_git_checked, run_git_ok};

use anyhow::Result;
use std::path::Path;

use crate::error::TaskError;

/// Check repository preconditions before any resolution or deletion runs.
///
/// The cleanliness contract is uncommitted diffs only; unpushed commits
/// are deliberately not checked.
pub fn ensure_repo_ready(repo_root: &Path) -> Result<()> {
    if !is_work_tree(repo_root) {
        return Err(TaskError::NotAGitRepo.into());
    }
    if has_uncommitted_changes(repo_root) {
        return Err(TaskError::DirtyWorkTree.into());
    }
    Ok(())
}
