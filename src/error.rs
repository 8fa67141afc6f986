//! Error taxonomy for the tsk CLI.
//!
//! Every variant here is refused before any git mutation is attempted.
//! Failures of the git commands themselves are reported as wrapped
//! `anyhow` context from the runner instead.

use thiserror::Error;

/// The one branch name deletion always refuses.
pub const PROTECTED_BRANCH: &str = "master";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("This is not a git repo")]
    NotAGitRepo,

    #[error("Please commit any changes in your repo before using this tool")]
    DirtyWorkTree,

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Branch {0} is protected")]
    ProtectedBranch(String),

    #[error("Can't delete branch {0} if you're on it")]
    DeleteCurrentBranch(String),

    #[error("No results for search: '{0}'")]
    NoMatches(String),
}
