//! Git command runner abstraction
//!
//! Centralized functions for spawning git with consistent error handling.
//! All higher-level branch operations go through these three shapes.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Run a git command and return the raw Output.
///
/// Use this when the exit code carries the answer (status checks) or when
/// custom error handling is needed.
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output> {
    debug!(command = %format!("git {}", args.join(" ")), "spawning git");
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command, check for success, and return stdout as a String.
///
/// On a non-zero exit, bails with the stderr content. stdout is returned
/// untrimmed so callers that parse line-oriented listings see it verbatim.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        bail!("git {cmd} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Run a git command and return true if it exited 0.
///
/// Swallows spawn failures as well as non-zero exits; for checks like
/// `rev-parse --is-inside-work-tree` where failure is just "no".
pub fn run_git_ok(args: &[&str], repo_root: &Path) -> bool {
    run_git(args, repo_root)
        .map(|output| output.status.success())
        .unwrap_or(false)
}
