pub mod commands;
pub mod error;
pub mod git;
pub mod naming;
pub mod prompt;
pub mod resolve;
