//! Interactive prompt seam.
//!
//! Thin wrappers over dialoguer so the command layer depends on three
//! narrow operations rather than a concrete prompt implementation.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Single selection from a list; returns the chosen index.
pub fn choose(prompt: &str, items: &[String]) -> Result<usize> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(index)
}

/// Free-text input.
pub fn input(prompt: &str) -> Result<String> {
    let text: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(text)
}
