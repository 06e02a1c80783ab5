//! Interactive prompts
//!
//! Thin wrappers over dialoguer so command code reads as a sequence of
//! questions.

use site_reindex::error::Result;
use site_reindex::types::SelectionMode;

use dialoguer::{Confirm, Select};

/// Ask the operator to pick one item from a list; returns the index
pub fn select(message: &str, items: &[String]) -> Result<usize> {
    let choice = Select::new()
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact()?;
    Ok(choice)
}

/// Ask a yes/no question, defaulting to no
pub fn confirm(message: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Ask which subset of the candidates to process
pub fn select_mode() -> Result<SelectionMode> {
    let labels: Vec<String> = SelectionMode::MODES
        .iter()
        .map(|mode| mode.label().to_string())
        .collect();

    let choice = Select::new()
        .with_prompt("What would you like to index? (Recommended: new URLs only)")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SelectionMode::MODES[choice])
}
