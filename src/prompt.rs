use dialoguer::{Input, Select};

use crate::error::Result;

/// Capability interface over the interactive prompts, so the orchestrator
/// can be driven by scripted answers in tests.
pub trait Prompter {
    /// Ask a free-text question with a pre-filled default answer.
    fn input(&self, message: &str, default: &str) -> Result<String>;

    /// Ask a single-choice question; returns an index into `choices`.
    fn select(&self, message: &str, choices: &[String]) -> Result<usize>;
}

/// Terminal-backed prompter.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, message: &str, default: &str) -> Result<String> {
        Ok(Input::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?)
    }

    fn select(&self, message: &str, choices: &[String]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(message)
            .items(choices)
            .interact()?)
    }
}
