//! Interactive prompting behind a trait so the orchestrator can run
//! against scripted answers in tests instead of a real terminal.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Source of interactive answers. Free-text reads allow empty input, which
/// callers interpret as "use the default".
pub trait Prompter {
    fn read_text(&self, prompt: &str) -> Result<String>;
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal-backed prompter used by the binary.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn read_text(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
