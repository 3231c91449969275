//! User interaction for the scaffolder.
//! The collector only talks to the [`Prompter`] trait; [`DialoguerPrompter`]
//! is the terminal implementation.

use crate::error::{Error, Result};
use console::style;
use dialoguer::{Confirm, Input};

/// Asks the user questions one at a time.
pub trait Prompter {
    /// Prints a section title before a group of questions.
    fn title(&self, text: &str);

    /// Asks a free-text question.
    ///
    /// With `default: None` an answer is required and the question is repeated
    /// until one is given. With `Some(default)` an empty answer returns the
    /// default, which may itself be empty.
    fn ask(&self, question: &str, default: Option<&str>) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Tells the user an answer was rejected.
    fn warn(&self, message: &str);
}

/// A section title as printed on the terminal: bold when the terminal
/// supports styling.
pub fn title_line(text: &str) -> String {
    style(text).bold().to_string()
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn title(&self, text: &str) {
        println!("\n{}\n", title_line(text));
    }

    fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
        let input = Input::<String>::new().with_prompt(question);
        let input = match default {
            Some("") => input.allow_empty(true),
            Some(default) => input.default(default.to_string()),
            None => input,
        };

        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn warn(&self, message: &str) {
        eprintln!("{message}");
    }
}
