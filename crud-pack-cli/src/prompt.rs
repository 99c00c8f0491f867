//! Terminal prompts

use crud_pack::prompt::{DefaultPrompt, PromptPort};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

/// [`PromptPort`] backed by `dialoguer`
///
/// A prompt that cannot be shown (closed stdin, interrupted read) falls back
/// to its default answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl PromptPort for DialoguerPrompt {
    fn confirm(&self, question: &str, default: bool) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact()
            .unwrap_or_else(|error| {
                tracing::warn!(question, %error, "prompt failed, using default");
                default
            })
    }

    fn choose_one(&self, question: &str, options: &[&'static str], default_index: usize) -> String {
        let default_index = default_index.min(options.len().saturating_sub(1));

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .items(options)
            .default(default_index)
            .interact()
            .unwrap_or_else(|error| {
                tracing::warn!(question, %error, "prompt failed, using default");
                default_index
            });

        options
            .get(index)
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Prompt for this run
///
/// Interactive only when asked to be and a user is attached to the terminal.
#[must_use]
pub fn for_session(no_interaction: bool) -> Box<dyn PromptPort> {
    if no_interaction || !console::user_attended() {
        tracing::debug!("non-interactive run, prompts take their defaults");
        Box::new(DefaultPrompt)
    } else {
        Box::new(DialoguerPrompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interaction_takes_defaults() {
        let prompt = for_session(true);
        assert!(prompt.confirm("Generate Model?", true));
        assert!(!prompt.confirm("Generate Policy?", false));
        assert_eq!(prompt.choose_one("Controller type?", &["web", "api"], 1), "api");
    }
}
