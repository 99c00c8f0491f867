//! Console interaction port
//!
//! Everything that may ask the user a question goes through [`PromptPort`].
//! The CLI plugs in an interactive adapter; tests and `--no-interaction` runs
//! use [`DefaultPrompt`], which always answers with the offered default.

/// Interactive questions asked during a run
#[cfg_attr(test, mockall::automock)]
pub trait PromptPort {
    /// Ask a yes/no question
    fn confirm(&self, question: &str, default: bool) -> bool;

    /// Ask the user to pick one of `options`
    ///
    /// Implementations return one of `options`; `default_index` is the answer
    /// used when the user just presses enter.
    fn choose_one(&self, question: &str, options: &[&'static str], default_index: usize) -> String;
}

/// Non-interactive prompt that always takes the default answer
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrompt;

impl PromptPort for DefaultPrompt {
    fn confirm(&self, question: &str, default: bool) -> bool {
        tracing::debug!(question, default, "prompt answered with default");
        default
    }

    fn choose_one(&self, question: &str, options: &[&'static str], default_index: usize) -> String {
        let answer = options
            .get(default_index)
            .or_else(|| options.first())
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::debug!(question, answer = %answer, "choice answered with default");
        answer
    }
}
