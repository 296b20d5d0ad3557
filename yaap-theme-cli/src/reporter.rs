//! Terminal implementation of the overwrite-policy reporter

use console::style;
use dialoguer::Confirm;
use yaap_theme::validate::Reporter;

/// Prints notices to stderr and asks confirmations with `dialoguer`
#[derive(Debug, Clone, Copy)]
pub struct TerminalReporter {
    interactive: bool,
}

impl TerminalReporter {
    /// Create a reporter. Confirmations are answered `false` when not interactive.
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Whether confirmations are shown.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl Reporter for TerminalReporter {
    fn warn(&self, message: &str) {
        eprintln!("{}", style(message).yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", style(message).red().bold());
    }

    fn confirm(&self, prompt: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "confirmation prompt failed");
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_never_confirms() {
        let reporter = TerminalReporter::new(false);
        assert!(!reporter.is_interactive());
        assert!(!reporter.confirm("Override?"));
    }
}
