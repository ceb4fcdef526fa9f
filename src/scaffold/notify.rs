//! Progress notifier collaborator
//!
//! Fire-and-forget progress and outcome reporting. The generator holds no
//! ambient state; whoever runs it injects a notifier.

use std::cell::RefCell;

use console::style;

/// Progress/outcome sink for a scaffold run.
pub trait Notifier {
    /// Report a completed step.
    fn info(&self, message: &str);
    /// Report a fatal condition.
    fn error(&self, message: &str);
}

/// [`Notifier`] that prints styled lines to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        println!("  {} {}", style("✓").green(), style(message).dim());
    }

    fn error(&self, message: &str) {
        eprintln!("  {} {}", style("✗").red().bold(), style(message).red());
    }
}

/// [`Notifier`] that records messages for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All info messages so far.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    /// All error messages so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
