/// Presentation shell
///
/// Everything the user sees. The controllers only talk to a `Presenter`;
/// the terminal front end is one implementation of it.

pub mod terminal;

pub use terminal::{TerminalPresenter, TerminalShell};

use crate::core::ResultCard;

/// Notifications and result views the controllers can raise
pub trait Presenter {
    /// Modal confirmation after a successful action
    fn notify_success(&mut self, title: &str, message: &str);

    /// Something went wrong and the user has to know
    fn notify_failure(&mut self, title: &str, message: &str);

    /// Recoverable input problem
    fn warn(&mut self, title: &str, message: &str);

    /// One result view per search, cards stacked in order
    fn show_results(&mut self, term: &str, cards: &[ResultCard]);

    /// The search ran and found nothing
    fn show_no_matches(&mut self, term: &str);
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Everything a presenter was asked to show
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Signal {
        Success(String, String),
        Failure(String, String),
        Warning(String, String),
        Results(String, Vec<ResultCard>),
        NoMatches(String),
    }

    /// Presenter that records signals instead of showing them
    #[derive(Debug, Default)]
    pub struct RecordingPresenter {
        pub signals: Vec<Signal>,
    }

    impl Presenter for RecordingPresenter {
        fn notify_success(&mut self, title: &str, message: &str) {
            self.signals.push(Signal::Success(title.to_string(), message.to_string()));
        }

        fn notify_failure(&mut self, title: &str, message: &str) {
            self.signals.push(Signal::Failure(title.to_string(), message.to_string()));
        }

        fn warn(&mut self, title: &str, message: &str) {
            self.signals.push(Signal::Warning(title.to_string(), message.to_string()));
        }

        fn show_results(&mut self, term: &str, cards: &[ResultCard]) {
            self.signals.push(Signal::Results(term.to_string(), cards.to_vec()));
        }

        fn show_no_matches(&mut self, term: &str) {
            self.signals.push(Signal::NoMatches(term.to_string()));
        }
    }
}
