/// Terminal front end
///
/// Renders the four sections as a menu of prompts. Entering a prompt counts
/// as focusing the field, leaving it as losing focus.

use crate::core::searcher::SEARCH_FAILED_TITLE;
use crate::core::{Registrar, ResultCard, Searcher};
use crate::db::Database;
use crate::error::{MemberError, Result};
use crate::form::{FieldKind, MemberField, Tab, DATE_HINT};
use crate::shell::Presenter;
use inquire::{Editor, InquireError, Select, Text};
use log::{error, warn};
use std::fmt;
use std::sync::Arc;

/// Entry that leaves a choice field unset
const NO_CHOICE: &str = "(none)";

const LABEL_WIDTH: usize = 28;

pub const INPUT_FAILED_TITLE: &str = "Input failed";

/// Prints notifications and result cards to the terminal
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn notify_success(&mut self, title: &str, message: &str) {
        println!("\n✓ {}: {}\n", title, message);
    }

    fn notify_failure(&mut self, title: &str, message: &str) {
        eprintln!("\n✗ {}: {}\n", title, message);
    }

    fn warn(&mut self, title: &str, message: &str) {
        eprintln!("\n⚠ {}: {}\n", title, message);
    }

    fn show_results(&mut self, term: &str, cards: &[ResultCard]) {
        println!("\nSearch Results: {}", term);
        println!("{}", "=".repeat(60));
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(60));
            }
            print!("{}", format_card(card));
        }
        println!("{}\n", "=".repeat(60));
    }

    fn show_no_matches(&mut self, term: &str) {
        println!("\nSearch Results: {}", term);
        println!("{}", "=".repeat(60));
        println!("No matches found.");
        println!("{}\n", "=".repeat(60));
    }
}

/// Lay a card out as aligned `Label: value` rows
///
/// Continuation lines of multi-line values line up under the first one.
pub fn format_card(card: &ResultCard) -> String {
    let indent = " ".repeat(LABEL_WIDTH + 3);
    let mut out = String::new();

    for (label, value) in &card.rows {
        let mut lines = value.lines();
        let first = lines.next().unwrap_or("");
        out.push_str(&format!("  {:<width$} {}\n", format!("{}:", label), first, width = LABEL_WIDTH));
        for line in lines {
            out.push_str(&format!("{}{}\n", indent, line));
        }
    }

    out
}

/// Top level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Open(Tab),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Open(tab) => write!(f, "{}", tab),
            MenuItem::Quit => write!(f, "Quit"),
        }
    }
}

/// Actions at the bottom of the prayer requests tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrayerAction {
    Submit,
    Back,
}

impl fmt::Display for PrayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrayerAction::Submit => write!(f, "✅ Submit"),
            PrayerAction::Back => write!(f, "⏪ Back"),
        }
    }
}

/// Interactive registration and search session
pub struct TerminalShell<P: Presenter = TerminalPresenter> {
    registrar: Registrar,
    searcher: Searcher,
    presenter: P,
}

impl TerminalShell {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_presenter(db, TerminalPresenter)
    }
}

impl<P: Presenter> TerminalShell<P> {
    pub fn with_presenter(db: Arc<Database>, presenter: P) -> Self {
        Self {
            registrar: Registrar::new(Arc::clone(&db)),
            searcher: Searcher::new(db),
            presenter,
        }
    }

    /// Run until the user quits
    ///
    /// Esc inside a section goes back to the menu; Ctrl-C ends the session.
    /// Any other input failure is reported and the form is kept.
    pub async fn run(&mut self) -> Result<()> {
        println!("Victory in Christ – Member Registration\n");

        let mut current = Tab::MemberInfo;
        loop {
            let Some(tab) = self.choose_tab(current)? else {
                break;
            };

            let next = match self.open(tab).await {
                Ok(next) => Some(next),
                Err(e) => self.recover(tab, e),
            };

            match next {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(())
    }

    /// Section to return to after `open` failed, or None to end the session
    fn recover(&mut self, tab: Tab, err: MemberError) -> Option<Tab> {
        match err {
            MemberError::Prompt(InquireError::OperationCanceled) => Some(tab),
            MemberError::Prompt(InquireError::OperationInterrupted) => None,
            e => {
                error!("Input on {} failed: {}", tab, e);
                self.presenter.notify_failure(INPUT_FAILED_TITLE, &e.user_message());
                Some(tab)
            }
        }
    }

    fn choose_tab(&self, current: Tab) -> Result<Option<Tab>> {
        let mut items: Vec<MenuItem> = Tab::ALL.iter().map(|t| MenuItem::Open(*t)).collect();
        items.push(MenuItem::Quit);
        let cursor = Tab::ALL.iter().position(|t| *t == current).unwrap_or(0);

        let choice = Select::new("Section:", items).with_starting_cursor(cursor).prompt();
        match choice {
            Ok(MenuItem::Open(tab)) => Ok(Some(tab)),
            Ok(MenuItem::Quit)
            | Err(InquireError::OperationCanceled)
            | Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Work through one section and return the section to show next
    async fn open(&mut self, tab: Tab) -> Result<Tab> {
        match tab {
            Tab::MemberInfo => {
                self.fill(tab)?;
                Ok(Tab::ChurchHistory)
            }
            Tab::ChurchHistory => {
                self.fill(tab)?;
                Ok(Tab::PrayerRequests)
            }
            Tab::PrayerRequests => {
                self.fill(tab)?;
                let action = Select::new("Next:", vec![PrayerAction::Submit, PrayerAction::Back]).prompt()?;
                match action {
                    PrayerAction::Back => Ok(Tab::ChurchHistory),
                    PrayerAction::Submit => match self.registrar.submit(&mut self.presenter).await {
                        Ok(_) => Ok(Tab::MemberInfo),
                        // Already reported; stay so the user can retry
                        Err(_) => Ok(Tab::PrayerRequests),
                    },
                }
            }
            Tab::Search => {
                let term = Text::new("Search by Name or Email:").prompt()?;
                if let Err(e) = self.searcher.search(&term, &mut self.presenter).await {
                    error!("Search for '{}' failed: {}", term.trim(), e);
                    self.presenter.notify_failure(SEARCH_FAILED_TITLE, &e.user_message());
                }
                Ok(Tab::Search)
            }
        }
    }

    fn fill(&mut self, tab: Tab) -> Result<()> {
        for field in tab.fields() {
            self.prompt_field(*field)?;
        }
        Ok(())
    }

    fn prompt_field(&mut self, field: MemberField) -> Result<()> {
        self.registrar.focus_in(field);

        let current = self.registrar.form().value(field).to_string();
        let label = format!("{}:", field.label());

        let answer = match field.kind() {
            FieldKind::Text => {
                let mut prompt = Text::new(&label).with_initial_value(&current);
                if field.is_date() {
                    prompt = prompt.with_placeholder(DATE_HINT);
                }
                prompt.prompt()
            }
            FieldKind::Choice(choices) => {
                let mut options = vec![NO_CHOICE];
                options.extend_from_slice(choices);
                let cursor = options.iter().position(|c| *c == current).unwrap_or(0);

                Select::new(&label, options)
                    .with_starting_cursor(cursor)
                    .prompt()
                    .map(|choice| if choice == NO_CHOICE { String::new() } else { choice.to_string() })
            }
            FieldKind::MultiLine => {
                match Editor::new(&label).with_predefined_text(&current).prompt() {
                    Err(InquireError::IO(e)) => {
                        warn!("Editor unavailable ({}), reading {} as one line", e, field);
                        Text::new(&label).with_initial_value(&current).prompt()
                    }
                    other => other,
                }
                .map(|text| text.trim().to_string())
            }
        };

        let outcome = answer
            .map_err(MemberError::from)
            .and_then(|value| self.registrar.set(field, &value));
        self.registrar.focus_out(field);

        outcome
    }
}
