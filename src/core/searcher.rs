/// Member searcher
///
/// Looks members up by a substring of their full name or email and turns the
/// matches into label/value cards for display.

use crate::db::{Database, Member};
use crate::error::Result;
use crate::shell::Presenter;
use log::{debug, info};
use std::sync::Arc;

pub const TERM_REQUIRED_TITLE: &str = "Input needed";
pub const TERM_REQUIRED_MESSAGE: &str = "Please enter a name or email to search.";
pub const SEARCH_FAILED_TITLE: &str = "Search failed";

/// What a search ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank term, nothing was queried
    TermRequired,
    NoMatches,
    Matches(usize),
}

/// One search result, one row per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub rows: Vec<(String, String)>,
}

impl ResultCard {
    pub fn from_member(member: &Member) -> Self {
        let rows = member
            .columns()
            .into_iter()
            .map(|(column, value)| (humanize(column), value))
            .collect();

        Self { rows }
    }

    /// Value shown under a humanized label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Column name to card label: `postal_code` becomes `Postal Code`
pub fn humanize(column: &str) -> String {
    let mut label = String::with_capacity(column.len());
    let mut word_start = true;

    for c in column.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if word_start {
                label.extend(c.to_uppercase());
            } else {
                label.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            label.push(c);
            word_start = true;
        }
    }

    label
}

/// Trimmed term, or None if nothing is left to search for
pub fn normalize_term(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Handles member searches
pub struct Searcher {
    db: Arc<Database>,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Members matching `term`, or None for a blank term
    ///
    /// A blank term never reaches the database.
    pub async fn matches(&self, term: &str) -> Result<Option<Vec<Member>>> {
        let Some(term) = normalize_term(term) else {
            debug!("Rejected blank search term");
            return Ok(None);
        };

        let members = self.db.search_members(term).await?;
        info!("Search for '{}' matched {} member(s)", term, members.len());

        Ok(Some(members))
    }

    /// Search and hand the outcome to the presenter
    ///
    /// # Returns
    /// * `Ok(SearchOutcome)` - What was shown to the user
    /// * `Err(MemberError)` - If the query itself failed
    pub async fn search(&self, term: &str, presenter: &mut dyn Presenter) -> Result<SearchOutcome> {
        let Some(members) = self.matches(term).await? else {
            presenter.warn(TERM_REQUIRED_TITLE, TERM_REQUIRED_MESSAGE);
            return Ok(SearchOutcome::TermRequired);
        };

        let term = term.trim();
        if members.is_empty() {
            presenter.show_no_matches(term);
            return Ok(SearchOutcome::NoMatches);
        }

        let cards: Vec<ResultCard> = members.iter().map(ResultCard::from_member).collect();
        presenter.show_results(term, &cards);

        Ok(SearchOutcome::Matches(cards.len()))
    }
}
