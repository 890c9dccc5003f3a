/// Registers members from the entry form
///
/// Holds the in-progress form, turns it into a record on submit, and clears it
/// once the store has accepted the record.

use crate::db::Database;
use crate::error::Result;
use crate::form::{FormState, MemberField};
use crate::shell::Presenter;
use log::{error, info};
use std::sync::Arc;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Member registered successfully!";
pub const FAILURE_TITLE: &str = "Registration failed";

pub struct Registrar {
    db: Arc<Database>,
    form: FormState,
}

impl Registrar {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            form: FormState::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus_in(&mut self, field: MemberField) {
        self.form.focus_in(field);
    }

    pub fn focus_out(&mut self, field: MemberField) {
        self.form.focus_out(field);
    }

    pub fn set(&mut self, field: MemberField, value: &str) -> Result<()> {
        self.form.set(field, value)
    }

    /// Store the current form as a new member
    ///
    /// Nothing is required; a blank form makes a blank record. On success the
    /// form is reset. On failure the user is told and the form is kept so the
    /// entry can be retried.
    pub async fn submit(&mut self, presenter: &mut dyn Presenter) -> Result<i64> {
        let input = self.form.to_input();

        match self.db.insert_member(&input).await {
            Ok(id) => {
                info!("Registered member {}", id);
                presenter.notify_success(SUCCESS_TITLE, SUCCESS_MESSAGE);
                self.reset();
                Ok(id)
            }
            Err(e) => {
                error!("Failed to register member: {}", e);
                presenter.notify_failure(FAILURE_TITLE, &e.user_message());
                Err(e)
            }
        }
    }

    /// Empty every field and put the date hints back
    pub fn reset(&mut self) {
        self.form.reset();
    }
}
