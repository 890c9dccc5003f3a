/// SQL query functions for database operations
///
/// Records are insert-only: there is no update or delete.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use chrono::Local;
use log::debug;

/// Format of the registration timestamp
pub const REGISTRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wrap a search term for LIKE, matching `%`, `_` and `\` literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Database {
    /// Register a new member
    ///
    /// The id and the registration timestamp are assigned here; the caller
    /// can't supply either.
    ///
    /// # Arguments
    /// * `input` - Field values from the registration form
    ///
    /// # Returns
    /// * `Ok(i64)` - The new member ID
    /// * `Err(MemberError)` - If the write fails
    pub async fn insert_member(&self, input: &MemberInput) -> Result<i64> {
        let registered_at = Local::now().format(REGISTRATION_FORMAT).to_string();

        let result = sqlx::query(
            r#"
            INSERT INTO members (
                surname, full_name, dob, gender, address, city, state, postal_code,
                phone, email, children, marital_status, interests, salvation_date,
                baptism_date, previous_church, previous_church_location, ministry,
                prayer_requests, registration_date
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.surname)
        .bind(&input.full_name)
        .bind(&input.dob)
        .bind(&input.gender)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.postal_code)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.children)
        .bind(&input.marital_status)
        .bind(&input.interests)
        .bind(&input.salvation_date)
        .bind(&input.baptism_date)
        .bind(&input.previous_church)
        .bind(&input.previous_church_location)
        .bind(&input.ministry)
        .bind(&input.prayer_requests)
        .bind(&registered_at)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted member {} at {}", id, registered_at);

        Ok(id)
    }

    /// Find members whose full name or email contains `term`
    ///
    /// Matching is case-insensitive for ASCII letters (SQLite's default
    /// `LIKE`). Rows come back in storage order.
    ///
    /// # Arguments
    /// * `term` - Substring to look for; callers reject blank terms
    pub async fn search_members(&self, term: &str) -> Result<Vec<Member>> {
        let pattern = like_pattern(term);

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT * FROM members
            WHERE full_name LIKE ?1 ESCAPE '\' OR email LIKE ?1 ESCAPE '\'
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.pool())
        .await?;

        Ok(members)
    }

    /// Get member by ID
    pub async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(member)
    }

    /// Number of stored members
    pub async fn count_members(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(self.pool())
            .await?;

        Ok(count.0)
    }
}
