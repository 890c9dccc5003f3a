/// Database module for church-members
///
/// Owns the `members` table in a local SQLite file, accessed through sqlx.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
pub use queries::REGISTRATION_FORMAT;
