/// church-members library
///
/// Member registration form, record store and search for a church's
/// member records.

pub mod cli;
pub mod core;
pub mod db;
pub mod error;
pub mod form;
pub mod shell;

// Re-exports for convenience
pub use db::Database;
pub use error::{MemberError, Result};
