/// Error types for church-members
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for member registration and lookup
#[derive(Error, Debug)]
pub enum MemberError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (creating the database directory, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal prompt failed or was cancelled
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The members table exists but lacks columns the form writes to
    #[error("Members table is missing columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A choice field was given a value outside its list
    #[error("'{value}' is not a valid choice for {field}")]
    InvalidChoice { field: String, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for church-members operations
pub type Result<T> = std::result::Result<T, MemberError>;

/// Convert MemberError to a user-friendly error message
impl MemberError {
    pub fn user_message(&self) -> String {
        match self {
            MemberError::Database(e) => {
                format!("The member could not be saved. Please try again. Details: {}", e)
            }
            MemberError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            MemberError::Prompt(e) => {
                format!("Input could not be read, your entries are kept. Details: {}", e)
            }
            MemberError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            MemberError::SchemaMismatch { missing } => {
                format!(
                    "The database file has an unexpected layout (missing: {}).",
                    missing.join(", ")
                )
            }
            MemberError::InvalidChoice { field, value } => {
                format!("Please pick one of the listed options for {} (got '{}')", field, value)
            }
            MemberError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = MemberError::InvalidChoice {
            field: "Gender".to_string(),
            value: "Robot".to_string(),
        };
        assert!(err.user_message().contains("Gender"));
        assert!(err.user_message().contains("Robot"));

        let err = MemberError::Config("no data directory".to_string());
        assert!(err.user_message().contains("no data directory"));
    }

    #[test]
    fn test_error_display() {
        let err = MemberError::SchemaMismatch {
            missing: vec!["email".to_string(), "dob".to_string()],
        };
        let display = format!("{}", err);
        assert_eq!(display, "Members table is missing columns: email, dob");
    }
}
