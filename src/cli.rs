use crate::error::{MemberError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// File name of the member store
pub const DB_FILE: &str = "church_members.db";

/// Directory under the platform data dir holding the store
const APP_DIR: &str = "church-members";

#[derive(Parser, Debug)]
#[clap(name = "church-members", version = env!("CARGO_PKG_VERSION"))]
/// Register church members and look them up
pub struct Cli {
    /// Member database file
    #[clap(long, env = "CHURCH_MEMBERS_DB")]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the registration form (default)
    #[clap(name = "app")]
    App,
    /// Search members by name or email
    #[clap(name = "search")]
    Search(SearchMembers),
    /// Show where the store lives and how many members it holds
    #[clap(name = "status")]
    Status,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SearchMembers {
    /// Part of a full name or email
    pub term: Vec<String>,

    /// Print matching records as JSON
    #[clap(long)]
    pub json: bool,
}

impl SearchMembers {
    pub fn term(&self) -> String {
        self.term.join(" ")
    }
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    /// Where the member store lives
    pub fn db_path(&self) -> Result<PathBuf> {
        resolve_db_path(self.db.as_deref(), dirs::data_dir())
    }
}

/// An explicit path wins; otherwise the platform data dir, and the working
/// directory when there is none
pub fn resolve_db_path(explicit: Option<&Path>, data_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match data_dir {
            Some(dir) => dir.join(APP_DIR).join(DB_FILE),
            None => PathBuf::from(DB_FILE),
        },
    };

    if path.is_dir() {
        return Err(MemberError::Config(format!(
            "{} is a directory, expected a database file",
            path.display()
        )));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["church-members"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from(["church-members", "search", "Jane", "Doe", "--json"]).unwrap();
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.term(), "Jane Doe");
                assert!(args.json);
            }
            other => panic!("Expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_search_without_term_parses() {
        // The blank term is rejected by the searcher, not by clap
        let cli = Cli::try_parse_from(["church-members", "search"]).unwrap();
        match cli.command {
            Some(Command::Search(args)) => assert_eq!(args.term(), ""),
            other => panic!("Expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_db_path() {
        let cli = Cli::try_parse_from(["church-members", "--db", "/tmp/members.db", "status"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/members.db")));
        assert_eq!(cli.command, Some(Command::Status));
    }

    #[test]
    fn test_resolve_db_path() {
        let path = resolve_db_path(None, Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(path, PathBuf::from("/data/church-members/church_members.db"));

        let path = resolve_db_path(None, None).unwrap();
        assert_eq!(path, PathBuf::from(DB_FILE));

        let path = resolve_db_path(Some(Path::new("here.db")), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(path, PathBuf::from("here.db"));
    }

    #[test]
    fn test_resolve_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let result = resolve_db_path(Some(temp.path()), None);
        assert!(matches!(result, Err(MemberError::Config(_))));
    }
}
