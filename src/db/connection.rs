/// Database connection management
///
/// The member store is a single SQLite file owned by one running instance,
/// so the pool is capped at one connection.

use crate::db::models::MEMBER_COLUMNS;
use crate::error::{MemberError, Result};
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// One process, one interaction thread, one connection
const MAX_CONNECTIONS: u32 = 1;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open or create the member store
    ///
    /// Safe to call on every startup: the table is only created when it is
    /// missing, and an existing file keeps its records.
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Store is open and the members table is usable
    /// * `Err(MemberError)` - If the file can't be created or opened, or the
    ///   existing table lacks columns the form writes to
    ///
    /// # Examples
    /// ```no_run
    /// use church_members_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("church_members.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        db.initialize_schema().await?;
        info!("Opened member store at {}", db.db_path.display());

        Ok(db)
    }

    /// Create a test database in memory
    ///
    /// Used for testing. Creates a fresh database for each test.
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create the members table if needed and check its columns
    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("schema.sql");

        for statement in schema.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool.as_ref()).await?;
            }
        }

        self.verify_columns().await
    }

    /// Every column the models read or write must exist in the table
    async fn verify_columns(&self) -> Result<()> {
        let present: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM pragma_table_info('members')")
                .fetch_all(self.pool.as_ref())
                .await?;

        let missing: Vec<String> = MEMBER_COLUMNS
            .iter()
            .filter(|column| !present.iter().any(|(name,)| name == *column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(MemberError::SchemaMismatch { missing });
        }

        debug!("members table has all {} columns", MEMBER_COLUMNS.len());
        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close the connection
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get database statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let member_count = self.count_members().await?;

        Ok(DatabaseStats {
            total_members: member_count,
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_members: i64,
    pub pool_size: u32,
    pub idle_connections: usize,
}
