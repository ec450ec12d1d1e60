//! Database schema and connection management

use std::path::{Path, PathBuf};

use dirs::cache_dir;
use rusqlite::Connection;

use crate::error::WageError;
use crate::Result;

/// Database connection manager for cached salary records
pub struct SalaryDatabase {
    pub(crate) conn: Connection,
}

impl SalaryDatabase {
    /// Open the database at its default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open a database at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| WageError::Cache {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("wagewatch").join("salaries.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                name TEXT PRIMARY KEY,
                club TEXT NOT NULL,
                league TEXT NOT NULL,
                weekly_salary REAL NOT NULL,
                last_fetched INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS clubs (
                name TEXT PRIMARY KEY,
                league TEXT NOT NULL,
                total_wages REAL NOT NULL,
                player_count INTEGER NOT NULL,
                last_fetched INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
