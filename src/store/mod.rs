//! SQLite-backed key-value store for named collections
//!
//! One table maps a collection key to its JSON-serialized value. The whole
//! collection is rewritten on every save, so a single-threaded caller never
//! observes a partial update. Multiple writers are not supported: the last
//! writer wins.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::config::PodiumPaths;
use crate::models::CountryRecord;

/// Collection key for the country registry
pub const COUNTRIES_KEY: &str = "countries";

/// Key-value collection store
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing store
    pub fn open(paths: &PodiumPaths) -> Result<Self> {
        let conn = Connection::open(&paths.db_file).context("Failed to open podium database")?;
        Ok(Self { conn })
    }

    /// Initialize a new store with schema
    pub fn init(paths: &PodiumPaths) -> Result<Self> {
        let conn = Connection::open(&paths.db_file).context("Failed to create podium database")?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS collections (
                key    TEXT PRIMARY KEY,
                value  TEXT NOT NULL
            )
            "#,
            [],
        )
        .context("Failed to create collections table")?;

        Ok(Self { conn })
    }

    /// Load the collection stored under `key`
    ///
    /// An absent key or unparseable stored value degrades to an empty
    /// collection rather than failing hard.
    pub fn load(&self, key: &str) -> Result<Vec<CountryRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM collections WHERE key = ?1")?;

        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

        match result {
            Ok(value) => Ok(serde_json::from_str(&value).unwrap_or_default()),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Vec::new()),
            Err(e) => Err(e).context("Failed to load collection"),
        }
    }

    /// Overwrite the collection stored under `key`
    ///
    /// Single synchronous write; a failure propagates to the caller and must
    /// not be swallowed.
    pub fn save(&self, key: &str, records: &[CountryRecord]) -> Result<()> {
        let value = serde_json::to_string(records).context("Failed to serialize collection")?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO collections (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .context("Failed to save collection")?;

        Ok(())
    }

    /// Remove the collection stored under `key`
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM collections WHERE key = ?1", params![key])
            .context("Failed to remove collection")?;
        Ok(())
    }
}
