//! SQLite-based save-record storage and XP history.
//!
//! The engine itself performs no I/O; this module owns the load/save
//! lifecycle around it. A save record is stored as an opaque JSON blob
//! keyed by profile name -- no schema beyond that is required. The
//! `xp_history` table accumulates XP earned per profile per day, the data
//! feed a progress chart would render.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{CoreError, StorageError};
use crate::profile::Profile;

/// XP earned by one profile on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpEntry {
    pub day: NaiveDate,
    pub xp: u32,
}

/// SQLite database for profile storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/liferpg.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        Self::open_at(data_dir()?.join("liferpg.db"))
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS profiles (
                name       TEXT PRIMARY KEY,
                data       TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS xp_history (
                profile TEXT NOT NULL,
                day     TEXT NOT NULL,
                xp      INTEGER NOT NULL,
                PRIMARY KEY (profile, day)
            );",
        )?;
        Ok(())
    }

    // ── Profiles ─────────────────────────────────────────────────────

    /// Load a save record by profile name. `Ok(None)` means "not found",
    /// so the caller can create a default record.
    pub fn load_profile(&self, name: &str) -> Result<Option<Profile>, CoreError> {
        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM profiles WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::from)?;

        match data {
            Some(json) => {
                let profile =
                    serde_json::from_str(&json).map_err(|e| StorageError::CorruptRecord {
                        profile: name.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// Store a save record under a profile name, replacing any previous one.
    pub fn save_profile(&self, name: &str, profile: &Profile) -> Result<(), CoreError> {
        let json = serde_json::to_string(profile)?;
        self.conn
            .execute(
                "INSERT INTO profiles (name, data, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET data = ?2, updated_at = ?3",
                params![name, json, Utc::now().to_rfc3339()],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Delete a profile and its history. Returns whether a profile existed.
    pub fn delete_profile(&self, name: &str) -> Result<bool, CoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM profiles WHERE name = ?1", params![name])
            .map_err(StorageError::from)?;
        self.conn
            .execute("DELETE FROM xp_history WHERE profile = ?1", params![name])
            .map_err(StorageError::from)?;
        Ok(deleted > 0)
    }

    /// Profile names in alphabetical order.
    pub fn list_profiles(&self) -> Result<Vec<String>, CoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM profiles ORDER BY name")
            .map_err(StorageError::from)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(StorageError::from)?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row.map_err(StorageError::from)?);
        }
        Ok(names)
    }

    // ── XP history ───────────────────────────────────────────────────

    /// Add XP to a profile's total for a day. Same-day entries accumulate.
    pub fn record_xp(&self, profile: &str, day: NaiveDate, xp: u32) -> Result<(), CoreError> {
        self.conn
            .execute(
                "INSERT INTO xp_history (profile, day, xp) VALUES (?1, ?2, ?3)
                 ON CONFLICT(profile, day) DO UPDATE SET xp = xp + ?3",
                params![profile, day.to_string(), xp],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// The most recent `limit` days of XP for a profile, oldest first.
    pub fn xp_history(&self, profile: &str, limit: u32) -> Result<Vec<XpEntry>, CoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT day, xp FROM (
                     SELECT day, xp FROM xp_history
                     WHERE profile = ?1
                     ORDER BY day DESC LIMIT ?2
                 ) ORDER BY day ASC",
            )
            .map_err(StorageError::from)?;

        let rows = stmt
            .query_map(params![profile, limit], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?))
            })
            .map_err(StorageError::from)?;

        let mut entries = Vec::new();
        for row in rows {
            let (day, xp) = row.map_err(StorageError::from)?;
            let day = day
                .parse::<NaiveDate>()
                .map_err(|e| StorageError::QueryFailed(format!("bad day '{day}': {e}")))?;
            entries.push(XpEntry { day, xp });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;

    #[test]
    fn load_missing_profile_returns_none() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_profile("nobody").unwrap().is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let db = Database::open_memory().unwrap();
        let mut profile = Profile::new("Tester");
        profile.add_quest("Read", Attribute::Intellect).unwrap();
        profile.level = 3;

        db.save_profile("tester", &profile).unwrap();
        let loaded = db.load_profile("tester").unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn save_replaces_previous_record() {
        let db = Database::open_memory().unwrap();
        let mut profile = Profile::new("Tester");
        db.save_profile("tester", &profile).unwrap();

        profile.level = 5;
        db.save_profile("tester", &profile).unwrap();
        let loaded = db.load_profile("tester").unwrap().unwrap();
        assert_eq!(loaded.level, 5);
    }

    #[test]
    fn delete_profile_removes_record_and_history() {
        let db = Database::open_memory().unwrap();
        db.save_profile("tester", &Profile::default()).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        db.record_xp("tester", day, 20).unwrap();

        assert!(db.delete_profile("tester").unwrap());
        assert!(db.load_profile("tester").unwrap().is_none());
        assert!(db.xp_history("tester", 7).unwrap().is_empty());
        assert!(!db.delete_profile("tester").unwrap());
    }

    #[test]
    fn list_profiles_is_sorted() {
        let db = Database::open_memory().unwrap();
        db.save_profile("zoe", &Profile::default()).unwrap();
        db.save_profile("alice", &Profile::default()).unwrap();
        assert_eq!(db.list_profiles().unwrap(), vec!["alice", "zoe"]);
    }

    #[test]
    fn same_day_xp_accumulates() {
        let db = Database::open_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        db.record_xp("tester", day, 20).unwrap();
        db.record_xp("tester", day, 20).unwrap();

        let history = db.xp_history("tester", 7).unwrap();
        assert_eq!(history, vec![XpEntry { day, xp: 40 }]);
    }

    #[test]
    fn history_returns_recent_days_oldest_first() {
        let db = Database::open_memory().unwrap();
        for offset in 0..10 {
            let day = NaiveDate::from_ymd_opt(2026, 8, 1 + offset).unwrap();
            db.record_xp("tester", day, 10 * (offset as u32 + 1)).unwrap();
        }

        let history = db.xp_history("tester", 7).unwrap();
        assert_eq!(history.len(), 7);
        // Oldest of the window first, most recent last.
        assert_eq!(history[0].day, NaiveDate::from_ymd_opt(2026, 8, 4).unwrap());
        assert_eq!(history[6].day, NaiveDate::from_ymd_opt(2026, 8, 10).unwrap());
        assert!(history.windows(2).all(|w| w[0].day < w[1].day));
    }

    #[test]
    fn open_at_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liferpg.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.save_profile("tester", &Profile::new("Tester")).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        let loaded = db.load_profile("tester").unwrap().unwrap();
        assert_eq!(loaded.display_name, "Tester");
    }
}
