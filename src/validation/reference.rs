use std::path::Path;

use rusqlite::{params, Connection};

use crate::models::DocumentKind;
use crate::utils::DocError;
use crate::validation::patterns;

/// Default location of the reference database file.
pub const DEFAULT_DB_PATH: &str = "reference.db";

const SEED_AADHAARS: &[&str] = &["570453971532", "809471964847", "541309514471"];
const SEED_DL_NUMBERS: &[&str] = &["CG10 20220007048", "GJ15 20230009655"];

/// Store of known-valid identifiers, one table per document kind.
///
/// Lookups compare normalized forms on both sides, so separator formatting
/// in stored records never affects the result.
pub struct ReferenceStore {
    conn: Connection,
}

impl ReferenceStore {
    /// Opens (creating if necessary) the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocError> {
        let conn = Connection::open(path)?;
        let store = ReferenceStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens a transient in-memory store.
    pub fn open_in_memory() -> Result<Self, DocError> {
        let conn = Connection::open_in_memory()?;
        let store = ReferenceStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), DocError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS aadhaars (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 aadhaar TEXT NOT NULL UNIQUE
             );
             CREATE TABLE IF NOT EXISTS dl_records (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 dl_number TEXT NOT NULL UNIQUE
             );",
        )?;
        Ok(())
    }

    /// Seeds the demo identifiers. Reseeding is a no-op thanks to
    /// INSERT OR IGNORE.
    pub fn seed_defaults(&self) -> Result<(), DocError> {
        for num in SEED_AADHAARS {
            self.insert(DocumentKind::Aadhaar, num)?;
        }
        for num in SEED_DL_NUMBERS {
            self.insert(DocumentKind::DrivingLicence, num)?;
        }
        Ok(())
    }

    pub fn insert(&self, kind: DocumentKind, identifier: &str) -> Result<(), DocError> {
        let (table, column) = Self::table_for(kind);
        let sql = format!("INSERT OR IGNORE INTO {table} ({column}) VALUES (?1)");
        self.conn.execute(&sql, params![identifier])?;
        Ok(())
    }

    /// True when the normalized identifier equals a normalized stored record
    /// exactly.
    pub fn contains(&self, kind: DocumentKind, identifier: &str) -> Result<bool, DocError> {
        let (table, column) = Self::table_for(kind);
        let sql = format!("SELECT {column} FROM {table}");
        let mut stmt = self.conn.prepare(&sql)?;
        let needle = patterns::normalize(kind, identifier);
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for stored in rows {
            if patterns::normalize(kind, &stored?) == needle {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn table_for(kind: DocumentKind) -> (&'static str, &'static str) {
        match kind {
            DocumentKind::Aadhaar => ("aadhaars", "aadhaar"),
            DocumentKind::DrivingLicence => ("dl_records", "dl_number"),
        }
    }
}
