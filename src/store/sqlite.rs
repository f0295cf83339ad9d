use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{PartLotRef, PartLookup, PartRef};
use crate::errors::StoreError;

/// Inventory backed by a SQLite database.
///
/// The connection sits behind a mutex so one store can serve scans from
/// several threads.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a SQLite database at the given path and create the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open SQLite database at {}", path.display()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init()?;
        Ok(store)
    }

    /// Create an in-memory SQLite database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init()?;
        Ok(store)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn init(&self) -> Result<()> {
        self.conn()?
            .execute_batch(
                "
                PRAGMA foreign_keys = ON;

                CREATE TABLE IF NOT EXISTS parts (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    ipn TEXT,
                    mpn TEXT
                );

                CREATE TABLE IF NOT EXISTS part_lots (
                    id INTEGER PRIMARY KEY,
                    part_id INTEGER NOT NULL REFERENCES parts(id) ON DELETE CASCADE,
                    user_barcode TEXT
                );

                CREATE INDEX IF NOT EXISTS idx_parts_ipn ON parts(ipn);
                CREATE INDEX IF NOT EXISTS idx_parts_mpn ON parts(mpn);
                CREATE INDEX IF NOT EXISTS idx_part_lots_barcode ON part_lots(user_barcode);
                ",
            )
            .context("Failed to create inventory schema")?;
        Ok(())
    }

    // ── Writes ────────────────────────────────────────────────────────

    pub fn insert_part(&self, part: &PartRef) -> Result<()> {
        self.conn()?
            .execute(
                "INSERT INTO parts (id, name, ipn, mpn) VALUES (?1, ?2, ?3, ?4)",
                params![part.id, part.name, part.ipn, part.mpn],
            )
            .with_context(|| format!("Failed to insert part {}", part.id))?;
        Ok(())
    }

    pub fn insert_lot(&self, lot: &PartLotRef) -> Result<()> {
        self.conn()?
            .execute(
                "INSERT INTO part_lots (id, part_id, user_barcode) VALUES (?1, ?2, ?3)",
                params![lot.id, lot.part_id, lot.user_barcode],
            )
            .with_context(|| format!("Failed to insert part lot {}", lot.id))?;
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────────────

    fn query_parts(&self, column: &str, value: &str) -> Result<Vec<PartRef>, StoreError> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT id, name, ipn, mpn FROM parts WHERE {} = ?1 ORDER BY id",
            column
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![value], part_from_row)?;
        let mut parts = Vec::new();
        for row in rows {
            parts.push(row?);
        }
        Ok(parts)
    }
}

fn part_from_row(row: &Row<'_>) -> rusqlite::Result<PartRef> {
    Ok(PartRef {
        id: row.get(0)?,
        name: row.get(1)?,
        ipn: row.get(2)?,
        mpn: row.get(3)?,
    })
}

fn lot_from_row(row: &Row<'_>) -> rusqlite::Result<PartLotRef> {
    Ok(PartLotRef {
        id: row.get(0)?,
        part_id: row.get(1)?,
        user_barcode: row.get(2)?,
    })
}

impl PartLookup for SqliteStore {
    fn lots_by_user_barcode(&self, barcode: &str) -> Result<Vec<PartLotRef>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, part_id, user_barcode FROM part_lots WHERE user_barcode = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![barcode], lot_from_row)?;
        let mut lots = Vec::new();
        for row in rows {
            lots.push(row?);
        }
        Ok(lots)
    }

    fn parts_by_ipn(&self, ipn: &str) -> Result<Vec<PartRef>, StoreError> {
        self.query_parts("ipn", ipn)
    }

    fn lot_by_id(&self, id: i64) -> Result<Option<PartLotRef>, StoreError> {
        let conn = self.conn()?;
        let lot = conn
            .query_row(
                "SELECT id, part_id, user_barcode FROM part_lots WHERE id = ?1",
                params![id],
                lot_from_row,
            )
            .optional()?;
        Ok(lot)
    }

    fn parts_by_mpn(&self, mpn: &str) -> Result<Vec<PartRef>, StoreError> {
        self.query_parts("mpn", mpn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Result<SqliteStore> {
        let store = SqliteStore::open_in_memory()?;
        store.insert_part(&PartRef::new(4, "Capacitor").with_ipn("C-100N").with_mpn("GRM188"))?;
        store.insert_part(&PartRef::new(1, "Capacitor (old)").with_ipn("C-100N"))?;
        store.insert_lot(&PartLotRef::new(8, 4).with_user_barcode("DRAWER-3"))?;
        store.insert_lot(&PartLotRef::new(2, 1).with_user_barcode("DRAWER-3"))?;
        store.insert_lot(&PartLotRef::new(5, 4))?;
        Ok(store)
    }

    #[test]
    fn test_schema_is_created() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        let conn = store.conn()?;
        let table_count: i32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('parts', 'part_lots')",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(table_count, 2);
        Ok(())
    }

    #[test]
    fn test_lookups_ordered_by_id() -> Result<()> {
        let store = seeded()?;
        let lots = store.lots_by_user_barcode("DRAWER-3")?;
        assert_eq!(lots.iter().map(|l| l.id).collect::<Vec<_>>(), vec![2, 8]);
        let parts = store.parts_by_ipn("C-100N")?;
        assert_eq!(parts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4]);
        Ok(())
    }

    #[test]
    fn test_lot_by_id() -> Result<()> {
        let store = seeded()?;
        let lot = store.lot_by_id(5)?.expect("lot should exist");
        assert_eq!(lot.part_id, 4);
        assert!(lot.user_barcode.is_none());
        assert!(store.lot_by_id(99)?.is_none());
        Ok(())
    }

    #[test]
    fn test_parts_by_mpn() -> Result<()> {
        let store = seeded()?;
        assert_eq!(store.parts_by_mpn("GRM188")?[0].name, "Capacitor");
        assert!(store.parts_by_mpn("grm188")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_lot_requires_existing_part() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        assert!(store.insert_lot(&PartLotRef::new(1, 42)).is_err());
        Ok(())
    }

    #[test]
    fn test_reopen_file_database() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("parts.db");
        {
            let store = SqliteStore::open(&path)?;
            store.insert_part(&PartRef::new(1, "Diode").with_ipn("D-1N4148"))?;
        }
        let store = SqliteStore::open(&path)?;
        assert_eq!(store.parts_by_ipn("D-1N4148")?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_poisoned_lock_is_reported() -> Result<()> {
        let store = seeded()?;
        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.conn.lock().unwrap();
            panic!("panicked while holding the connection");
        }));
        assert!(poisoned.is_err());

        assert!(matches!(
            store.parts_by_ipn("C-100N"),
            Err(StoreError::LockPoisoned)
        ));
        assert!(matches!(store.lot_by_id(5), Err(StoreError::LockPoisoned)));
        assert!(store.insert_part(&PartRef::new(9, "Inductor")).is_err());
        Ok(())
    }
}
