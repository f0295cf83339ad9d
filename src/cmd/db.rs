//! Inventory database commands (`partscan db`).

use anyhow::{Context, Result};
use std::path::PathBuf;

use partscan::{PartLotRef, PartRef, SqliteStore};

use super::super::{Cli, DbCommands};
use super::settings;

pub fn cmd_db(cli: &Cli, project_dir: PathBuf, command: DbCommands) -> Result<()> {
    let settings = settings(cli, project_dir)?;
    if let Some(parent) = settings.database.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let store = SqliteStore::open(&settings.database)?;

    match command {
        DbCommands::Init => {
            println!("Initialized inventory at {}", settings.database.display());
        }
        DbCommands::AddPart { id, name, ipn, mpn } => {
            store.insert_part(&PartRef {
                id,
                name,
                ipn: non_blank(ipn),
                mpn: non_blank(mpn),
            })?;
            println!("Added part {}", id);
        }
        DbCommands::AddLot { id, part, barcode } => {
            store.insert_lot(&PartLotRef {
                id,
                part_id: part,
                user_barcode: non_blank(barcode),
            })?;
            println!("Added part lot {} for part {}", id, part);
        }
    }

    Ok(())
}

/// Blank identifiers are stored as NULL so no scan can ever match them.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_drops_empty_identifiers() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some("BIN-A1".into())), Some("BIN-A1".into()));
    }
}
