//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module     | Commands handled      |
//! |------------|-----------------------|
//! | `scan`     | `Scan`, `Redirect`    |
//! | `generate` | `Generate`            |
//! | `db`       | `Db`                  |
//! | `config`   | `Config`              |

pub mod config;
pub mod db;
pub mod generate;
pub mod scan;

pub use config::cmd_config;
pub use db::cmd_db;
pub use generate::cmd_generate;
pub use scan::{cmd_redirect, cmd_scan};

use anyhow::Result;
use partscan::config::Settings;
use partscan::{InMemoryStore, PartLookup, SqliteStore};

use super::Cli;

/// Resolve settings for the current invocation.
pub(crate) fn settings(cli: &Cli, project_dir: std::path::PathBuf) -> Result<Settings> {
    Settings::new(project_dir, cli.db.clone())
}

/// Open the configured inventory, or an empty one when no database exists yet.
pub(crate) fn open_lookup(settings: &Settings) -> Result<Box<dyn PartLookup>> {
    if settings.database.exists() {
        tracing::debug!(path = %settings.database.display(), "using SQLite inventory");
        Ok(Box::new(SqliteStore::open(&settings.database)?))
    } else {
        tracing::debug!(
            path = %settings.database.display(),
            "inventory database not found, lookups will find nothing"
        );
        Ok(Box::new(InMemoryStore::new()))
    }
}
