use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use partscan::{SourceType, TargetType};

mod cmd;

#[derive(Parser)]
#[command(name = "partscan")]
#[command(version, about = "Barcode content interpreter for electronic-parts inventories")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// SQLite inventory database. Overrides partscan.toml and PARTSCAN_DB.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify scanned barcode text
    Scan {
        /// Scanner output; \x1d, \x1e, \x04 and \u{..} escapes are expanded
        input: String,

        /// Only try one format: internal, ipn, user-defined, vendor
        #[arg(long)]
        hint: Option<SourceType>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the inventory page a barcode leads to
    Redirect {
        /// Scanner output; escapes are expanded as for `scan`
        input: String,

        /// Only try one format: internal, ipn, user-defined, vendor
        #[arg(long)]
        hint: Option<SourceType>,
    },
    /// Generate label content for an inventory entity
    Generate {
        /// part, lot or location
        target: TargetType,

        id: i64,

        /// Generate QR content (`{base_url}/scan/...`) instead of the 1D form
        #[arg(long)]
        url: bool,
    },
    /// Manage the SQLite inventory database
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum DbCommands {
    /// Create the database and its schema
    Init,
    /// Add a part
    AddPart {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        /// Internal part number
        #[arg(long)]
        ipn: Option<String>,
        /// Manufacturer part number
        #[arg(long)]
        mpn: Option<String>,
    },
    /// Add a part lot
    AddLot {
        #[arg(long)]
        id: i64,
        /// Id of the part stored in this lot
        #[arg(long)]
        part: i64,
        /// User-assigned barcode
        #[arg(long)]
        barcode: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default partscan.toml file
    Init,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "partscan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match &cli.command {
        Commands::Scan { input, hint, json } => {
            cmd::cmd_scan(&cli, project_dir, input, *hint, *json)?
        }
        Commands::Redirect { input, hint } => {
            cmd::cmd_redirect(&cli, project_dir, input, *hint)?
        }
        Commands::Generate { target, id, url } => {
            cmd::cmd_generate(&cli, project_dir, *target, *id, *url)?
        }
        Commands::Db { command } => cmd::cmd_db(&cli, project_dir, command.clone())?,
        Commands::Config { command } => cmd::cmd_config(&cli, &project_dir, command.clone())?,
    }

    Ok(())
}
