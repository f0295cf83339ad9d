//! Configuration view and validation commands (`partscan config`).

use anyhow::Result;
use console::style;

use partscan::config::{CONFIG_DIR, PartscanToml, Settings, config_path};

use super::super::{Cli, ConfigCommands};

pub fn cmd_config(
    cli: &Cli,
    project_dir: &std::path::Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let config_dir = project_dir.join(CONFIG_DIR);
    let config_path = config_path(project_dir);

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("{}", style("Partscan Configuration").bold());
            println!("======================");
            println!();

            let toml = if config_path.exists() {
                println!("Config file: {}", config_path.display());
                PartscanToml::load(&config_path)?
            } else {
                println!("No partscan.toml found at {}", config_path.display());
                println!("Using default configuration.");
                PartscanToml::default()
            };
            println!();

            println!("[scanner]");
            match toml.scanner.default_hint {
                Some(hint) => println!("  default_hint = \"{}\"", hint),
                None => println!("  default_hint = (none, all formats)"),
            }
            println!();
            println!("[generator]");
            println!("  base_url = \"{}\"", toml.generator.base_url);
            println!();
            println!("[redirect]");
            if let Some(locale) = &toml.redirect.locale {
                println!("  locale = \"{}\"", locale);
            }
            println!();
            println!("[store]");
            println!("  database = \"{}\"", toml.store.database.display());
            println!();

            println!("Effective values (with env/CLI overrides):");
            let settings = Settings::new(project_dir.to_path_buf(), cli.db.clone())?;
            println!("  base_url = \"{}\"", settings.base_url);
            println!(
                "  locale = \"{}\"",
                settings.locale.as_deref().unwrap_or("")
            );
            println!("  database = \"{}\"", settings.database.display());
            println!();

            if !config_path.exists() {
                println!("Run 'partscan config init' to create a partscan.toml file.");
                println!();
            }
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !config_path.exists() {
                println!("No partscan.toml found. Using defaults (valid).");
                return Ok(());
            }

            let toml = PartscanToml::load(&config_path)?;
            let warnings = toml.validate();

            if warnings.is_empty() {
                println!("{}", style("Configuration is valid.").green());
            } else {
                println!("{}", style("Configuration warnings:").yellow());
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if config_path.exists() {
                println!("partscan.toml already exists at {}", config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
            }

            PartscanToml::default().save(&config_path)?;

            println!("Created partscan.toml at {}", config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [scanner] default_hint");
            println!("  - [generator] base_url for QR labels");
            println!("  - [redirect] locale and [store] database");
            println!();
        }
    }

    Ok(())
}
