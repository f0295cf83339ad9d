//! Configuration for partscan.
//!
//! Settings are read from `.partscan/partscan.toml` under the project
//! directory, then overridden by environment variables, then by CLI flags.
//!
//! # Configuration File Format
//!
//! ```toml
//! [scanner]
//! default_hint = "internal"
//!
//! [generator]
//! base_url = "https://parts.example.com"
//!
//! [redirect]
//! locale = "en"
//!
//! [store]
//! database = ".partscan/parts.db"
//! ```
//!
//! | Variable            | Overrides             |
//! |---------------------|-----------------------|
//! | `PARTSCAN_BASE_URL` | `generator.base_url`  |
//! | `PARTSCAN_DB`       | `store.database`      |
//! | `PARTSCAN_LOCALE`   | `redirect.locale`     |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::barcode::SourceType;

pub const CONFIG_DIR: &str = ".partscan";
pub const CONFIG_FILE: &str = "partscan.toml";

pub const ENV_BASE_URL: &str = "PARTSCAN_BASE_URL";
pub const ENV_DATABASE: &str = "PARTSCAN_DB";
pub const ENV_LOCALE: &str = "PARTSCAN_LOCALE";

/// Scanner section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerSection {
    /// Restrict scans to one format unless `--hint` says otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hint: Option<SourceType>,
}

/// Label generation section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Base URL for QR label content
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Redirect section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectSection {
    /// Locale prefix for page paths (e.g. "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Inventory store section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// SQLite database, relative to the project directory
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_database() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join("parts.db")
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

/// Contents of `partscan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartscanToml {
    #[serde(default)]
    pub scanner: ScannerSection,
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub redirect: RedirectSection,
    #[serde(default)]
    pub store: StoreSection,
}

impl PartscanToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse partscan.toml")
    }

    /// Load configuration from `<project_dir>/.partscan/partscan.toml`, or defaults.
    pub fn load_or_default(project_dir: &Path) -> Result<Self> {
        let config_path = config_path(project_dir);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize partscan.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Check the configuration and return human-readable warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let base_url = self.generator.base_url.trim();
        if base_url.is_empty() {
            warnings.push("generator.base_url is empty; URL labels cannot be generated".into());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            warnings.push(format!(
                "generator.base_url '{}' does not start with http:// or https://; \
                 generated URL labels will not scan back",
                base_url
            ));
        }

        if let Some(locale) = &self.redirect.locale {
            if locale.trim().is_empty() {
                warnings.push("redirect.locale is empty and will be ignored".into());
            } else if locale.contains('/') {
                warnings.push(format!("redirect.locale '{}' must not contain '/'", locale));
            }
        }

        if self.scanner.default_hint == Some(SourceType::Vendor) {
            warnings.push(
                "scanner.default_hint = \"vendor\" rejects every inventory label".into(),
            );
        }

        warnings
    }
}

/// Path of the configuration file for a project.
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Effective settings after layering file, environment and CLI values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_dir: PathBuf,
    pub default_hint: Option<SourceType>,
    pub base_url: String,
    pub locale: Option<String>,
    pub database: PathBuf,
}

impl Settings {
    /// Resolve settings for a project using the process environment.
    pub fn new(project_dir: PathBuf, database: Option<PathBuf>) -> Result<Self> {
        let toml = PartscanToml::load_or_default(&project_dir)?;
        Ok(Self::resolve(project_dir, toml, database, |key| {
            std::env::var(key).ok()
        }))
    }

    /// Layer `toml`, then `env`, then the CLI `database` flag.
    pub fn resolve(
        project_dir: PathBuf,
        toml: PartscanToml,
        database: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let base_url = env(ENV_BASE_URL).unwrap_or(toml.generator.base_url);
        let locale = env(ENV_LOCALE).or(toml.redirect.locale);
        let database = database
            .or_else(|| env(ENV_DATABASE).map(PathBuf::from))
            .unwrap_or(toml.store.database);
        let database = if database.is_absolute() {
            database
        } else {
            project_dir.join(database)
        };

        Self {
            project_dir,
            default_hint: toml.scanner.default_hint,
            base_url,
            locale,
            database,
        }
    }
}
