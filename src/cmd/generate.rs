//! Label content generation (`partscan generate`).

use anyhow::Result;
use std::path::PathBuf;

use partscan::{BarcodeGenerator, TargetType};

use super::super::Cli;
use super::settings;

pub fn cmd_generate(
    cli: &Cli,
    project_dir: PathBuf,
    target: TargetType,
    id: i64,
    url: bool,
) -> Result<()> {
    let content = if url {
        let settings = settings(cli, project_dir)?;
        BarcodeGenerator::with_base_url(settings.base_url).content_url(target, id)?
    } else {
        BarcodeGenerator::new().content_1d(target, id)?
    };

    println!("{}", content);
    Ok(())
}
