//! Barcode classification commands (`partscan scan`, `partscan redirect`).

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

use partscan::barcode::{decode_fields, normalize};
use partscan::util::expand_escapes;
use partscan::{BarcodeScanner, Redirector, ScanResult, SourceType};

use super::super::Cli;
use super::{open_lookup, settings};

pub fn cmd_scan(
    cli: &Cli,
    project_dir: PathBuf,
    input: &str,
    hint: Option<SourceType>,
    json: bool,
) -> Result<()> {
    let settings = settings(cli, project_dir)?;
    let scanner = BarcodeScanner::new(open_lookup(&settings)?);
    let input = expand_escapes(input);

    let result = scanner
        .scan(&input, hint.or(settings.default_hint))
        .context("Could not read barcode")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize scan result")?
        );
        return Ok(());
    }

    match &result {
        ScanResult::Local(local) => {
            println!("{}", style("Inventory barcode").green().bold());
            println!("  target: {}", local.target_type);
            println!("  id:     {}", local.target_id);
            println!("  source: {}", local.source_type);
        }
        ScanResult::Vendor(vendor) => {
            println!("{}", style("Vendor barcode").cyan().bold());
            let rows = [
                ("manufacturer part number", &vendor.manufacturer_part_number),
                ("vendor part number", &vendor.vendor_part_number),
                ("manufacturer", &vendor.manufacturer),
                ("quantity", &vendor.quantity),
                ("date code", &vendor.date_code),
                ("vendor", &vendor.vendor),
            ];
            for (label, value) in rows {
                if let Some(value) = value {
                    println!("  {}: {}", label, value);
                }
            }

            if cli.verbose {
                if let Some(fields) = decode_fields(&normalize(&input)) {
                    println!();
                    println!("{}", style("All fields").dim());
                    for (meaning, value) in fields.iter() {
                        println!("  {}: {}", style(meaning).dim(), value);
                    }
                }
            }
        }
    }

    Ok(())
}

pub fn cmd_redirect(
    cli: &Cli,
    project_dir: PathBuf,
    input: &str,
    hint: Option<SourceType>,
) -> Result<()> {
    let settings = settings(cli, project_dir)?;
    let lookup = open_lookup(&settings)?;
    let input = expand_escapes(input);

    let result = BarcodeScanner::new(&lookup)
        .scan(&input, hint.or(settings.default_hint))
        .context("Could not read barcode")?;
    let path = Redirector::new(&lookup)
        .with_locale(settings.locale.clone())
        .resolve(&result)?;

    println!("{}", path);
    Ok(())
}
