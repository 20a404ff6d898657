use std::path::Path;

use anyhow::{Context, Result};
use apidir_scanner::{ScanOptions, scan_endpoints};

pub(crate) fn run(dir: &Path, extensions: Vec<String>) -> Result<()> {
    let options = ScanOptions { extensions, ..ScanOptions::default() };
    let document = scan_endpoints(dir, &options)
        .with_context(|| format!("scanning {}", dir.display()))?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
