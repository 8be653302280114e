//! TOML parameter files for the generator.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::DungeonParameters;

/// Reads parameters from `path`. Keys left out of the file keep their defaults.
pub fn load_parameters(path: &Path) -> Result<DungeonParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters file: {}", path.display()))?;
    let params: DungeonParameters = toml::from_str(&text)
        .with_context(|| format!("Failed to parse parameters file: {}", path.display()))?;
    params.validate().with_context(|| format!("Invalid parameters in {}", path.display()))?;
    Ok(params)
}

pub fn write_parameters(params: &DungeonParameters, path: &Path) -> Result<()> {
    let text = toml::to_string_pretty(params).context("Failed to serialize parameters")?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write parameters file: {}", path.display()))
}
