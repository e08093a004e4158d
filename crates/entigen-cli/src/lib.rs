//! Host-side helpers for the `entigen` command line

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use entigen_codegen::EntityCodegenConfig;
use entigen_core::TypeDescriptor;
use tracing::{debug, info};

/// Load a descriptor from JSON, or YAML when the extension says so
pub fn load_descriptor(path: &Path) -> Result<TypeDescriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let descriptor: TypeDescriptor = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML descriptor {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON descriptor {}", path.display()))?
    };

    debug!(
        "loaded '{}' with {} capabilities",
        descriptor.fully_qualified_name,
        descriptor.implemented_capabilities.len()
    );
    Ok(descriptor)
}

/// Load codegen settings from a TOML file, or defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<EntityCodegenConfig> {
    let Some(path) = path else {
        return Ok(EntityCodegenConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Write `<dir>/<unit>.java`, creating `dir` as needed
///
/// Returns `None` without touching the filesystem when `source` is empty.
pub fn write_unit(dir: &Path, unit: &str, source: &str) -> Result<Option<PathBuf>> {
    if source.is_empty() {
        return Ok(None);
    }

    if Path::new(unit).file_name().and_then(|n| n.to_str()) != Some(unit) {
        bail!("Unit name '{}' is not a plain file name", unit);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(format!("{}.java", unit));
    fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Generated {}", path.display());
    Ok(Some(path))
}
