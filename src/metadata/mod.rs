//! Version lookup from a Cargo.toml manifest

use crate::error::{BundlerError, CliError, Result};
use std::path::Path;

/// Package identity extracted from Cargo.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package name from Cargo.toml
    pub name: String,

    /// Package version from Cargo.toml (e.g., "0.1.0")
    pub version: String,
}

/// Load the `[package]` name and version from a Cargo.toml
///
/// The bundle Version is declared elsewhere in the repository; this reads it
/// from the manifest that owns it instead of a compiled-in constant.
pub fn load_manifest(cargo_toml_path: &Path) -> Result<PackageMetadata> {
    let manifest = std::fs::read_to_string(cargo_toml_path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_cargo_toml".to_string(),
            reason: format!("Failed to read {}: {}", cargo_toml_path.display(), e),
        })
    })?;

    parse_manifest(&manifest)
}

fn parse_manifest(manifest: &str) -> Result<PackageMetadata> {
    let toml_value: toml::Value = toml::from_str(manifest)?;

    let package = toml_value.get("package").ok_or_else(|| {
        BundlerError::Cli(CliError::InvalidArguments {
            reason: "No [package] section in Cargo.toml".to_string(),
        })
    })?;

    let name = package
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            BundlerError::Cli(CliError::InvalidArguments {
                reason: "Missing 'name' in [package]".to_string(),
            })
        })?
        .to_string();

    // `version.workspace = true` is a table, not a string
    let version = package
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            BundlerError::Cli(CliError::InvalidArguments {
                reason: "Missing string 'version' in [package]".to_string(),
            })
        })?
        .to_string();

    Ok(PackageMetadata { name, version })
}
