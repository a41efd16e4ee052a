//! Core Settings struct and implementations.

use super::OutputFormat;
use std::path::{Path, PathBuf};

/// Main settings for a bundling run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Replaces the
/// compiled-in root path and Version reference with explicit parameters.
///
/// # Examples
///
/// ```no_run
/// use asset_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> asset_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("deploy")
///     .output_path("pkg/bundle/deploy.go")
///     .version("5.9.0")
///     .build()?;
/// assert_eq!(settings.package_name(), "bundle");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory tree to bundle.
    source_root: PathBuf,

    /// Path of the generated file.
    output_path: PathBuf,

    /// Version string recorded in the preamble.
    version: String,

    /// Package name for formats that declare one (Go).
    package_name: String,

    /// Target syntax.
    format: OutputFormat,

    /// Optional JSON index written next to the bundle.
    manifest_path: Option<PathBuf>,
}

impl Settings {
    pub(super) fn new(
        source_root: PathBuf,
        output_path: PathBuf,
        version: String,
        package_name: String,
        format: OutputFormat,
        manifest_path: Option<PathBuf>,
    ) -> Self {
        Self {
            source_root,
            output_path,
            version,
            package_name,
            format,
            manifest_path,
        }
    }

    /// Returns the directory tree to bundle.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Returns the path of the generated file.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the Version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the package name used in the preamble.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the target syntax.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the JSON manifest path, if one was requested.
    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }
}
