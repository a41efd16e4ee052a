//! Builder for constructing Settings.

use super::{OutputFormat, Settings};
use std::path::{Path, PathBuf};

/// Package name used when none is given.
pub const DEFAULT_PACKAGE_NAME: &str = "bundle";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use asset_bundler::bundler::{OutputFormat, SettingsBuilder};
///
/// # fn example() -> asset_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("deploy")
///     .output_path("src/bundle.rs")
///     .version("5.9.0")
///     .format(OutputFormat::Rust)
///     .manifest_path("target/bundle.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_root: Option<PathBuf>,
    output_path: Option<PathBuf>,
    version: Option<String>,
    package_name: Option<String>,
    format: OutputFormat,
    manifest_path: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory tree to bundle.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the path of the generated file.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Version string.
    ///
    /// Default: the version of this crate
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the package name written in the preamble.
    ///
    /// Default: `bundle`
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Sets the target syntax.
    ///
    /// Default: [`OutputFormat::Go`]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Requests a JSON manifest at the given path.
    pub fn manifest_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `source_root`
    /// - `output_path`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.source_root.context("source_root is required")?,
            self.output_path.context("output_path is required")?,
            self.version.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            self.package_name.unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()),
            self.format,
            self.manifest_path,
        ))
    }
}
