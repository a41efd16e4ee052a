//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap,
//! with validation and conversion into bundler [`Settings`].

use clap::Parser;
use std::path::PathBuf;

use crate::bundler::{OutputFormat, Settings, SettingsBuilder};
use crate::error::{CliError, Result};

/// Deployment asset bundler
#[derive(Parser, Debug)]
#[command(
    name = "asset_bundler",
    version,
    about = "Embeds a directory of deployment assets into one generated source file",
    long_about = "Walks SOURCE_ROOT in sorted depth-first order and writes OUTPUT: a generated
source file holding a Version constant plus, for every file, a Sha256_<id>
digest constant and a File_<id> constant with the file's exact bytes.

Usage:
  asset_bundler deploy pkg/bundle/deploy.go
  asset_bundler --format rust --bundle-version 5.9.0 deploy src/bundle.rs
  asset_bundler --version-from Cargo.toml --manifest bundle.json deploy bundle.go

Exit code 0 = the bundle was written completely."
)]
pub struct Args {
    /// Directory tree to bundle
    #[arg(value_name = "SOURCE_ROOT")]
    pub source_root: PathBuf,

    /// Path of the generated bundle file
    ///
    /// Parent directories are created if they don't exist.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Syntax of the generated file: go, rust
    #[arg(short, long, value_name = "FORMAT", default_value = "go")]
    pub format: String,

    /// Package name written in the Go preamble
    #[arg(short, long, value_name = "NAME", default_value = "bundle")]
    pub package: String,

    /// Version string recorded in the bundle (defaults to this tool's version)
    #[arg(long, value_name = "VERSION", conflicts_with = "version_from")]
    pub bundle_version: Option<String>,

    /// Read the Version string from the [package] section of a Cargo.toml
    #[arg(long, value_name = "CARGO_TOML")]
    pub version_from: Option<PathBuf>,

    /// Also write a JSON index of the bundled files to this path
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Log every skipped entry and intermediate step
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level selected by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.format.parse::<OutputFormat>().is_err() {
            return Err(format!(
                "Invalid format: {}. Valid formats: {}",
                self.format,
                OutputFormat::NAMES.join(", ")
            ));
        }

        if !is_ascii_identifier(&self.package) {
            return Err(format!(
                "Invalid package name: {:?}. Expected [A-Za-z_][A-Za-z0-9_]*",
                self.package
            ));
        }

        if self.bundle_version.as_deref() == Some("") {
            return Err("Bundle version cannot be empty".to_string());
        }

        Ok(())
    }

    /// Resolves the Version string: explicit flag, Cargo.toml lookup, or
    /// the version this tool was built with.
    pub fn resolve_version(&self) -> Result<String> {
        if let Some(version) = &self.bundle_version {
            return Ok(version.clone());
        }
        if let Some(cargo_toml) = &self.version_from {
            let manifest = crate::metadata::load_manifest(cargo_toml)?;
            log::debug!(
                "Using version {} of package {} from {}",
                manifest.version,
                manifest.name,
                cargo_toml.display()
            );
            return Ok(manifest.version);
        }
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    /// Builds bundler settings from validated arguments.
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        let format = self
            .format
            .parse::<OutputFormat>()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        let mut builder = SettingsBuilder::new()
            .source_root(&self.source_root)
            .output_path(&self.output)
            .version(self.resolve_version()?)
            .package_name(self.package.clone())
            .format(format);

        if let Some(manifest) = &self.manifest {
            builder = builder.manifest_path(manifest);
        }

        Ok(builder.build()?)
    }
}

fn is_ascii_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
