//! Asset bundling pipeline.
//!
//! Walks a source tree, digests and names every file, and emits one
//! generated source file:
//!
//! ```text
//! root ─► walk ─► read + sha256 ─► normalize ─► emit ─► bundle file
//! ```
//!
//! # Example
//!
//! ```no_run
//! use asset_bundler::bundler::{Bundler, OutputFormat, SettingsBuilder};
//!
//! # fn example() -> asset_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .source_root("deploy")
//!     .output_path("pkg/bundle/deploy.go")
//!     .version("5.9.0")
//!     .format(OutputFormat::Go)
//!     .build()?;
//!
//! let summary = Bundler::new(settings).bundle()?;
//! for record in &summary.records {
//!     println!("{} {}", record.identifier, record.sha256);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod emit;
pub mod error;
pub mod identifier;
mod manifest;
mod settings;
pub mod utils;

pub use builder::{Bundler, BundleSummary, digest_bytes};
pub use emit::{BundleRecord, Emitter};
pub use error::{Error, Result};
pub use identifier::{NormalizedIdentifier, normalize};
pub use manifest::{BundleManifest, ManifestEntry};
pub use settings::{OutputFormat, Settings, SettingsBuilder};
pub use utils::fs::{InputFile, walk_tree};
