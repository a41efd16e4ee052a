//! JSON index of a written bundle.
//!
//! Lists every record in walker order so build tooling can inspect a bundle
//! without parsing generated source.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    utils::fs::create_file,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// One bundled file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Relative path under the source root.
    pub path: String,
    pub identifier: String,
    pub size: u64,
    pub sha256: String,
}

/// Top-level manifest document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    pub version: String,
    pub format: String,
    pub files: Vec<ManifestEntry>,
}

impl BundleManifest {
    /// Writes the manifest as pretty-printed JSON with a trailing newline.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = create_file(path)?;
        serde_json::to_writer_pretty(&mut out, self).map_err(|source| Error::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        out.write_all(b"\n").fs_context("writing manifest", path)?;
        out.flush().fs_context("flushing manifest", path)?;
        Ok(())
    }
}
