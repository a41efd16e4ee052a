//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that turns a source
//! tree into one generated bundle file.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::bundler::{
    BundleManifest, BundleRecord, Emitter, Error, InputFile, ManifestEntry, Result, Settings,
    identifier::{NormalizedIdentifier, normalize},
    utils::fs::{create_file, walk_tree},
};

use super::checksum::digest_bytes;

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleSummary {
    pub output_path: PathBuf,
    pub version: String,
    /// Records in emission order.
    pub records: Vec<ManifestEntry>,
    pub total_bytes: u64,
}

/// Main bundler orchestrator.
///
/// Single-threaded and strictly sequential: one file is read, digested
/// and emitted at a time. Any error aborts the run.
///
/// # Examples
///
/// ```no_run
/// use asset_bundler::bundler::{Bundler, Settings};
///
/// # fn example(settings: Settings) -> asset_bundler::bundler::Result<()> {
/// let summary = Bundler::new(settings).bundle()?;
/// println!("Bundled {} files", summary.records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Walks the source root and writes the bundle.
    ///
    /// The whole tree is walked and every identifier checked before the
    /// output is created, so walk errors and identifier collisions never
    /// leave a partial bundle behind. Read and write errors after that
    /// point abort the run with the output incomplete.
    ///
    /// # Errors
    ///
    /// * [`Error::NotADirectory`] / [`Error::Walk`] - the tree cannot be enumerated
    /// * [`Error::IdentifierCollision`] - two paths normalize to one identifier
    /// * [`Error::Fs`] - a file cannot be read or the output cannot be written
    pub fn bundle(&self) -> Result<BundleSummary> {
        let settings = &self.settings;
        log::info!(
            "Bundling {} into {} (version {}, {} syntax)",
            settings.source_root().display(),
            settings.output_path().display(),
            settings.version(),
            settings.format()
        );

        let mut exclude = vec![settings.output_path()];
        exclude.extend(settings.manifest_path());
        let files = walk_tree(settings.source_root(), &exclude)?;
        log::debug!("Found {} files", files.len());
        let named = assign_identifiers(files)?;

        let out = create_file(settings.output_path())?;
        let mut emitter = Emitter::new(out, settings.format(), settings.output_path());
        emitter.preamble(settings.package_name(), settings.version())?;

        let mut records = Vec::with_capacity(named.len());
        let mut total_bytes = 0u64;

        for (file, identifier) in named {
            let contents = file.read()?;
            let record = BundleRecord {
                digest: digest_bytes(&contents),
                rel_path: file.rel_path,
                identifier,
                contents,
            };
            emitter.record(&record)?;

            let size = record.contents.len() as u64;
            total_bytes += size;
            records.push(ManifestEntry {
                path: record.rel_path,
                identifier: record.identifier.to_string(),
                size,
                sha256: record.digest,
            });
        }

        emitter.finish()?;

        if let Some(manifest_path) = settings.manifest_path() {
            let manifest = BundleManifest {
                version: settings.version().to_string(),
                format: settings.format().to_string(),
                files: records.clone(),
            };
            manifest.write(manifest_path)?;
            log::debug!("Wrote manifest {}", manifest_path.display());
        }

        log::info!(
            "✓ Bundled {} files ({} bytes) into {}",
            records.len(),
            total_bytes,
            settings.output_path().display()
        );

        Ok(BundleSummary {
            output_path: settings.output_path().to_path_buf(),
            version: settings.version().to_string(),
            records,
            total_bytes,
        })
    }
}

/// Pairs each file with its identifier, failing on the first collision.
fn assign_identifiers(files: Vec<InputFile>) -> Result<Vec<(InputFile, NormalizedIdentifier)>> {
    let mut seen: HashMap<NormalizedIdentifier, String> = HashMap::with_capacity(files.len());
    let mut named = Vec::with_capacity(files.len());

    for file in files {
        let identifier = normalize(&file.rel_path);

        if let Some(first) = seen.get(&identifier) {
            return Err(Error::IdentifierCollision {
                identifier: identifier.to_string(),
                first: first.clone(),
                second: file.rel_path,
            });
        }
        if !identifier.is_plain() {
            log::warn!(
                "Identifier {:?} (from {}) is not a plain ASCII name; the generated source may not compile",
                identifier.as_str(),
                file.rel_path
            );
        }

        seen.insert(identifier.clone(), file.rel_path.clone());
        named.push((file, identifier));
    }

    Ok(named)
}
