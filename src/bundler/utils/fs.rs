//! File system utilities for bundling.
//!
//! Provides the sorted tree walk that defines record order, whole-file
//! reads, and output file creation with automatic parent directories.

use crate::{
    bail,
    bundler::error::{Error, ErrorExt, Result},
};
use std::{
    fs::File,
    io::BufWriter,
    path::{Component, Path, PathBuf},
};
use walkdir::WalkDir;

/// A regular file discovered under the source root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    /// Path on disk (root joined with the relative path).
    pub path: PathBuf,
    /// Relative path with `/` separators, exactly as discovered.
    pub rel_path: String,
}

impl InputFile {
    /// Reads the whole file into memory.
    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).fs_context("reading", &self.path)
    }
}

/// Enumerates every regular file under `root` in walker order.
///
/// Entries are sorted by file name at each level and subdirectories are
/// descended where they sort, so `a/y.yaml` precedes `b/x.yaml` and `a/`
/// precedes `a.yaml`.
///
/// Symlinks to directories are never descended. A symlink to a regular file
/// is included under its own relative path; a dangling symlink is skipped
/// with a warning.
///
/// `exclude` names files to leave out (a previous bundle or manifest written
/// inside the source root). The walk completes before anything is returned, so a
/// walk error never produces a partial bundle.
///
/// # Errors
///
/// * [`Error::NotADirectory`] - `root` is missing or not a directory
/// * [`Error::Walk`] - a directory could not be read
/// * [`Error::NonUtf8Path`] - a relative path is not valid UTF-8
pub fn walk_tree(root: &Path, exclude: &[&Path]) -> Result<Vec<InputFile>> {
    match std::fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        _ => return Err(Error::NotADirectory(root.to_path_buf())),
    }

    let exclude: Vec<PathBuf> = exclude
        .iter()
        .filter_map(|p| p.canonicalize().ok())
        .collect();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink() {
            match std::fs::metadata(entry.path()) {
                Ok(target) if target.is_file() => {}
                Ok(_) => {
                    log::debug!("Skipping symlink to non-file: {}", entry.path().display());
                    continue;
                }
                Err(e) => {
                    log::warn!("Skipping dangling symlink {}: {}", entry.path().display(), e);
                    continue;
                }
            }
        } else if !file_type.is_file() {
            log::debug!("Skipping special file: {}", entry.path().display());
            continue;
        }

        if !exclude.is_empty() {
            let canonical = entry.path().canonicalize().ok();
            if canonical.is_some_and(|p| exclude.contains(&p)) {
                log::warn!("Skipping {}: it is a bundler output", entry.path().display());
                continue;
            }
        }

        let rel_path = relative_path(root, entry.path())?;
        files.push(InputFile {
            path: entry.path().to_path_buf(),
            rel_path,
        });
    }

    Ok(files)
}

/// Joins the components of `path` below `root` with `/`.
fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let Ok(rel) = path.strip_prefix(root) else {
        bail!("{} is not under {}", path.display(), root.display());
    };

    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Creates a new file at the given path, creating any parent directories as needed.
///
/// Returns a `BufWriter` for efficient writing operations.
pub fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }
    let file = File::create(path).fs_context("creating", path)?;
    Ok(BufWriter::new(file))
}
