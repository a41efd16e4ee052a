//! Bundle serialization.
//!
//! The [`Emitter`] writes a preamble (package line and `Version`) and then,
//! per record in walker order, a `Sha256_<id>` digest constant followed by
//! a `File_<id>` constant holding the file's exact bytes. Output contains
//! no timestamps, so identical input yields byte-identical bundles.

pub mod go;
pub mod rust;

use crate::bundler::{OutputFormat, Result, error::ErrorExt, identifier::NormalizedIdentifier};
use std::io::Write;
use std::path::PathBuf;

/// Header line marking the bundle as generated.
pub const GENERATED_HEADER: &str = "// Code generated by asset_bundler. DO NOT EDIT.";

/// One file's contribution to the bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleRecord {
    /// Relative path the identifier was derived from.
    pub rel_path: String,
    pub identifier: NormalizedIdentifier,
    /// Lowercase hex SHA-256 of `contents`.
    pub digest: String,
    pub contents: Vec<u8>,
}

/// Streams a bundle to a writer in the selected [`OutputFormat`].
pub struct Emitter<W: Write> {
    out: W,
    format: OutputFormat,
    /// Destination path, for error messages.
    path: PathBuf,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, format: OutputFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            format,
            path: path.into(),
        }
    }

    /// Writes the package declaration and the `Version` constant.
    pub fn preamble(&mut self, package: &str, version: &str) -> Result<()> {
        let written = match self.format {
            OutputFormat::Go => go::write_preamble(&mut self.out, package, version),
            OutputFormat::Rust => rust::write_preamble(&mut self.out, version),
        };
        written.fs_context("writing bundle preamble to", &self.path)
    }

    /// Writes the digest and contents constants of one record.
    pub fn record(&mut self, record: &BundleRecord) -> Result<()> {
        let written = match self.format {
            OutputFormat::Go => go::write_record(&mut self.out, record),
            OutputFormat::Rust => rust::write_record(&mut self.out, record),
        };
        written.fs_context("writing bundle record to", &self.path)?;

        log::info!(
            "  + {} ({} bytes) sha256:{}",
            record.identifier,
            record.contents.len(),
            record.digest
        );
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().fs_context("flushing bundle", &self.path)?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{digest_bytes, normalize};

    fn record(rel_path: &str, contents: &[u8]) -> BundleRecord {
        BundleRecord {
            rel_path: rel_path.to_string(),
            identifier: normalize(rel_path),
            digest: digest_bytes(contents),
            contents: contents.to_vec(),
        }
    }

    fn emit(format: OutputFormat, records: &[BundleRecord]) -> String {
        let mut emitter = Emitter::new(Vec::new(), format, "bundle.out");
        emitter.preamble("bundle", "5.9.0").unwrap();
        for r in records {
            emitter.record(r).unwrap();
        }
        String::from_utf8(emitter.finish().unwrap()).unwrap()
    }

    #[test]
    fn go_bundle_layout() {
        let out = emit(OutputFormat::Go, &[record("a/b.yaml", b"hello\n")]);
        assert_eq!(
            out,
            "// Code generated by asset_bundler. DO NOT EDIT.\n\
             \n\
             package bundle\n\
             \n\
             const Version = \"5.9.0\"\n\
             \n\
             const Sha256_a_b_yaml = \"5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03\"\n\
             \n\
             const File_a_b_yaml = `hello\n`\n\
             \n"
        );
    }

    #[test]
    fn rust_bundle_layout() {
        let out = emit(OutputFormat::Rust, &[record("a/b.yaml", b"hello\n")]);
        assert_eq!(
            out,
            "// Code generated by asset_bundler. DO NOT EDIT.\n\
             #![allow(non_upper_case_globals)]\n\
             \n\
             pub const Version: &str = \"5.9.0\";\n\
             \n\
             pub const Sha256_a_b_yaml: &str = \"5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03\";\n\
             \n\
             pub const File_a_b_yaml: &[u8] = r#\"hello\n\"#.as_bytes();\n\
             \n"
        );
    }

    #[test]
    fn records_keep_emission_order() {
        let out = emit(
            OutputFormat::Go,
            &[record("b/x.yaml", b"x"), record("a/y.yaml", b"y")],
        );
        let b = out.find("File_b_x_yaml").unwrap();
        let a = out.find("File_a_y_yaml").unwrap();
        assert!(b < a);
    }

    #[test]
    fn write_failure_names_the_output() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut emitter = Emitter::new(Broken, OutputFormat::Go, "out/bundle.go");
        let err = emitter.preamble("bundle", "1.0.0").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("out/bundle.go"), "{msg}");
        assert!(msg.contains("disk full"), "{msg}");
    }
}
