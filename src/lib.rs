//! Deployment asset bundler library.
//!
//! This library walks a directory of deployment assets (CRDs, RBAC rules,
//! operator manifests, ...) and emits a single generated source file that
//! embeds every file as a string constant next to its SHA-256 digest:
//! - Go source (`package bundle`, raw backtick literals)
//! - Rust source (`pub const` items, raw string literals)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
