//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! pipeline stages in order:
//!
//! 1. Walks the source root ([`walk_tree`](crate::bundler::walk_tree))
//! 2. Derives identifiers and rejects collisions
//! 3. Reads and digests each file ([`checksum`])
//! 4. Emits records ([`Emitter`](crate::bundler::Emitter))
//! 5. Optionally writes the JSON manifest
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 content digests
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations

mod checksum;
mod orchestrator;

pub use checksum::digest_bytes;
pub use orchestrator::{BundleSummary, Bundler};
