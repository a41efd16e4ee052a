//! Shared helpers for the bundling pipeline.

pub mod fs;
