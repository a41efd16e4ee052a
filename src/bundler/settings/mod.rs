//! Configuration structures for bundling operations.
//!
//! All run parameters (source root, output path, Version, target syntax)
//! are collected in one immutable [`Settings`] record, built through
//! [`SettingsBuilder`].

mod builder;
mod core;
mod format;

// Re-export all public types
pub use self::core::Settings;
pub use builder::SettingsBuilder;
pub use format::OutputFormat;
