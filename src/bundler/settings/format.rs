//! Target syntax of the generated bundle.

use std::fmt;
use std::str::FromStr;

/// Source language the bundle is emitted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Go source: `package <name>` and backtick raw literals.
    #[default]
    Go,
    /// Rust source: `pub const` items and `r#"..."#` raw literals.
    Rust,
}

impl OutputFormat {
    /// Accepted names, in help-text order.
    pub const NAMES: [&'static str; 2] = ["go", "rust"];

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Go => "go",
            OutputFormat::Rust => "rust",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go" => Ok(OutputFormat::Go),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            other => Err(format!(
                "unknown output format {other:?} (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}
