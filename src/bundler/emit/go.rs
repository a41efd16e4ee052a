//! Go source syntax.
//!
//! File contents go into backtick raw literals. A raw literal cannot hold a
//! backtick, silently drops carriage returns, and must be valid UTF-8 with
//! no NUL or BOM, so those bytes are spliced out into interpreted `"..."`
//! segments joined with ` + `:
//!
//! ```text
//! const File_x = `before ` + "`" + ` after`
//! ```

use super::{BundleRecord, GENERATED_HEADER};
use std::io::{self, Write};

pub(super) fn write_preamble(out: &mut impl Write, package: &str, version: &str) -> io::Result<()> {
    write!(
        out,
        "{GENERATED_HEADER}\n\npackage {package}\n\nconst Version = {}\n\n",
        quote(version)
    )
}

pub(super) fn write_record(out: &mut impl Write, record: &BundleRecord) -> io::Result<()> {
    write!(
        out,
        "const {} = \"{}\"\n\nconst {} = {}\n\n",
        record.identifier.digest_const(),
        record.digest,
        record.identifier.file_const(),
        literal(&record.contents)
    )
}

enum Segment {
    Raw(String),
    Quoted(String),
}

/// Go expression whose value is exactly `bytes`.
pub fn literal(bytes: &[u8]) -> String {
    let mut segments: Vec<Segment> = Vec::new();

    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            if raw_safe(c) {
                match segments.last_mut() {
                    Some(Segment::Raw(s)) => s.push(c),
                    _ => segments.push(Segment::Raw(c.to_string())),
                }
            } else {
                push_quoted(&mut segments, &escape_char(c));
            }
        }
        for b in chunk.invalid() {
            push_quoted(&mut segments, &format!("\\x{b:02x}"));
        }
    }

    if segments.is_empty() {
        return "``".to_string();
    }

    segments
        .iter()
        .map(|segment| match segment {
            Segment::Raw(s) => format!("`{s}`"),
            Segment::Quoted(s) => format!("\"{s}\""),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn push_quoted(segments: &mut Vec<Segment>, escaped: &str) {
    match segments.last_mut() {
        Some(Segment::Quoted(s)) => s.push_str(escaped),
        _ => segments.push(Segment::Quoted(escaped.to_string())),
    }
}

fn raw_safe(c: char) -> bool {
    !matches!(c, '`' | '\r' | '\0' | '\u{feff}')
}

/// Interpreted string literal for `s`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        out.push_str(&escape_char(c));
    }
    out.push('"');
    out
}

fn escape_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{feff}' => "\\ufeff".to_string(),
        c if (c as u32) < 0x20 || c == '\u{7f}' => format!("\\x{:02x}", c as u32),
        c => c.to_string(),
    }
}
