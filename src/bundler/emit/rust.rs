//! Rust source syntax.
//!
//! Valid UTF-8 contents go into a raw string literal whose `#` count is one
//! more than the longest `"#...` run inside the contents, so the closing
//! delimiter never appears early. Contents with invalid UTF-8, a carriage
//! return (rejected or normalized in raw strings) or a bidi control code
//! point (denied by `text_direction_codepoint_in_literal`) fall back to an
//! escaped byte string.

use super::{BundleRecord, GENERATED_HEADER};
use std::io::{self, Write};

/// Most `#` marks rustc accepts on a raw string.
const MAX_RAW_HASHES: usize = 255;

pub(super) fn write_preamble(out: &mut impl Write, version: &str) -> io::Result<()> {
    write!(
        out,
        "{GENERATED_HEADER}\n#![allow(non_upper_case_globals)]\n\npub const Version: &str = {version:?};\n\n"
    )
}

pub(super) fn write_record(out: &mut impl Write, record: &BundleRecord) -> io::Result<()> {
    write!(
        out,
        "pub const {}: &str = \"{}\";\n\npub const {}: &[u8] = {};\n\n",
        record.identifier.digest_const(),
        record.digest,
        record.identifier.file_const(),
        literal(&record.contents)
    )
}

/// Rust expression of type `&[u8]` whose value is exactly `bytes`.
pub fn literal(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        if !text.contains('\r') && !text.contains(is_bidi_control) {
            let hashes = raw_hashes(text);
            if hashes <= MAX_RAW_HASHES {
                let fence = "#".repeat(hashes);
                return format!("r{fence}\"{text}\"{fence}.as_bytes()");
            }
        }
    }
    byte_string(bytes)
}

/// Code points rustc refuses to see inside literals.
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// Hash count needed so `"` followed by that many `#` never occurs in `text`.
fn raw_hashes(text: &str) -> usize {
    let mut longest = 0;
    for (i, _) in text.match_indices('"') {
        let run = text[i + 1..].bytes().take_while(|&b| b == b'#').count();
        longest = longest.max(run);
    }
    longest + 1
}

fn byte_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b\"");
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push('\n'),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push('"');
    out
}
