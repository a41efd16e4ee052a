//! Shared helpers for bundler integration tests.
//!
//! Decodes generated bundles back into `(constant name, bytes)` pairs by
//! applying Go and Rust string-literal rules, so tests can check that every
//! `File_<id>` reproduces its input byte for byte.

#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use assert_cmd::Command;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Command for the bundler binary.
pub fn bundler() -> Command {
    Command::cargo_bin("asset_bundler").expect("asset_bundler binary")
}

/// Writes `contents` at `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Looks up a constant by name.
pub fn constant<'a>(consts: &'a [(String, Vec<u8>)], name: &str) -> Option<&'a [u8]> {
    consts
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_slice())
}

/// Names of all `File_<id>` constants, in file order.
pub fn file_ids(consts: &[(String, Vec<u8>)]) -> Vec<String> {
    consts
        .iter()
        .filter_map(|(n, _)| n.strip_prefix("File_").map(str::to_string))
        .collect()
}

/// Parses a Go bundle into its constants.
pub fn go_constants(src: &str) -> Result<Vec<(String, Vec<u8>)>> {
    let mut rest = src;
    let mut out = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(out);
        }
        if rest.starts_with("//") || rest.starts_with("package ") {
            rest = rest.split_once('\n').map(|(_, r)| r).unwrap_or("");
            continue;
        }
        let Some(decl) = rest.strip_prefix("const ") else {
            bail!("unexpected Go text: {:?}", &rest[..rest.len().min(40)]);
        };
        let (name, expr) = decl.split_once(" = ").context("const without '='")?;
        let (value, remaining) = go_expr(expr)?;
        out.push((name.to_string(), value));
        rest = remaining;
    }
}

fn go_expr(mut s: &str) -> Result<(Vec<u8>, &str)> {
    let mut bytes = Vec::new();
    loop {
        if let Some(body) = s.strip_prefix('`') {
            let end = body.find('`').context("unterminated raw string")?;
            // Go drops carriage returns from raw strings
            bytes.extend(body[..end].bytes().filter(|&b| b != b'\r'));
            s = &body[end + 1..];
        } else if let Some(body) = s.strip_prefix('"') {
            let (value, remaining) = unescape(body, false)?;
            bytes.extend(value);
            s = remaining;
        } else {
            bail!("expected string literal, found {:?}", &s[..s.len().min(20)]);
        }
        match s.strip_prefix(" + ") {
            Some(next) => s = next,
            None => return Ok((bytes, s)),
        }
    }
}

/// Parses a Rust bundle into its constants.
pub fn rust_constants(src: &str) -> Result<Vec<(String, Vec<u8>)>> {
    let mut rest = src;
    let mut out = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(out);
        }
        if rest.starts_with("//") || rest.starts_with("#![") {
            rest = rest.split_once('\n').map(|(_, r)| r).unwrap_or("");
            continue;
        }
        let Some(decl) = rest.strip_prefix("pub const ") else {
            bail!("unexpected Rust text: {:?}", &rest[..rest.len().min(40)]);
        };
        let (name, typed) = decl.split_once(": ").context("const without type")?;
        let (_ty, expr) = typed.split_once(" = ").context("const without '='")?;
        let (value, remaining) = rust_expr(expr)?;
        let remaining = remaining.strip_prefix(';').context("missing ';'")?;
        out.push((name.to_string(), value));
        rest = remaining;
    }
}

fn rust_expr(s: &str) -> Result<(Vec<u8>, &str)> {
    if let Some(body) = s.strip_prefix("b\"") {
        return unescape(body, true);
    }
    if let Some(body) = s.strip_prefix('"') {
        return unescape(body, true);
    }
    let Some(body) = s.strip_prefix('r') else {
        bail!("expected string literal, found {:?}", &s[..s.len().min(20)]);
    };
    let hashes = body.bytes().take_while(|&b| b == b'#').count();
    let fence = "#".repeat(hashes);
    let body = body[hashes..].strip_prefix('"').context("raw string without quote")?;
    let close = format!("\"{fence}");
    let end = body.find(&close).context("unterminated raw string")?;
    let value = body[..end].as_bytes().to_vec();
    let rest = body[end + close.len()..]
        .strip_prefix(".as_bytes()")
        .context("raw string without .as_bytes()")?;
    Ok((value, rest))
}

/// Decodes an escaped string body up to its closing quote.
///
/// `rust` enables `\0`, `\'` and `\u{...}`; otherwise Go's `\uXXXX` applies.
fn unescape(body: &str, rust: bool) -> Result<(Vec<u8>, &str)> {
    let raw = body.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            b'"' => return Ok((out, &body[i + 1..])),
            b'\\' => {
                let esc = *raw.get(i + 1).context("dangling backslash")?;
                i += 2;
                match esc {
                    b'n' => out.push(b'\n'),
                    b'r' => out.push(b'\r'),
                    b't' => out.push(b'\t'),
                    b'\\' => out.push(b'\\'),
                    b'"' => out.push(b'"'),
                    b'\'' if rust => out.push(b'\''),
                    b'0' if rust => out.push(0),
                    b'x' => {
                        out.push(u8::from_str_radix(&body[i..i + 2], 16)?);
                        i += 2;
                    }
                    b'u' if rust => {
                        let inner = body[i..].strip_prefix('{').context("bad \\u escape")?;
                        let end = inner.find('}').context("bad \\u escape")?;
                        let c = char::from_u32(u32::from_str_radix(&inner[..end], 16)?)
                            .context("bad code point")?;
                        out.extend(c.to_string().bytes());
                        i += end + 2;
                    }
                    b'u' => {
                        let c = char::from_u32(u32::from_str_radix(&body[i..i + 4], 16)?)
                            .context("bad code point")?;
                        out.extend(c.to_string().bytes());
                        i += 4;
                    }
                    other => bail!("unknown escape \\{}", other as char),
                }
            }
            b'\n' if !rust => bail!("newline in interpreted Go string"),
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    bail!("unterminated string literal")
}
