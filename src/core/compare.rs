//! # Output Comparison / 输出比较
//!
//! Normalization rules:
//! - candidate output: trimmed as one block
//! - expected output: split into lines, each line trimmed, rejoined with `\n`
//!
//! Both sides stay raw bytes. Nothing is decoded, so outputs that differ in
//! any byte never compare equal.
//!
//! The two rules differ on purpose. An expected file ending in blank lines,
//! or with blank lines at its start, keeps them after normalization while the
//! candidate's are trimmed away, so such files never match.
//!
//! 候选输出整体去除首尾空白；期望输出逐行去除空白后以 `\n` 重新连接。
//! 两侧均按原始字节比较，不做任何解码。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::Verdict;

/// Strips leading and trailing whitespace. Valid UTF-8 is trimmed of Unicode
/// whitespace, anything else of ASCII whitespace only.
fn trim_bytes(bytes: &[u8]) -> &[u8] {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => bytes.trim_ascii(),
    }
}

/// Normalizes captured program output: the whole block is trimmed.
pub fn normalize_candidate(stdout: &[u8]) -> &[u8] {
    trim_bytes(stdout)
}

/// Normalizes the contents of an expected-output file: each line is trimmed.
///
/// Lines end at `\n`. A final line terminator does not start an extra empty
/// line, and a `\r` before it is removed with the rest of the whitespace.
pub fn normalize_expected(contents: &[u8]) -> Vec<u8> {
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    body.split(|&byte| byte == b'\n')
        .map(trim_bytes)
        .collect::<Vec<_>>()
        .join(&b'\n')
}

/// Compares captured stdout with the contents of the expected-output file.
pub fn compare(stdout: &[u8], expected: &[u8]) -> Verdict {
    if normalize_candidate(stdout) == normalize_expected(expected).as_slice() {
        Verdict::Correct
    } else {
        Verdict::WrongAnswer
    }
}

/// Reads an expected-output file as raw bytes.
pub fn read_expected(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read expected output: {}", path.display()))
}
