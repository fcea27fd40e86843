//! # Expected Output Writer / 期望输出写入
//!
//! Persists a reference program's output as the answer for one test case.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::compare::normalize_candidate;

/// Trims the captured stdout and writes the remaining bytes unchanged to
/// `path`, replacing any previous file.
pub fn write_expected(path: &Path, stdout: &[u8]) -> Result<()> {
    fs::write(path, normalize_candidate(stdout))
        .with_context(|| format!("Failed to write expected output: {}", path.display()))
}
