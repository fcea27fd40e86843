// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Writes `(name, content)` pairs into `dir`, creating it first.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).expect("Failed to create directory");
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("Failed to write test file");
    }
}

/// Creates `<root>/tests/input` (and `<root>/tests/output` when `outputs`
/// is given) and returns the path of the tests directory.
pub fn create_suite(
    root: &Path,
    inputs: &[(&str, &str)],
    outputs: Option<&[(&str, &str)]>,
) -> PathBuf {
    let tests = root.join("tests");
    write_files(&tests.join("input"), inputs);
    if let Some(outputs) = outputs {
        write_files(&tests.join("output"), outputs);
    }
    tests
}

/// Writes a shell script meant to be run as `sh <name>`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write script");
    path
}

/// A workspace holding an echo program (`cat.sh`) and nothing else.
pub fn setup_workspace() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_script(temp_dir.path(), "cat.sh", "cat\n");
    temp_dir
}

/// Script that echoes its first input line, or fails with `boom` when the
/// line is `bad`.
pub const PICKY_SCRIPT: &str = r#"read line
if [ "$line" = "bad" ]; then
  echo boom >&2
  exit 1
fi
echo "$line"
"#;

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
