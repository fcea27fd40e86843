//! # File System Operations Module / 文件系统操作模块
//!
//! Directory listing and existence checks used by the suite loader.
//!
//! 测试集加载器使用的目录列举和存在性检查。

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Checks whether `name` is an entry of `dir`.
///
/// The name is compared against the directory's entries rather than joined
/// and checked, so `sub/main.py` or `../main.py` never count as present.
pub fn has_entry(dir: &Path, name: &str) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Lists the names of regular files directly inside `dir`, in no particular order.
///
/// Subdirectories are skipped. Entries whose names are not valid UTF-8 are
/// skipped with a warning, since they cannot be paired by name.
pub fn list_file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(dir = %dir.display(), name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}

/// Creates `dir` if it does not exist yet. Returns `true` when it was created.
pub fn ensure_directory(dir: &Path) -> io::Result<bool> {
    if is_directory(dir) {
        return Ok(false);
    }
    fs::create_dir(dir)?;
    Ok(true)
}
