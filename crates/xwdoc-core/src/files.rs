//! Filesystem helpers used by the build.
//!
//! Every helper attaches the offending path to I/O failures through
//! [`Error::at_path`], so a failed build names the file it choked on.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Whether a directory entry name is hidden (starts with a dot).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Resolve `.` and `..` components lexically.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                out.pop();
            },
            other => out.push(other),
        }
    }
    out
}

/// Whether one path is equal to or nested inside the other, compared by
/// component.
pub fn overlaps(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Delete `dir` with everything in it, then create it again empty.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("clearing {}", dir.display());
        fs::remove_dir_all(dir).map_err(|e| Error::at_path(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| Error::at_path(dir, e))
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::at_path(path, e))
}

/// Write a file, replacing any previous content.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::at_path(path, e))
}

/// Copy one file to `dest`, creating missing parent directories.
pub fn copy_file(file: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::at_path(parent, e))?;
    }
    fs::copy(file, dest).map_err(|e| Error::at_path(file, e))?;
    Ok(())
}

/// Recursively copy `src` to `dest`, skipping hidden entries.
///
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).map_err(|e| Error::at_path(dest, e))?;
    let mut copied = 0;
    for name in visible_entries(src)? {
        let from = src.join(&name);
        let to = dest.join(&name);
        if from.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::at_path(&from, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Names of the non-hidden entries of `dir`, sorted.
pub fn visible_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::at_path(dir, e))? {
        let entry = entry.map_err(|e| Error::at_path(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_hidden(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Files in `dir` with the given extension, as `(stem, path)` sorted by stem.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for name in visible_entries(dir)? {
        let path = dir.join(&name);
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((stem.to_string(), path.clone()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}
