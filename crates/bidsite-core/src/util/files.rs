//! Async file utilities for the bidsite crates.
//!
//! Provides the flat markdown listing used by the index builder, plus
//! reading helpers and an atomic write for the index artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;

use crate::{Error, Result};

/// Options for listing content files.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filename suffix to match (without dot), e.g., "md". Case-sensitive.
    pub extension: Option<&'static str>,
    /// Exact filenames to leave out of the listing.
    pub exclude: Vec<String>,
}

impl ListOptions {
    /// Create options for listing markdown articles.
    ///
    /// `README.md` is excluded by default.
    pub fn markdown() -> Self {
        Self {
            extension: Some("md"),
            exclude: vec!["README.md".to_string()],
        }
    }

    /// Replace the exclusion list.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    fn matches(&self, name: &str) -> bool {
        if self.exclude.iter().any(|e| e == name) {
            return false;
        }
        match self.extension {
            Some(ext) => name
                .strip_suffix(ext)
                .is_some_and(|rest| rest.ends_with('.')),
            None => true,
        }
    }
}

/// Information about a listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name including extension.
    pub name: String,
}

/// List the regular files directly inside `dir` that match `options`.
///
/// Symlinks are followed; a dangling link is skipped.
/// The listing is non-recursive and sorted by file name (byte-wise).
/// Entries whose names are not valid UTF-8 are skipped with a warning.
///
/// # Example
///
/// ```no_run
/// # use bidsite_core::util::files::{list_files, ListOptions};
/// # use std::path::Path;
/// # async fn example() -> bidsite_core::Result<()> {
/// let files = list_files(Path::new("markdown"), &ListOptions::markdown()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn list_files(dir: &Path, options: &ListOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, entry.path()))?;
        let is_file = if file_type.is_symlink() {
            fs::metadata(entry.path())
                .await
                .map(|m| m.is_file())
                .unwrap_or(false)
        } else {
            file_type.is_file()
        };
        if !is_file {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        if options.matches(&name) {
            files.push(FileInfo {
                path: entry.path(),
                name,
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Read a file's contents as a string.
///
/// Invalid UTF-8 surfaces as an I/O error carrying the path.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Check if a path is an existing directory.
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// Readers see either the previous file or the complete new one. The parent
/// directory is created when missing.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| Error::io_with_path(e, &parent))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| Error::io_with_path(e, &parent))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    set_published_permissions(&tmp, path)?;
    tmp.persist(path)
        .map_err(|e| Error::io_with_path(e.error, path))?;
    Ok(())
}

/// Give the temporary file the destination's mode, or 0644 for a new file.
///
/// Temporary files start out as 0600, which the web server may not read.
#[cfg(unix)]
fn set_published_permissions(tmp: &NamedTempFile, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(path) {
        Ok(existing) => existing.permissions(),
        Err(_) => std::fs::Permissions::from_mode(0o644),
    };
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(|e| Error::io_with_path(e, tmp.path()))
}

#[cfg(not(unix))]
fn set_published_permissions(_tmp: &NamedTempFile, _path: &Path) -> Result<()> {
    Ok(())
}
