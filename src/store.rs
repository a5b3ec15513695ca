//! Catalog file persistence.
//!
//! The persisted file is a UTF-8 JSON array of book objects. Loading never
//! fails from the caller's point of view: a missing or unparsable file is
//! downgraded to an empty catalog, and the returned [`LoadOutcome`] records
//! which of those happened.
//!
//! Saving writes a pretty-printed array to a temporary file next to the
//! target and renames it over the target, so a crash mid-write leaves the
//! previous contents intact.

use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::types::Book;

/// Default catalog file name, relative to the working directory
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Mode of a catalog file created by the first save
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// How a load produced its catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File existed and parsed as a book array
    Loaded,
    /// File did not exist; started empty
    Missing,
    /// File existed but could not be read or parsed; started empty
    Malformed(String),
}

impl LoadOutcome {
    /// True when the catalog came from the file rather than a fallback
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Load/save boundary for a single catalog file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, falling back to empty on any failure
    pub fn load(&self) -> (Catalog, LoadOutcome) {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No catalog file at {:?}, starting empty", self.path);
                return (Catalog::new(), LoadOutcome::Missing);
            }
            Err(e) => {
                warn!("Failed to read catalog {:?}: {}", self.path, e);
                return (Catalog::new(), LoadOutcome::Malformed(e.to_string()));
            }
        };

        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => {
                info!("Loaded {} books from {:?}", books.len(), self.path);
                (Catalog::from(books), LoadOutcome::Loaded)
            }
            Err(e) => {
                warn!("Catalog {:?} is malformed, starting empty: {}", self.path, e);
                (Catalog::new(), LoadOutcome::Malformed(e.to_string()))
            }
        }
    }

    /// Replace the file contents with the full catalog.
    ///
    /// The write goes through any symlink at `path` and keeps the existing
    /// file's permissions.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let json = to_pretty_json(catalog.books())?;
        let target = self.write_target()?;

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        if let Some(perms) = target_permissions(&target)? {
            tmp.as_file().set_permissions(perms)?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&target)
            .map_err(|e| ShelfError::persist(format!("{:?}: {}", target, e.error)))?;

        debug!("Saved {} books to {:?}", catalog.len(), target);
        Ok(())
    }

    /// File the rename replaces: the symlink's destination when `path` is one
    fn write_target(&self) -> Result<PathBuf> {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let resolved = fs::canonicalize(&self.path)?;
                debug!("Catalog {:?} resolves to {:?}", self.path, resolved);
                Ok(resolved)
            }
            Ok(_) => Ok(self.path.clone()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Permissions for the replacement file: the current file's, or the usual
/// mode for a newly created one
fn target_permissions(target: &Path) -> Result<Option<fs::Permissions>> {
    match fs::metadata(target) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY_FILE)
    }
}

/// Serialize with four-space indentation
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ShelfError::persist(e.to_string()))
}
