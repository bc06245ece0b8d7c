//! File-backed [`BookStore`].

use super::traits::BookStore;
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Stores the address book document in a single UTF-8 file.
///
/// Writes go to a hidden sibling file first and are renamed over the
/// destination once fully flushed, so the destination is either the old
/// document or the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> StorageResult<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StorageError::InvalidPath(self.path.clone()))?;

        let mut staging = std::ffi::OsString::from(".");
        staging.push(file_name);
        staging.push(".tmp");
        Ok(self.path.with_file_name(staging))
    }
}

impl BookStore for JsonFileStore {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        let staging = self.staging_path()?;

        let written = File::create(&staging).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        Ok(())
    }
}
