//! Temporary working files handed to the analyzer.
//!
//! A [`WorkingFile`] is acquired once per analysis and removed exactly once,
//! either through [`WorkingFile::release`] or when it goes out of scope.

use crate::error::{AnalysisError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of Ruby source files.
pub const RUBY_EXTENSION: &str = "rb";

/// Creates and removes the on-disk copy of a document.
pub trait Materializer {
    /// Writes `content` to a new, uniquely named file ending in `.{extension}`.
    ///
    /// # Errors
    /// Returns error if the file cannot be created or fully written.
    fn create(&self, content: &str, extension: &str) -> Result<PathBuf>;

    /// Deletes a file previously returned by [`Materializer::create`].
    ///
    /// # Errors
    /// Returns the underlying I/O error; callers log it and move on.
    fn remove(&self, path: &Path) -> std::io::Result<()>;
}

/// Materializes into the system temp directory, or a chosen directory.
#[derive(Debug, Clone, Default)]
pub struct TempFileMaterializer {
    dir: Option<PathBuf>,
}

impl TempFileMaterializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl Materializer for TempFileMaterializer {
    fn create(&self, content: &str, extension: &str) -> Result<PathBuf> {
        let dir = self.dir.clone().unwrap_or_else(std::env::temp_dir);
        let suffix = format!(".{extension}");

        let mut file = tempfile::Builder::new()
            .prefix("reekrun-")
            .suffix(&suffix)
            .tempfile_in(&dir)
            .map_err(|e| AnalysisError::working_file(e, &dir))?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| AnalysisError::working_file(e, file.path()))?;

        // Ownership moves to WorkingFile, which deletes it.
        let path = file.path().to_path_buf();
        file.into_temp_path()
            .keep()
            .map_err(|e| AnalysisError::working_file(e.error, &path))
    }

    fn remove(&self, path: &Path) -> std::io::Result<()> {
        fs::remove_file(path)
    }
}

/// A materialized document, deleted when dropped.
pub struct WorkingFile<'a> {
    path: PathBuf,
    size: u64,
    owner: &'a dyn Materializer,
}

impl<'a> WorkingFile<'a> {
    /// Materializes `content` through `owner`.
    ///
    /// # Errors
    /// Returns error if the materializer fails.
    pub fn acquire(owner: &'a dyn Materializer, content: &str, extension: &str) -> Result<Self> {
        let path = owner.create(content, extension)?;
        let size = content.len() as u64;
        debug!(path = %path.display(), size, "materialized working file");
        Ok(Self { path, size, owner })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written at acquisition.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Deletes the file now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for WorkingFile<'_> {
    fn drop(&mut self) {
        match self.owner.remove(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed working file"),
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove working file"
            ),
        }
    }
}
