//! Where finished exports go.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::ExportedFile;
use crate::error::Result;

/// Receives a finished export (a download prompt, a directory, a test double).
pub trait SaveTarget {
    /// # Errors
    /// Implementation-defined, typically I/O.
    fn save(&mut self, file: &ExportedFile) -> Result<()>;
}

impl<F> SaveTarget for F
where
    F: FnMut(&ExportedFile) -> Result<()>,
{
    fn save(&mut self, file: &ExportedFile) -> Result<()> {
        self(file)
    }
}

/// Writes exports into a directory under their suggested file name.
#[derive(Debug, Clone)]
pub struct DirTarget {
    dir: PathBuf,
}

impl DirTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a file named `filename` is written to.
    ///
    /// Only the final component of `filename` is used.
    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        let name = Path::new(filename)
            .file_name()
            .map_or_else(|| "export.xlsx".into(), |n| n.to_os_string());
        self.dir.join(name)
    }
}

impl SaveTarget for DirTarget {
    fn save(&mut self, file: &ExportedFile) -> Result<()> {
        let path = self.path_for(&file.filename);
        fs::write(&path, &file.bytes)?;
        info!(path = %path.display(), bytes = file.bytes.len(), "xlsx export saved");
        Ok(())
    }
}
