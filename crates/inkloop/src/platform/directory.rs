//! Export save target backed by a directory on disk.

use std::path::{Path, PathBuf};

use inkloop_core::{SaveTarget, export::SaveResult};

use crate::util::io::atomic_write;

/// Writes each export as `{dir}/{filename}`, replacing any previous file.
///
/// The directory must already exist; a missing directory is reported as a
/// save failure rather than created behind the user's back.
#[derive(Debug, Clone)]
pub struct DirectorySaveTarget {
    dir: PathBuf,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl SaveTarget for DirectorySaveTarget {
    fn save(&self, filename: &str, contents: &str) -> SaveResult {
        if !self.dir.is_dir() {
            return Err(format!("export directory {} does not exist", self.dir.display()).into());
        }

        let path = self.path_for(filename);
        atomic_write(&path, contents)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote export");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkloop_core::{ExportError, Quoting, Table, export_csv};
    use std::fs;
    use tempfile::tempdir;

    fn table() -> Table {
        Table {
            header: vec!["Month".to_string(), "Revenue".to_string()],
            rows: vec![vec!["Jun".to_string(), "67000".to_string()]],
        }
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempdir().unwrap();
        let target = DirectorySaveTarget::new(dir.path());

        target.save("inkloop_financial.csv", "Month\nJun").unwrap();

        let written = fs::read_to_string(dir.path().join("inkloop_financial.csv")).unwrap();
        assert_eq!(written, "Month\nJun");
    }

    #[test]
    fn test_export_through_directory() {
        let dir = tempdir().unwrap();
        let target = DirectorySaveTarget::new(dir.path());

        let receipt = export_csv(&table(), None, &target, Quoting::Plain).unwrap();

        assert_eq!(receipt.filename, "inkloop_data.csv");
        assert_eq!(receipt.rows, 1);
        let written = fs::read_to_string(target.path_for("inkloop_data.csv")).unwrap();
        assert_eq!(written, "Month,Revenue\nJun,67000");
    }

    #[test]
    fn test_missing_directory_fails_export() {
        let dir = tempdir().unwrap();
        let target = DirectorySaveTarget::new(dir.path().join("nope"));

        let result = export_csv(&table(), Some("out.csv"), &target, Quoting::Plain);

        assert!(matches!(result, Err(ExportError::ExportFailed(_))));
        assert!(!target.path_for("out.csv").exists());
    }
}
