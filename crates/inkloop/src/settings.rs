//! User settings stored in `{data_dir}/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use inkloop_core::{Quoting, ShareBasis};
use serde::{Deserialize, Serialize};

use crate::state::SettingsError;
use crate::util::io::atomic_write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Where exports are written (default: `{data_dir}/exports`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Snapshot file loaded when `--snapshot` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
    pub csv_quoting: Quoting,
    pub share_basis: ShareBasis,
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    /// Load settings; a missing file yields the defaults
    pub fn load(data_dir: &Path) -> Result<Self, SettingsError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| SettingsError::Io(format!("Failed to read settings: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| SettingsError::Parse(format!("Failed to parse settings: {}", e)))
    }

    /// Load settings, falling back to the defaults when the file is unreadable
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| SettingsError::Serialize(format!("Failed to serialize settings: {}", e)))?;

        atomic_write(&Self::path(data_dir), &yaml)
            .map_err(|e| SettingsError::Io(format!("Failed to write settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.csv_quoting, Quoting::Plain);
        assert_eq!(settings.share_basis, ShareBasis::Equal);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            export_dir: Some(PathBuf::from("/tmp/inkloop-exports")),
            snapshot_path: None,
            csv_quoting: Quoting::Rfc4180,
            share_basis: ShareBasis::Revenue,
        };

        settings.save(dir.path()).unwrap();

        assert_eq!(Settings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "share_basis: hours\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.share_basis, ShareBasis::Hours);
        assert_eq!(settings.csv_quoting, Quoting::Plain);
        assert_eq!(settings.export_dir, None);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "csv_quoting: sometimes\n").unwrap();

        assert!(matches!(
            Settings::load(dir.path()),
            Err(SettingsError::Parse(_))
        ));
        assert_eq!(Settings::load_or_default(dir.path()), Settings::default());
    }
}
