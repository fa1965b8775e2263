//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling temp path used while writing `path`: `report.csv` -> `report.csv.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `content` to `path` by writing a temp file and renaming it over the target.
///
/// Readers never observe a half-written file; if the write fails the temp
/// file is removed and the target is left untouched.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp = temp_path(path);

    if let Err(err) = fs::write(&temp, content) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }

    fs::rename(&temp, path)
}
