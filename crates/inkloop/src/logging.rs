use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotate once the log grows past 5 MB
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of recent history kept by a rotation
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- inkloop log rotated, older entries dropped ---\n";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("inkloop.log")
}

/// Trim `log_path` to its last `keep` bytes once it exceeds `max`.
///
/// The cut is moved forward to the next line start so no entry is split.
fn rotate_if_needed(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

/// Hands every tracing event the same append-mode log file
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

fn default_filter(level: &str) -> String {
    format!("inkloop={level},inkloop_core=warn")
}

/// Send tracing output to `{data_dir}/inkloop.log`.
///
/// The terminal belongs to the dashboard, so nothing is logged to stderr.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let path = log_path(data_dir);

    if let Err(e) = rotate_if_needed(&path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: could not rotate {}: {}", path.display(), e);
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let writer = SharedLogFile {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %path.display(), "inkloop logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_small_log_untouched() {
        let dir = tempdir().unwrap();
        let path = log_path(dir.path());
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!rotate_if_needed(&path, 1024, 4).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_log_is_fine() {
        let dir = tempdir().unwrap();
        assert!(!rotate_if_needed(&log_path(dir.path()), 10, 5).unwrap());
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let path = log_path(dir.path());
        fs::write(&path, "first line\nsecond line\nthird\n").unwrap();

        // Last 10 bytes are "ine\nthird\n"; the partial line is dropped
        assert!(rotate_if_needed(&path, 16, 10).unwrap());

        let rotated = fs::read(&path).unwrap();
        let expected = [ROTATION_MARKER, b"third\n"].concat();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "inkloop=debug,inkloop_core=warn");
    }
}
