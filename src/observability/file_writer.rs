//! Append-only line writer with size-based rotation.
//!
//! Before each write the file size is checked; past the limit the file is
//! renamed to `<stem>.json.<unix-nanos>` and a fresh one is started. Only
//! the newest [`MAX_BACKUP_FILES`] backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rotation threshold (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files to keep.
const MAX_BACKUP_FILES: usize = 3;

/// Rotating writer shared by the exporter.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_size: u64,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    pub const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or an
    /// error if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| {
                io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}"))
            })?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_size)
    }

    fn rotate(&self) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_nanos();
        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path)?;
        }

        self.prune_backups()
    }

    /// Deletes all but the newest backups. Individual delete failures are
    /// ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(stem)) = (
            self.file_path.parent(),
            self.file_path.file_stem().and_then(|s| s.to_str()),
        ) else {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "trace file path has no parent or stem",
            ));
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup_of(path, stem))
            .collect();

        // Backup names end in a timestamp, so the name order is the age order.
        backups.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        for stale in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

fn is_backup_of(path: &Path, stem: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix(stem))
        .is_some_and(|rest| rest.starts_with(".json."))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}
