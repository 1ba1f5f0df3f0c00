//! Rotating file writer with size-based rotation and backup retention.
//!
//! Backups are numbered: `<file>.1` is the most recent, `<file>.<n>` the
//! oldest kept. Rotation shifts every backup up by one and drops whatever
//! falls past the retention limit.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on first write and appended to. Before each
/// write the current size is checked; once it exceeds the limit the file is
/// rotated and a fresh one started.
///
/// # Example
///
/// ```rust
/// use ministream::observability::FileWriter;
///
/// let dir = tempfile::tempdir().unwrap();
/// let writer = FileWriter::new(dir.path().join("spans.jsonl"));
/// writer.write_line("{\"name\":\"handle_event\"}").unwrap();
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default rotation limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an error if rotating, opening, writing or flushing fails, or if
    /// the internal lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::other("No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
