//! Size-based rotating log file.
//!
//! The active file lives at the configured path. When the next write would
//! push it past the size limit, it is renamed to a timestamped backup
//! (`app-2024-05-01T12-30-00.000.log`) next to it and a fresh file is
//! started. Old backups are then pruned by age and by count.

use chrono::{Duration, Local, NaiveDateTime, Utc};
use logweave_domain::RotationPolicy;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const MEGABYTE: u64 = 1024 * 1024;
const DEFAULT_MAX_SIZE_MB: u64 = 100;
const BACKUP_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// A file that rolls over by size and retains a bounded set of backups.
///
/// Opening is lazy: nothing touches the filesystem before the first write,
/// which also creates missing parent directories.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_age: Option<Duration>,
    max_backups: usize,
    local_time: bool,
    file: Option<File>,
    size: u64,
    last_backup: Option<NaiveDateTime>,
}

impl RotatingFile {
    pub fn new(policy: &RotationPolicy) -> Self {
        let max_size_mb = match policy.max_size_mb {
            0 => DEFAULT_MAX_SIZE_MB,
            mb => mb,
        };
        Self::with_max_bytes(policy, max_size_mb.saturating_mul(MEGABYTE))
    }

    pub(crate) fn with_max_bytes(policy: &RotationPolicy, max_bytes: u64) -> Self {
        let max_age = match policy.max_age_days {
            0 => None,
            days => i64::try_from(days).ok().and_then(Duration::try_days),
        };
        Self {
            path: policy.path.clone(),
            max_bytes,
            max_age,
            max_backups: policy.max_backups,
            local_time: policy.local_time,
            file: None,
            size: 0,
            last_backup: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backups of the active file, newest first
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .list_backups()?
            .into_iter()
            .map(|(path, _)| path)
            .collect())
    }

    fn open_existing_or_new(&mut self, incoming: u64) -> io::Result<()> {
        let existing = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return self.open_new(),
            Err(e) => return Err(e),
        };
        if existing + incoming > self.max_bytes {
            return self.rotate();
        }
        let file = OpenOptions::new().append(true).open(&self.path)?;
        self.file = Some(file);
        self.size = existing;
        Ok(())
    }

    fn open_new(&mut self) -> io::Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        if self.path.exists() {
            let backup = self.backup_path();
            fs::rename(&self.path, &backup)?;
            debug!("Rotated {} to {}", self.path.display(), backup.display());
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.file = Some(file);
        self.size = 0;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        self.open_new()?;
        self.prune()
    }

    fn now(&self) -> NaiveDateTime {
        if self.local_time {
            Local::now().naive_local()
        } else {
            Utc::now().naive_utc()
        }
    }

    fn split_name(&self) -> (String, String) {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = self
            .path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        (stem, ext)
    }

    /// Backup stamps strictly increase, even within one millisecond.
    fn backup_path(&mut self) -> PathBuf {
        let (stem, ext) = self.split_name();
        let mut stamp = self.now();
        if let Some(last) = self.last_backup
            && stamp <= last
        {
            stamp = last + Duration::milliseconds(1);
        }
        loop {
            let name = format!("{stem}-{}{ext}", stamp.format(BACKUP_TIME_FORMAT));
            let candidate = self.path.with_file_name(name);
            if !candidate.exists() {
                self.last_backup = Some(stamp);
                return candidate;
            }
            stamp += Duration::milliseconds(1);
        }
    }

    fn list_backups(&self) -> io::Result<Vec<(PathBuf, NaiveDateTime)>> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let (stem, ext) = self.split_name();
        let prefix = format!("{stem}-");

        let mut backups = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(stamp) = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(&ext))
            else {
                continue;
            };
            if let Ok(time) = NaiveDateTime::parse_from_str(stamp, BACKUP_TIME_FORMAT) {
                backups.push((entry.path(), time));
            }
        }
        backups.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(backups)
    }

    fn prune(&self) -> io::Result<()> {
        let mut backups = self.list_backups()?;
        let mut remove = Vec::new();

        if self.max_backups > 0 && backups.len() > self.max_backups {
            remove.extend(backups.split_off(self.max_backups));
        }
        if let Some(max_age) = self.max_age {
            let cutoff = self.now() - max_age;
            let (expired, kept): (Vec<_>, Vec<_>) =
                backups.into_iter().partition(|(_, time)| *time < cutoff);
            backups = kept;
            remove.extend(expired);
        }

        for (path, _) in remove {
            debug!("Removing old log backup {}", path.display());
            fs::remove_file(&path)?;
        }
        debug!("{} log backups retained", backups.len());
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let incoming = buf.len() as u64;
        if incoming > self.max_bytes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "write length {incoming} exceeds maximum file size {}",
                    self.max_bytes
                ),
            ));
        }

        if self.file.is_none() {
            self.open_existing_or_new(incoming)?;
        } else if self.size + incoming > self.max_bytes {
            self.rotate()?;
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file is not open"))?;
        let written = file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
