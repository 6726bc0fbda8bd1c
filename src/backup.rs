//! Timestamped file backups.
//!
//! A backup is a byte-for-byte copy of the source placed next to it as
//! `<name>.backup.<YYYYMMDD_HHMMSS>`. Permission bits and access/modification
//! times are carried over. A missing source is an expected outcome and is
//! reported through [`BackupOutcome::SourceMissing`], never as an error.
//!
//! # Failure Modes
//!
//! - Source missing: `Ok(BackupOutcome::SourceMissing)`, nothing written
//! - Copy fails (permissions, disk full, destination directory gone, or
//!   timestamps cannot be applied): `Err(TabprepError::Copy)`, no retry. Any
//!   partially written backup is removed first.
//! - Source path without a file name (e.g. `/`): `Err(TabprepError::InvalidSource)`

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, TabprepError};
use crate::types::BackupTimestamp;

/// Infix between the original file name and the timestamp.
pub const BACKUP_INFIX: &str = ".backup.";

/// Whether a backup actually writes the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackupMode {
    #[default]
    Copy,
    /// Compute and report the destination without touching the filesystem
    DryRun,
}

/// Result of a single backup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The source was copied to `destination`
    Created {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Dry run: the source exists and would be copied to `destination`
    Planned {
        source: PathBuf,
        destination: PathBuf,
    },
    /// The source did not exist; no file was created
    SourceMissing { source: PathBuf },
}

impl BackupOutcome {
    /// True when the source existed (copied, or would be in a dry run).
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::SourceMissing { .. })
    }

    pub fn source(&self) -> &Path {
        match self {
            Self::Created { source, .. }
            | Self::Planned { source, .. }
            | Self::SourceMissing { source } => source,
        }
    }

    /// Backup path, if the source existed.
    pub fn destination(&self) -> Option<&Path> {
        match self {
            Self::Created { destination, .. } | Self::Planned { destination, .. } => {
                Some(destination)
            }
            Self::SourceMissing { .. } => None,
        }
    }

    /// One-line console message describing the outcome
    pub fn message(&self) -> String {
        match self {
            Self::Created { destination, .. } => {
                format!("✅ Backed up current page to: {}", destination.display())
            }
            Self::Planned {
                source,
                destination,
            } => format!(
                "🔍 Dry run: would back up {} to {}",
                source.display(),
                destination.display()
            ),
            Self::SourceMissing { source } => {
                format!("❌ Page file not found: {}", source.display())
            }
        }
    }
}

/// An existing backup found next to a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub timestamp: BackupTimestamp,
}

/// Destination path for backing up `source` at `timestamp`.
///
/// The suffix is appended to the full file name, so `page.tsx` becomes
/// `page.tsx.backup.20250101_120000` in the same directory.
pub fn backup_path(source: &Path, timestamp: BackupTimestamp) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| TabprepError::invalid_source(source.display().to_string()))?;

    let mut name = file_name.to_os_string();
    name.push(BACKUP_INFIX);
    name.push(timestamp.to_string());
    Ok(source.with_file_name(name))
}

/// Back up `source` using the current local time.
pub fn backup_file(source: &Path, mode: BackupMode) -> Result<BackupOutcome> {
    backup_file_at(source, BackupTimestamp::now(), mode)
}

/// Back up `source` with a caller-supplied timestamp.
///
/// The destination name is fixed by `timestamp` before any copying starts.
/// An existing file at the destination is overwritten.
pub fn backup_file_at(
    source: &Path,
    timestamp: BackupTimestamp,
    mode: BackupMode,
) -> Result<BackupOutcome> {
    if !source.exists() {
        info!("Backup source not found: {}", source.display());
        return Ok(BackupOutcome::SourceMissing {
            source: source.to_path_buf(),
        });
    }

    let destination = backup_path(source, timestamp)?;

    if mode == BackupMode::DryRun {
        info!(
            "[DRY RUN] Skipping copy of {} to {}",
            source.display(),
            destination.display()
        );
        return Ok(BackupOutcome::Planned {
            source: source.to_path_buf(),
            destination,
        });
    }

    debug!("Copying {} to {}", source.display(), destination.display());
    copy_with_metadata(source, &destination)
        .map_err(|e| TabprepError::copy(source, &destination, e))?;
    info!("Backup created: {}", destination.display());

    Ok(BackupOutcome::Created {
        source: source.to_path_buf(),
        destination,
    })
}

/// Copy file contents and permission bits, then carry over timestamps.
fn copy_with_metadata(source: &Path, destination: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;
    let copied = fs::copy(source, destination).and_then(|_| {
        let mut times = FileTimes::new().set_modified(metadata.modified()?);
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }
        open_for_times(destination)?.set_times(times)
    });
    discard_on_error(destination, copied)
}

/// Remove `destination` if `result` failed; the original error is returned.
fn discard_on_error(destination: &Path, result: io::Result<()>) -> io::Result<()> {
    if result.is_err() {
        match fs::remove_file(destination) {
            Ok(()) => warn!("Removed incomplete backup {}", destination.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove incomplete backup {}: {}",
                destination.display(),
                e
            ),
        }
    }
    result
}

// The copy may already be read-only, so avoid asking for write access.
#[cfg(unix)]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

#[cfg(not(any(unix, windows)))]
fn open_for_times(path: &Path) -> io::Result<File> {
    fs::OpenOptions::new().write(true).open(path)
}

/// Existing backups of `source`, oldest first.
///
/// Only siblings named `<name>.backup.<YYYYMMDD_HHMMSS>` are returned. A
/// missing parent directory yields an empty list.
pub fn list_backups(source: &Path) -> Result<Vec<BackupEntry>> {
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TabprepError::invalid_source(source.display().to_string()))?;
    let prefix = format!("{file_name}{BACKUP_INFIX}");

    let dir = match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Backup directory does not exist: {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(suffix) = name.strip_prefix(&prefix) else {
            continue;
        };
        match suffix.parse::<BackupTimestamp>() {
            Ok(timestamp) => entries.push(BackupEntry {
                path: entry.path(),
                timestamp,
            }),
            Err(e) => debug!("Ignoring {}: {}", name, e),
        }
    }

    entries.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.path.cmp(&b.path))
    });
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_timestamp() -> BackupTimestamp {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid date");
        BackupTimestamp::from_datetime(dt)
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        let path = backup_path(Path::new("/srv/app/page.tsx"), fixed_timestamp())
            .expect("Should compute path");
        assert_eq!(path, PathBuf::from("/srv/app/page.tsx.backup.20250102_030405"));
    }

    #[test]
    fn test_backup_path_relative_source() {
        let path = backup_path(Path::new("page.tsx"), fixed_timestamp()).expect("path");
        assert_eq!(path, PathBuf::from("page.tsx.backup.20250102_030405"));
    }

    #[test]
    fn test_backup_path_rejects_root() {
        let err = backup_path(Path::new("/"), fixed_timestamp()).unwrap_err();
        assert!(matches!(err, TabprepError::InvalidSource(_)));
    }

    #[test]
    fn test_missing_source_reports_without_error() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("page.tsx");

        let outcome = backup_file_at(&source, fixed_timestamp(), BackupMode::Copy)
            .expect("missing source is not an error");

        assert!(!outcome.succeeded());
        assert_eq!(outcome.destination(), None);
        assert!(outcome.message().contains("not found"));
        assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("page.tsx");
        fs::write(&source, "hello").expect("write source");

        let outcome = backup_file_at(&source, fixed_timestamp(), BackupMode::DryRun)
            .expect("dry run");

        assert!(outcome.succeeded());
        assert!(matches!(outcome, BackupOutcome::Planned { .. }));
        assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 1);
        assert!(outcome.message().starts_with("🔍 Dry run"));
    }

    #[test]
    fn test_same_second_overwrites() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("page.tsx");

        fs::write(&source, "first").expect("write");
        backup_file_at(&source, fixed_timestamp(), BackupMode::Copy).expect("first backup");
        fs::write(&source, "second").expect("write");
        let outcome =
            backup_file_at(&source, fixed_timestamp(), BackupMode::Copy).expect("second backup");

        let destination = outcome.destination().expect("destination");
        assert_eq!(fs::read_to_string(destination).expect("read"), "second");
        assert_eq!(list_backups(&source).expect("list").len(), 1);
    }

    #[test]
    fn test_failed_copy_leaves_no_backup() {
        let dir = TempDir::new().expect("tempdir");
        let destination = dir.path().join("page.tsx.backup.20250102_030405");
        fs::write(&destination, "partial").expect("write");

        let failed = Err(io::Error::other("set_times failed"));
        let err = discard_on_error(&destination, failed).unwrap_err();

        assert_eq!(err.to_string(), "set_times failed");
        assert!(!destination.exists());
    }

    #[test]
    fn test_successful_copy_is_kept() {
        let dir = TempDir::new().expect("tempdir");
        let destination = dir.path().join("page.tsx.backup.20250102_030405");
        fs::write(&destination, "hello").expect("write");

        discard_on_error(&destination, Ok(())).expect("ok");
        assert!(destination.exists());
    }

    #[test]
    fn test_list_backups_missing_dir_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("gone").join("page.tsx");
        assert!(list_backups(&source).expect("list").is_empty());
    }
}
