//! # File I/O
//!
//! Reading and writing analysis files and standalone inputs:
//! - **Atomic saves**: write a `.tmp` sibling, fsync, then rename over the target
//! - **File locking**: an OS lock plus a `.lock` file naming the holder
//! - **Version validation**: refuse files written by an incompatible schema
//!
//! Analysis files use the `.cbm` extension; their locks are `.cbm.lock`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cantilever_core::file_io::{load_analysis_file, save_analysis_file, FileLock};
//! use cantilever_core::project::AnalysisFile;
//! use std::path::Path;
//!
//! let path = Path::new("bracket.cbm");
//! let lock = FileLock::acquire(path, "engineer@company.com")?;
//!
//! save_analysis_file(&AnalysisFile::new("Engineer", "26-001"), path)?;
//! let reopened = load_analysis_file(path)?;
//!
//! drop(lock);
//! # Ok::<(), cantilever_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::calculations::analysis::CantileverInput;
use crate::errors::{CalcError, CalcResult};
use crate::project::{AnalysisFile, SCHEMA_VERSION};

/// Locks older than this are taken over regardless of the holder
const LOCK_MAX_AGE_HOURS: i64 = 24;

fn io_error<'a>(
    operation: &'static str,
    path: &'a Path,
) -> impl FnOnce(std::io::Error) -> CalcError + 'a {
    move |e| CalcError::file_error(operation, path.display().to_string(), e.to_string())
}

/// Contents of a `.lock` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// Who holds the lock (email or username)
    pub user_id: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Lock info describing the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: machine_name().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    fn holder(&self) -> String {
        format!("{} ({})", self.user_id, self.machine)
    }

    /// A lock is stale when its process is gone (same machine only) or it
    /// is older than a day.
    pub fn is_stale(&self) -> bool {
        if Utc::now() - self.locked_at > Duration::hours(LOCK_MAX_AGE_HOURS) {
            return true;
        }
        match machine_name() {
            Some(ours) if ours == self.machine => !process_alive(self.pid),
            _ => false,
        }
    }
}

fn machine_name() -> Option<String> {
    let vars: &[&str] = if cfg!(windows) {
        &["COMPUTERNAME"]
    } else {
        &["HOSTNAME", "HOST"]
    };
    vars.iter().find_map(|v| std::env::var(v).ok())
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{}", pid)).exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive lock on an analysis file, released on drop.
///
/// Holds an OS-level lock (via fs2) on the `.lock` file for process safety
/// and writes [`LockInfo`] into it so other users can see who has the file.
#[derive(Debug)]
pub struct FileLock {
    target: PathBuf,
    lock_path: PathBuf,
    _handle: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire the lock for `path`.
    ///
    /// # Errors
    /// `FileLocked` if a live lock is held by someone else, `FileError` if
    /// the lock file cannot be written.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);

        if let Some(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    existing.holder(),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            log::warn!(
                "taking over stale lock on {} held by {} since {}",
                path.display(),
                existing.holder(),
                existing.locked_at.to_rfc3339()
            );
        }

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(io_error("create lock", &lock_path))?;

        handle.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        let info = LockInfo::new(user_id);
        let json = serde_json::to_vec_pretty(&info)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        handle
            .write_all(&json)
            .map_err(io_error("write lock", &lock_path))?;
        handle.sync_all().map_err(io_error("sync lock", &lock_path))?;

        log::debug!("locked {} for {}", path.display(), info.user_id);

        Ok(FileLock {
            target: path.to_path_buf(),
            lock_path,
            _handle: handle,
            info,
        })
    }

    /// Current live lock on `path`, if any, without acquiring it.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path)).filter(|info| !info.is_stale())
    }

    /// The file this lock protects
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The OS lock goes with the handle
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `bracket.cbm` -> `bracket.cbm.lock`
fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

/// Unreadable or malformed lock files count as absent.
fn read_lock_info(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Write `bytes` to `path` through a `.tmp` sibling so readers never see a
/// partial file.
fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut tmp = File::create(&tmp_path).map_err(io_error("create temp file", &tmp_path))?;
    tmp.write_all(bytes)
        .map_err(io_error("write temp file", &tmp_path))?;
    tmp.sync_all().map_err(io_error("sync temp file", &tmp_path))?;
    drop(tmp);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error("rename to final", path)(e));
    }
    Ok(())
}

/// Save an analysis file atomically as pretty JSON.
///
/// # Example
///
/// ```rust,no_run
/// use cantilever_core::file_io::save_analysis_file;
/// use cantilever_core::project::AnalysisFile;
/// use std::path::Path;
///
/// save_analysis_file(&AnalysisFile::new("Engineer", "26-001"), Path::new("bracket.cbm"))?;
/// # Ok::<(), cantilever_core::errors::CalcError>(())
/// ```
pub fn save_analysis_file(file: &AnalysisFile, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(file)
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())?;
    log::debug!("saved {} runs to {}", file.run_count(), path.display());
    Ok(())
}

/// Load an analysis file and check its schema version.
///
/// # Errors
/// - `FileError` if the file cannot be read
/// - `SerializationError` if it is not a valid analysis file
/// - `VersionMismatch` if it was written by an incompatible schema
pub fn load_analysis_file(path: &Path) -> CalcResult<AnalysisFile> {
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
    let file: AnalysisFile = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;
    validate_version(&file.meta.version)?;
    Ok(file)
}

/// Load an analysis file along with any live lock held on it.
///
/// A `Some` lock means the file should be treated as read-only.
pub fn load_analysis_file_with_lock_check(
    path: &Path,
) -> CalcResult<(AnalysisFile, Option<LockInfo>)> {
    let file = load_analysis_file(path)?;
    Ok((file, FileLock::check(path)))
}

/// Read a single [`CantileverInput`] JSON document.
///
/// The input is parsed but not validated; [`analyze`](crate::analyze)
/// validates it.
pub fn load_input(path: &Path) -> CalcResult<CantileverInput> {
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
    serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid input JSON in {}: {}", path.display(), e))
    })
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(|p| p.parse::<u32>());
    let major = parts.next()?.ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// Majors must match; within 0.x a newer minor is also rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = parse_version(file_version).ok_or_else(mismatch)?;
    let (our_major, our_minor) = parse_version(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != our_major || (our_major == 0 && file_minor > our_minor) {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("cantilever_test_{}_{}.cbm", name, std::process::id()))
    }

    #[test]
    fn test_lock_path_generation() {
        assert_eq!(
            lock_path_for(Path::new("/jobs/bracket.cbm")),
            Path::new("/jobs/bracket.cbm.lock")
        );
        assert_eq!(lock_path_for(Path::new("notes")), Path::new("notes.lock"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut file = AnalysisFile::new("Test Engineer", "TEST-001");
        let id = file.add_run(CantileverInput::default());

        save_analysis_file(&file, &path).unwrap();
        let loaded = load_analysis_file(&path).unwrap();

        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.get_run(&id), file.get_run(&id));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic");
        save_analysis_file(&AnalysisFile::default(), &path).unwrap();

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        assert!(!PathBuf::from(tmp).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer_schema");
        let mut file = AnalysisFile::default();
        file.meta.version = "0.9.0".to_string();
        save_analysis_file(&file, &path).unwrap();

        let err = load_analysis_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_analysis_file(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_input() {
        let path = temp_dir().join(format!("cantilever_input_{}.json", std::process::id()));
        let json = serde_json::to_string(&CantileverInput::default()).unwrap();
        fs::write(&path, json).unwrap();

        let input = load_input(&path).unwrap();
        assert_eq!(input.load.position_m, 0.7);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_input(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_path("lock");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        assert_eq!(lock.target(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_stale_lock_is_taken_over() {
        let path = temp_path("stale");
        let lock_path = lock_path_for(&path);
        let old = LockInfo {
            user_id: "someone@else".to_string(),
            machine: "elsewhere".to_string(),
            pid: 1,
            locked_at: Utc::now() - Duration::hours(48),
        };
        fs::write(&lock_path, serde_json::to_string(&old).unwrap()).unwrap();
        assert!(FileLock::check(&path).is_none());

        let lock = FileLock::acquire(&path, "me@here").unwrap();
        assert_eq!(lock.info.user_id, "me@here");
        drop(lock);
        assert!(!lock_path.exists());
    }

    #[test]
    fn test_live_foreign_lock_blocks() {
        let path = temp_path("foreign");
        let lock_path = lock_path_for(&path);
        let live = LockInfo {
            user_id: "someone@else".to_string(),
            machine: "another-machine-entirely".to_string(),
            pid: 1,
            locked_at: Utc::now(),
        };
        fs::write(&lock_path, serde_json::to_string(&live).unwrap()).unwrap();

        let err = FileLock::acquire(&path, "me@here").unwrap_err();
        assert!(err.is_recoverable());
        assert!(lock_path.exists(), "a refused acquire must not remove the lock");

        save_analysis_file(&AnalysisFile::new("E", "J"), &path).unwrap();
        let (loaded, holder) = load_analysis_file_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.job_id, "J");
        assert_eq!(holder.unwrap().user_id, "someone@else");

        let _ = fs::remove_file(&lock_path);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_io_error_names_operation_and_path() {
        let path = temp_path("io_error");
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = io_error("read", &path)(not_found);

        assert_eq!(err.error_code(), "FILE_ERROR");
        match err {
            CalcError::FileError { operation, path: p, .. } => {
                assert_eq!(operation, "read");
                assert_eq!(p, path.display().to_string());
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_lock_debug_shows_holder() {
        let path = temp_path("debug");
        let lock = FileLock::acquire(&path, "debug@example.com").unwrap();
        let shown = format!("{:?}", lock);
        assert!(shown.contains("debug@example.com"));
        assert!(shown.contains(".lock"));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
