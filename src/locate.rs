/// Session discovery: scan the root log directory for session folders.
///
/// A session is an immediate subdirectory whose name parses as a collection
/// timestamp. Anything else (stray files, unrelated directories) is skipped
/// with a debug log. A missing or non-directory root is the one fatal error
/// in the whole pipeline.
use chrono::NaiveDateTime;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// One discovered diagnostic session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Directory name, used as the session id.
    pub id: String,
    /// Timestamp parsed from the directory name.
    pub timestamp: NaiveDateTime,
    /// Absolute path of the session directory.
    pub path: PathBuf,
}

/// Errors from session discovery. Only the root itself can fail.
#[derive(Debug)]
pub enum LocateError {
    /// The root log directory does not exist.
    RootMissing { path: PathBuf },
    /// The root path exists but is not a directory.
    RootNotDirectory { path: PathBuf },
    /// The root directory could not be listed.
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::RootMissing { path } => {
                write!(f, "log directory {} does not exist", path.display())
            }
            LocateError::RootNotDirectory { path } => {
                write!(f, "log path {} is not a directory", path.display())
            }
            LocateError::ReadDir { path, source } => {
                write!(f, "failed to list log directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocateError::ReadDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Compact form: `240101-120000`, with an optional collector prefix
/// (`g-240101-120000`).
static COMPACT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]+-)?(\d{6})-(\d{6})$").unwrap());

/// The original collector's form: `23-Aug-25_03-20-07` with an optional
/// fractional-second suffix (`23-Aug-25_03-20-07-44`).
static DATED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}-[A-Za-z]{3}-\d{2}_\d{2}-\d{2}-\d{2})(?:-\d+)?$").unwrap()
});

/// Parse a session timestamp out of a directory name. Returns None for
/// names that follow neither convention.
pub fn parse_session_timestamp(name: &str) -> Option<NaiveDateTime> {
    if let Some(caps) = COMPACT_NAME.captures(name) {
        let compact = format!("{}{}", &caps[1], &caps[2]);
        return NaiveDateTime::parse_from_str(&compact, "%y%m%d%H%M%S").ok();
    }
    if let Some(caps) = DATED_NAME.captures(name) {
        return NaiveDateTime::parse_from_str(&caps[1], "%d-%b-%y_%H-%M-%S").ok();
    }
    None
}

/// Scan `root` for session directories.
///
/// Returns the sessions in directory-listing order; the summary builder
/// sorts by timestamp later. An existing but empty root is success with an
/// empty vec.
pub fn discover_sessions(root: &Path) -> Result<Vec<Session>, LocateError> {
    if !root.exists() {
        return Err(LocateError::RootMissing {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(LocateError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(root).map_err(|e| LocateError::ReadDir {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut sessions = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        match parse_session_timestamp(&name) {
            Some(timestamp) => sessions.push(Session {
                id: name,
                timestamp,
                path,
            }),
            None => {
                tracing::debug!(dir = %name, "skipping non-session directory");
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        count = sessions.len(),
        "discovered diagnostic sessions"
    );
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_compact_name() {
        let ts = parse_session_timestamp("240101-120000").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_compact_name_with_prefix() {
        let ts = parse_session_timestamp("g-240101-120000").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-01 12:00:00");
    }

    #[test]
    fn parse_dated_collector_name() {
        let ts = parse_session_timestamp("23-Aug-25_03-20-07-44").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2025, 8, 23)
                .unwrap()
                .and_hms_opt(3, 20, 7)
                .unwrap()
        );
    }

    #[test]
    fn parse_dated_name_without_fraction() {
        assert!(parse_session_timestamp("23-Aug-25_03-20-07").is_some());
    }

    #[test]
    fn reject_non_session_names() {
        assert!(parse_session_timestamp("archive").is_none());
        assert!(parse_session_timestamp("240101").is_none());
        assert!(parse_session_timestamp("240101-12000").is_none());
        assert!(parse_session_timestamp("24-01-01_12-00-00").is_none());
        // Calendar-invalid date inside a well-formed name.
        assert!(parse_session_timestamp("241301-120000").is_none());
    }

    #[test]
    fn discover_finds_only_session_dirs() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("g-240101-120000")).unwrap();
        fs::create_dir(tmp.path().join("240102-080000")).unwrap();
        fs::create_dir(tmp.path().join("not-a-session")).unwrap();
        fs::write(tmp.path().join("240103-090000"), "a file, not a dir").unwrap();

        let mut sessions = discover_sessions(tmp.path()).unwrap();
        sessions.sort_by(|a, b| a.id.cmp(&b.id));
        let ids: Vec<_> = sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["240102-080000", "g-240101-120000"]);
    }

    #[test]
    fn discover_empty_root_is_success() {
        let tmp = tempdir().unwrap();
        let sessions = discover_sessions(tmp.path()).unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn discover_missing_root_is_fatal() {
        let err = discover_sessions(Path::new("/nonexistent/diagsift-logs")).unwrap_err();
        assert!(matches!(err, LocateError::RootMissing { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn discover_root_file_is_fatal() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("logs");
        fs::write(&file, "").unwrap();
        let err = discover_sessions(&file).unwrap_err();
        assert!(matches!(err, LocateError::RootNotDirectory { .. }));
    }
}
