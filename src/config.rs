/// Top-level configuration loaded from diagsift.toml.
///
/// Every section has defaults, so a missing config file is fine; the CLI
/// flags override whatever was loaded.
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SiftConfig {
    pub input: InputConfig,
    pub export: ExportConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Root directory containing the session folders.
    pub logs_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ExportConfig {
    /// CSV output path; no CSV written when unset.
    pub csv: Option<PathBuf>,
    /// JSON output path; no JSON written when unset.
    pub json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the battery/thermal report after parsing.
    pub enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist.
/// A file that exists but cannot be read or parsed is an error, so a typo in
/// the config should not silently run with defaults.
pub fn load(path: &Path) -> Result<SiftConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SiftConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
