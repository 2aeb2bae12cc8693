/// Table export: CSV (one row per session) and nested JSON (one object per
/// session). Missing cells render as empty CSV fields and are omitted from
/// the JSON objects, keeping "absent" distinct from any real value.
use crate::summary::SummaryTable;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExportError {
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Csv { path, source } => {
                write!(f, "failed to write CSV {}: {}", path.display(), source)
            }
            ExportError::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            ExportError::Json { source } => write!(f, "failed to serialize JSON: {}", source),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv { source, .. } => Some(source),
            ExportError::Io { source, .. } => Some(source),
            ExportError::Json { source } => Some(source),
        }
    }
}

// Naive local time, no offset: session directory names carry no timezone,
// so none is invented here.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Write the table as CSV: `session,timestamp,files_parsed` then the field
/// columns in table order. Missing cells are empty, never "0".
pub fn write_csv(table: &SummaryTable, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut header = vec!["session", "timestamp", "files_parsed"];
    header.extend(&table.columns);
    writer.write_record(&header).map_err(|e| ExportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    for row in &table.rows {
        let mut record = vec![
            row.session.clone(),
            row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            row.files_parsed.to_string(),
        ];
        for column in &table.columns {
            record.push(
                row.fields
                    .get(column)
                    .map(|v| v.render())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record).map_err(|e| ExportError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote CSV export");
    Ok(())
}

/// Build the nested JSON export: session id → record object.
pub fn to_json(table: &SummaryTable) -> Result<String, ExportError> {
    let mut sessions = serde_json::Map::new();
    for row in &table.rows {
        let mut obj = serde_json::Map::new();
        obj.insert(
            "timestamp".to_string(),
            Value::String(row.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        obj.insert(
            "files_parsed".to_string(),
            Value::Number(row.files_parsed.into()),
        );
        let mut fields = serde_json::Map::new();
        for column in &table.columns {
            if let Some(value) = row.fields.get(column) {
                let v = serde_json::to_value(value).map_err(|e| ExportError::Json { source: e })?;
                fields.insert(column.to_string(), v);
            }
        }
        obj.insert("fields".to_string(), Value::Object(fields));
        sessions.insert(row.session.clone(), Value::Object(obj));
    }
    serde_json::to_string_pretty(&Value::Object(sessions))
        .map_err(|e| ExportError::Json { source: e })
}

/// Write the nested JSON export to a file.
pub fn write_json(table: &SummaryTable, path: &Path) -> Result<(), ExportError> {
    let json = to_json(table)?;
    std::fs::write(path, json).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote JSON export");
    Ok(())
}
