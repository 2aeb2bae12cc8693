/// The whole parse run: discover sessions, aggregate each one, build the
/// summary table. Stateless: every invocation rebuilds the table from the
/// directory as it is now.
///
/// Only a bad root directory is fatal. Every per-file and per-field problem
/// degrades to missing values and is recorded in the outcome's `RunLog`.
use crate::aggregate::{self, RunLog};
use crate::locate::{self, LocateError};
use crate::summary::{self, SummaryTable};
use std::path::Path;

/// Result of a completed run: the table plus the side log of recovered
/// problems.
#[derive(Debug)]
pub struct ParseOutcome {
    pub table: SummaryTable,
    pub log: RunLog,
}

#[derive(Debug)]
pub enum PipelineError {
    Locate(LocateError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Locate(e) => write!(f, "session discovery failed: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Locate(e) => Some(e),
        }
    }
}

impl From<LocateError> for PipelineError {
    fn from(e: LocateError) -> Self {
        PipelineError::Locate(e)
    }
}

/// Parse every session under `root` into a summary table.
pub fn run(root: &Path) -> Result<ParseOutcome, PipelineError> {
    let sessions = locate::discover_sessions(root)?;

    let mut log = RunLog::default();
    let mut records = Vec::with_capacity(sessions.len());
    for session in &sessions {
        records.push(aggregate::aggregate_session(session, &mut log));
    }

    let table = summary::build(records);
    tracing::info!(
        rows = table.len(),
        columns = table.columns.len(),
        unreadable_files = log.unreadable.len(),
        "summary table built"
    );

    Ok(ParseOutcome { table, log })
}
