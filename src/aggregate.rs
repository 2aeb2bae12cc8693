/// Session aggregation: run every file type's extractor over one session
/// directory and merge the results into a single flat record.
///
/// All per-file failures degrade to missing fields and are noted in the
/// `RunLog`; a session never fails as a whole. File types are processed in
/// `filetype::ALL` order, so a (never expected) field-name collision is
/// resolved by the later type, with a warning.
use crate::extract::{self, FieldValue};
use crate::filetype::{self, FileType};
use crate::locate::Session;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::path::PathBuf;

/// One row of the summary table: the union of all fields extracted for a
/// session. Missing fields are simply absent from `fields`.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Session directory name.
    pub session: String,
    /// Timestamp parsed from the directory name.
    pub timestamp: NaiveDateTime,
    /// How many dump files were present and readable.
    pub files_parsed: u32,
    pub fields: HashMap<&'static str, FieldValue>,
}

/// Side log of everything that could not be read or looked suspicious.
/// Never fatal; surfaced to the caller alongside the table.
#[derive(Debug, Default)]
pub struct RunLog {
    /// Files that existed but could not be read, with the I/O error text.
    pub unreadable: Vec<(PathBuf, String)>,
    /// Field-name collisions, as (field, earlier type, later type).
    pub collisions: Vec<(&'static str, FileType, FileType)>,
}

impl RunLog {
    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty() && self.collisions.is_empty()
    }
}

/// Parse every known dump file of one session into a `SessionRecord`.
pub fn aggregate_session(session: &Session, log: &mut RunLog) -> SessionRecord {
    let mut fields: HashMap<&'static str, FieldValue> = HashMap::new();
    let mut origin: HashMap<&'static str, FileType> = HashMap::new();
    let mut files_parsed = 0u32;

    for ft in filetype::ALL {
        let path = session.path.join(ft.filename());
        let text = match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(session = %session.id, file_type = %ft, "dump file absent");
                continue;
            }
            Err(e) => {
                tracing::warn!(
                    session = %session.id,
                    path = %path.display(),
                    error = %e,
                    "dump file unreadable, fields left missing"
                );
                log.unreadable.push((path, e.to_string()));
                continue;
            }
        };

        files_parsed += 1;
        for (field, value) in extract::extract(ft, &text) {
            if let Some(&earlier) = origin.get(field) {
                tracing::warn!(
                    session = %session.id,
                    field,
                    earlier = %earlier,
                    later = %ft,
                    "field defined by two file types, keeping the later value"
                );
                log.collisions.push((field, earlier, ft));
            }
            origin.insert(field, ft);
            fields.insert(field, value);
        }
    }

    tracing::debug!(
        session = %session.id,
        files_parsed,
        fields = fields.len(),
        "session aggregated"
    );

    SessionRecord {
        session: session.id.clone(),
        timestamp: session.timestamp,
        files_parsed,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::parse_session_timestamp;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn session_at(dir: &Path, name: &str) -> Session {
        let path = dir.join(name);
        fs::create_dir_all(&path).unwrap();
        Session {
            id: name.to_string(),
            timestamp: parse_session_timestamp(name).unwrap(),
            path,
        }
    }

    #[test]
    fn battery_fields_land_in_the_record() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "g-240101-120000");
        fs::write(
            session.path.join("battery_basic.txt"),
            "level: 42\ntemp: 285\n",
        )
        .unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        assert_eq!(record.fields["battery_level"], FieldValue::Int(42));
        assert_eq!(record.fields["battery_temp_c"], FieldValue::Float(28.5));
        assert_eq!(record.files_parsed, 1);
        assert!(log.is_clean());
    }

    #[test]
    fn multiple_files_merge_into_one_record() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        fs::write(session.path.join("battery_basic.txt"), "level: 77\n").unwrap();
        fs::write(
            session.path.join("device_info.txt"),
            "Model: CPH2581\nBrand: OnePlus\n",
        )
        .unwrap();
        fs::write(
            session.path.join("thermal.txt"),
            "Thermal Status: 0\nTemperature{mValue=36.7, mType=3, mName=CPU, mStatus=0}\n",
        )
        .unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        assert_eq!(record.files_parsed, 3);
        assert_eq!(record.fields["battery_level"], FieldValue::Int(77));
        assert_eq!(record.fields["model"], FieldValue::Text("CPH2581".into()));
        assert_eq!(record.fields["thermal_cpu_temp"], FieldValue::Float(36.7));
    }

    #[test]
    fn empty_session_dir_yields_empty_record() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        assert_eq!(record.files_parsed, 0);
        assert!(record.fields.is_empty());
        assert!(log.is_clean());
    }

    #[test]
    fn absent_file_type_leaves_its_fields_missing() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        fs::write(session.path.join("battery_basic.txt"), "level: 50\n").unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        assert!(record.fields.contains_key("battery_level"));
        for field in crate::extract::fields_of(crate::filetype::FileType::Thermal) {
            assert!(!record.fields.contains_key(field));
        }
    }

    #[test]
    fn malformed_dump_degrades_to_missing() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        fs::write(
            session.path.join("battery_basic.txt"),
            b"total garbage \xc3\x28 with broken bytes" as &[u8],
        )
        .unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        // The file counts as readable; its fields just did not match.
        assert_eq!(record.files_parsed, 1);
        assert!(!record.fields.contains_key("battery_level"));
        assert!(log.unreadable.is_empty());
    }

    #[test]
    fn unreadable_file_lands_in_the_run_log() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        // A directory where the dump file should be: fs::read fails with a
        // non-NotFound error, which must be logged, not fatal.
        fs::create_dir(session.path.join("battery_basic.txt")).unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);

        assert_eq!(record.files_parsed, 0);
        assert!(record.fields.is_empty());
        assert_eq!(log.unreadable.len(), 1);
        assert_eq!(log.unreadable[0].0, session.path.join("battery_basic.txt"));
    }

    #[test]
    fn non_utf8_dump_is_read_lossily() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        let mut bytes = b"level: 13\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        fs::write(session.path.join("battery_basic.txt"), bytes).unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);
        assert_eq!(record.fields["battery_level"], FieldValue::Int(13));
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let tmp = tempdir().unwrap();
        let session = session_at(tmp.path(), "240101-120000");
        fs::write(session.path.join("notes.txt"), "level: 99\n").unwrap();

        let mut log = RunLog::default();
        let record = aggregate_session(&session, &mut log);
        assert_eq!(record.files_parsed, 0);
        assert!(record.fields.is_empty());
    }
}
