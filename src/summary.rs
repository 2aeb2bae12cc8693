/// Summary table: one row per session, sorted by timestamp ascending.
///
/// Columns are the union of all fields present in any record, in the
/// canonical rule-table order, so an unchanged log directory always renders
/// the same table byte for byte. Sessions with sparse data keep their row;
/// absent fields stay missing rather than being dropped or zeroed.
use crate::aggregate::SessionRecord;
use crate::extract::{self, FieldValue};
use crate::filetype::FileType;

#[derive(Debug)]
pub struct SummaryTable {
    /// Rows sorted by (timestamp, session id).
    pub rows: Vec<SessionRecord>,
    /// Field columns present in at least one row, canonical order. The
    /// session id, timestamp, and files-parsed count are implicit leading
    /// columns handled by the exporters.
    pub columns: Vec<&'static str>,
}

/// Build the table from the collected records.
pub fn build(mut records: Vec<SessionRecord>) -> SummaryTable {
    // Tie-break on the id so equal timestamps still order deterministically.
    records.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.session.cmp(&b.session))
    });

    let columns = extract::field_order()
        .into_iter()
        .filter(|field| records.iter().any(|r| r.fields.contains_key(field)))
        .collect();

    SummaryTable {
        rows: records,
        columns,
    }
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A cell by row index and column name; None is a missing cell.
    pub fn cell(&self, row: usize, column: &str) -> Option<&FieldValue> {
        self.rows.get(row).and_then(|r| r.fields.get(column))
    }

    /// All present values of one column, paired with the row's timestamp,
    /// in row order.
    pub fn column_series(&self, column: &str) -> Vec<(chrono::NaiveDateTime, &FieldValue)> {
        self.rows
            .iter()
            .filter_map(|r| r.fields.get(column).map(|v| (r.timestamp, v)))
            .collect()
    }

    /// Projection: columns contributed by the given file types, restricted
    /// to columns actually present in the table.
    pub fn columns_for(&self, types: &[FileType]) -> Vec<&'static str> {
        let mut wanted: Vec<&'static str> = Vec::new();
        for &ft in types {
            wanted.extend(extract::fields_of(ft));
        }
        self.columns
            .iter()
            .copied()
            .filter(|c| wanted.contains(c))
            .collect()
    }

    /// Battery-only view (all three battery dump types).
    pub fn battery_columns(&self) -> Vec<&'static str> {
        self.columns_for(&[
            FileType::BatteryBasic,
            FileType::BatteryStats,
            FileType::BatteryHardware,
        ])
    }

    /// Thermal-only view.
    pub fn thermal_columns(&self) -> Vec<&'static str> {
        self.columns_for(&[FileType::Thermal])
    }
}
