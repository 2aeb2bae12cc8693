/// Plain-text battery and thermal report over the summary table.
///
/// Mirrors what the table alone cannot show at a glance: battery level
/// statistics and drain rate between sessions, per-sensor temperature
/// ranges with high-temperature warnings, and the device identity line.
use crate::extract::FieldValue;
use crate::summary::SummaryTable;
use std::fmt::Write;

/// Temperature columns considered by the report, with their warning
/// thresholds in °C (battery cells degrade above 45, silicon throttles
/// above 80).
const TEMP_COLUMNS: &[(&str, f64)] = &[
    ("battery_temp_c", 45.0),
    ("thermal_cpu_temp", 80.0),
    ("thermal_gpu_temp", 80.0),
    ("thermal_skin_temp", 45.0),
];

#[derive(Debug, PartialEq)]
struct ColumnStats {
    count: usize,
    mean: f64,
    min: f64,
    max: f64,
}

fn column_stats(table: &SummaryTable, column: &str) -> Option<ColumnStats> {
    let values: Vec<f64> = table
        .column_series(column)
        .iter()
        .filter_map(|(_, v)| v.as_f64())
        .collect();
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some(ColumnStats {
        count: values.len(),
        mean: sum / values.len() as f64,
        min,
        max,
    })
}

/// Battery drain rates in percent per hour between consecutive sessions
/// with a level reading. Positive means charging.
fn drain_rates(table: &SummaryTable) -> Vec<f64> {
    let series: Vec<(chrono::NaiveDateTime, f64)> = table
        .column_series("battery_level")
        .iter()
        .filter_map(|(ts, v)| v.as_f64().map(|x| (*ts, x)))
        .collect();

    let mut rates = Vec::new();
    for pair in series.windows(2) {
        let hours = (pair[1].0 - pair[0].0).num_seconds() as f64 / 3600.0;
        if hours > 0.0 {
            rates.push((pair[1].1 - pair[0].1) / hours);
        }
    }
    rates
}

/// First present text value of a column, for the device identity line.
fn first_text(table: &SummaryTable, column: &str) -> Option<String> {
    table.column_series(column).iter().find_map(|(_, v)| {
        if let FieldValue::Text(s) = v {
            Some(s.clone())
        } else {
            None
        }
    })
}

/// Render the full report. Pure function of the table.
pub fn render(table: &SummaryTable) -> String {
    let mut out = String::new();

    writeln!(out, "=== BATTERY ===").ok();
    match column_stats(table, "battery_level") {
        Some(stats) => {
            writeln!(
                out,
                "level: avg {:.1}%  min {:.0}%  max {:.0}%  ({} readings)",
                stats.mean, stats.min, stats.max, stats.count
            )
            .ok();
            let rates = drain_rates(table);
            if !rates.is_empty() {
                let mean = rates.iter().sum::<f64>() / rates.len() as f64;
                let discharge: Vec<f64> = rates.iter().cloned().filter(|r| *r < 0.0).collect();
                let charge: Vec<f64> = rates.iter().cloned().filter(|r| *r > 0.0).collect();
                writeln!(out, "rate: avg {:+.2}%/h over {} intervals", mean, rates.len()).ok();
                if !discharge.is_empty() {
                    let avg = discharge.iter().sum::<f64>() / discharge.len() as f64;
                    writeln!(out, "  discharging: {:.2}%/h average", avg).ok();
                }
                if !charge.is_empty() {
                    let avg = charge.iter().sum::<f64>() / charge.len() as f64;
                    writeln!(out, "  charging: {:+.2}%/h average", avg).ok();
                }
            }
        }
        None => {
            writeln!(out, "no battery level readings").ok();
        }
    }

    writeln!(out, "\n=== TEMPERATURES ===").ok();
    let mut any_temp = false;
    for (column, threshold) in TEMP_COLUMNS {
        if let Some(stats) = column_stats(table, column) {
            any_temp = true;
            write!(
                out,
                "{}: avg {:.1}C  min {:.1}C  max {:.1}C",
                column, stats.mean, stats.min, stats.max
            )
            .ok();
            if stats.max > *threshold {
                write!(out, "  WARNING: exceeds {:.0}C", threshold).ok();
            }
            writeln!(out).ok();
        }
    }
    if !any_temp {
        writeln!(out, "no temperature readings").ok();
    }

    writeln!(out, "\n=== DEVICE ===").ok();
    let model = first_text(table, "model");
    let brand = first_text(table, "brand");
    let version = first_text(table, "android_version");
    match (&model, &brand) {
        (None, None) => {
            writeln!(out, "device identity unknown").ok();
        }
        _ => {
            writeln!(
                out,
                "{} {} (Android {})",
                brand.as_deref().unwrap_or("?"),
                model.as_deref().unwrap_or("?"),
                version.as_deref().unwrap_or("?")
            )
            .ok();
        }
    }

    writeln!(out, "\nsessions: {}", table.len()).ok();
    if let (Some(first), Some(last)) = (table.rows.first(), table.rows.last()) {
        let span = last.timestamp - first.timestamp;
        writeln!(
            out,
            "collection period: {} to {} ({} h {} m)",
            first.timestamp.format("%Y-%m-%d %H:%M:%S"),
            last.timestamp.format("%Y-%m-%d %H:%M:%S"),
            span.num_hours(),
            span.num_minutes() % 60
        )
        .ok();
    }

    out
}
