/// Field extraction: apply a fixed rule table to one dump file's text.
///
/// Extraction rules are data, not code: each `FileType` owns an ordered list
/// of `Rule`s, and `extract()` walks that list top to bottom. A rule that
/// does not match simply produces no value. "Missing" is the absence of the
/// field, never zero or an empty string, so downstream consumers can tell
/// "value was 0" apart from "field not found". Malformed input never panics
/// and never fails the session.
pub mod battery;
pub mod cpu;
pub mod device;
pub mod memory;
pub mod network;
pub mod power;
pub mod thermal;

use crate::filetype::FileType;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A scalar value extracted from a dump file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Render for tabular (CSV) output. Missing cells are handled by the
    /// exporter, so this only covers present values.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Numeric view, for the report's statistics. Text and bool are not
    /// numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

/// Unit conversion applied to a rule's captured text.
///
/// Every conversion is explicit and fixed per field, so the same raw input
/// always produces the same stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convert {
    /// Plain integer.
    Int,
    /// Plain float.
    Float,
    /// Trimmed text.
    Text,
    /// `true` / `false`.
    Bool,
    /// Tenths of a degree Celsius: `385` → `38.5`.
    TenthsCelsius,
    /// Millivolts to volts: `4123` → `4.123`.
    MillivoltsToVolts,
    /// Comma-grouped kilobyte count: `11,484,136` → `11484136`.
    CommaGroupedInt,
    /// Float where values above 100 are tenths of a degree. The thermal
    /// service reports some sensors pre-scaled and some not; this matches
    /// the collector's convention.
    AutoTenths,
}

/// How a rule consumes its pattern's matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Take the first occurrence only. Repeated matches are ignored so
    /// results do not depend on how much of the dump the device emitted.
    First,
    /// Store the number of occurrences as an integer.
    Count,
    /// Sum the captured group over every occurrence. Used for per-app
    /// millisecond totals where the dump lists one line per app.
    Sum,
}

/// One extraction rule: a named field, the pattern locating it, which
/// capture group holds the raw text, and the conversion applied to it.
#[derive(Debug)]
pub struct Rule {
    pub field: &'static str,
    pub pattern: &'static str,
    pub group: usize,
    pub kind: RuleKind,
    pub convert: Convert,
}

impl Rule {
    /// Shorthand for the common single-capture first-match rule.
    pub const fn new(field: &'static str, pattern: &'static str, convert: Convert) -> Self {
        Rule {
            field,
            pattern,
            group: 1,
            kind: RuleKind::First,
            convert,
        }
    }

    /// A rule that counts pattern occurrences instead of capturing.
    pub const fn count(field: &'static str, pattern: &'static str) -> Self {
        Rule {
            field,
            pattern,
            group: 0,
            kind: RuleKind::Count,
            convert: Convert::Int,
        }
    }

    /// A rule that sums the captured integer over all occurrences.
    pub const fn sum(field: &'static str, pattern: &'static str) -> Self {
        Rule {
            field,
            pattern,
            group: 1,
            kind: RuleKind::Sum,
            convert: Convert::Int,
        }
    }

    /// A first-match rule reading a capture group other than 1.
    pub const fn group(
        field: &'static str,
        pattern: &'static str,
        group: usize,
        convert: Convert,
    ) -> Self {
        Rule {
            field,
            pattern,
            group,
            kind: RuleKind::First,
            convert,
        }
    }
}

/// The rule table for one file type.
pub fn rules(file_type: FileType) -> &'static [Rule] {
    match file_type {
        FileType::BatteryBasic => battery::BASIC_RULES,
        FileType::BatteryStats => battery::STATS_RULES,
        FileType::BatteryHardware => battery::HARDWARE_RULES,
        FileType::DeviceInfo => device::RULES,
        FileType::Thermal => thermal::RULES,
        FileType::Power => power::RULES,
        FileType::Cpuinfo => cpu::CPUINFO_RULES,
        FileType::Procstats => cpu::PROCSTATS_RULES,
        FileType::MemoryInfo => memory::RULES,
        FileType::Wifi => network::WIFI_RULES,
        FileType::Connectivity => network::CONNECTIVITY_RULES,
        FileType::Telephony => network::TELEPHONY_RULES,
    }
}

/// All field names across every rule table, in table order. This is the
/// canonical column order of the summary table.
pub fn field_order() -> Vec<&'static str> {
    let mut order = Vec::new();
    for ft in crate::filetype::ALL {
        for rule in rules(ft) {
            order.push(rule.field);
        }
    }
    order
}

/// Field names defined by one file type, in rule order.
pub fn fields_of(file_type: FileType) -> Vec<&'static str> {
    rules(file_type).iter().map(|r| r.field).collect()
}

/// Compiled patterns, keyed by file type. All patterns are static and
/// covered by tests, so compilation cannot fail at runtime.
static COMPILED: LazyLock<HashMap<FileType, Vec<Regex>>> = LazyLock::new(|| {
    crate::filetype::ALL
        .iter()
        .map(|&ft| {
            let compiled = rules(ft)
                .iter()
                .map(|r| Regex::new(r.pattern).unwrap())
                .collect();
            (ft, compiled)
        })
        .collect()
});

/// Extracted (field, value) pairs, in rule-table order.
pub type ExtractedFields = Vec<(&'static str, FieldValue)>;

/// Apply a file type's rule table to raw dump text.
///
/// Fields whose pattern does not match, or whose captured text does not
/// convert, are omitted. Rules run in table order on every call.
pub fn extract(file_type: FileType, text: &str) -> ExtractedFields {
    let table = rules(file_type);
    let patterns = &COMPILED[&file_type];
    let mut out = Vec::new();

    for (rule, re) in table.iter().zip(patterns) {
        let value = match rule.kind {
            RuleKind::Count => {
                let n = re.find_iter(text).count();
                Some(FieldValue::Int(n as i64))
            }
            RuleKind::Sum => {
                let total: i64 = re
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(rule.group))
                    .filter_map(|m| m.as_str().parse::<i64>().ok())
                    .sum();
                Some(FieldValue::Int(total))
            }
            RuleKind::First => re
                .captures(text)
                .and_then(|caps| caps.get(rule.group))
                .and_then(|m| convert(rule.convert, m.as_str())),
        };
        if let Some(v) = value {
            out.push((rule.field, v));
        } else if rule.kind == RuleKind::First {
            tracing::debug!(
                file_type = %file_type,
                field = rule.field,
                "pattern did not match, field left missing"
            );
        }
    }

    out
}

/// Convert captured text per the rule's unit. Returns None when the text
/// does not parse; the field stays missing rather than storing a wrong
/// value.
fn convert(convert: Convert, raw: &str) -> Option<FieldValue> {
    let raw = raw.trim();
    match convert {
        Convert::Int => raw.parse::<i64>().ok().map(FieldValue::Int),
        Convert::Float => raw.parse::<f64>().ok().map(FieldValue::Float),
        Convert::Text => {
            if raw.is_empty() {
                None
            } else {
                Some(FieldValue::Text(raw.to_string()))
            }
        }
        Convert::Bool => match raw.to_ascii_lowercase().as_str() {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        Convert::TenthsCelsius => raw
            .parse::<f64>()
            .ok()
            .map(|v| FieldValue::Float(v / 10.0)),
        Convert::MillivoltsToVolts => raw
            .parse::<f64>()
            .ok()
            .map(|v| FieldValue::Float(v / 1000.0)),
        Convert::CommaGroupedInt => raw
            .replace(',', "")
            .parse::<i64>()
            .ok()
            .map(FieldValue::Int),
        Convert::AutoTenths => raw.parse::<f64>().ok().map(|v| {
            if v > 100.0 {
                FieldValue::Float(v / 10.0)
            } else {
                FieldValue::Float(v)
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        // Forces the LazyLock, which would panic on a bad pattern.
        for ft in crate::filetype::ALL {
            assert_eq!(COMPILED[&ft].len(), rules(ft).len());
        }
    }

    #[test]
    fn field_names_are_globally_unique() {
        // Cross-type collisions are tolerated at runtime (later type wins),
        // but the shipped tables must not contain any.
        let order = field_order();
        let unique: std::collections::HashSet<_> = order.iter().collect();
        assert_eq!(order.len(), unique.len());
    }

    #[test]
    fn convert_tenths_is_exact() {
        assert_eq!(
            convert(Convert::TenthsCelsius, "385"),
            Some(FieldValue::Float(38.5))
        );
    }

    #[test]
    fn convert_millivolts_is_exact() {
        assert_eq!(
            convert(Convert::MillivoltsToVolts, "4123"),
            Some(FieldValue::Float(4.123))
        );
    }

    #[test]
    fn convert_comma_grouped() {
        assert_eq!(
            convert(Convert::CommaGroupedInt, "11,484,136"),
            Some(FieldValue::Int(11484136))
        );
    }

    #[test]
    fn convert_auto_tenths_scales_only_large_values() {
        assert_eq!(
            convert(Convert::AutoTenths, "367"),
            Some(FieldValue::Float(36.7))
        );
        assert_eq!(
            convert(Convert::AutoTenths, "36.7"),
            Some(FieldValue::Float(36.7))
        );
    }

    #[test]
    fn convert_garbage_is_missing_not_zero() {
        assert_eq!(convert(Convert::Int, "not-a-number"), None);
        assert_eq!(convert(Convert::Bool, "maybe"), None);
        assert_eq!(convert(Convert::Text, "   "), None);
    }

    #[test]
    fn convert_zero_is_a_value() {
        // 0 must survive extraction; only a failed match is "missing".
        assert_eq!(convert(Convert::Int, "0"), Some(FieldValue::Int(0)));
    }

    #[test]
    fn extract_empty_input_yields_count_zero_only() {
        // Count rules always produce a value (possibly 0); match rules
        // produce nothing on empty input.
        let fields = extract(FileType::Procstats, "");
        assert_eq!(fields, vec![("procstats_process_count", FieldValue::Int(0))]);
    }

    #[test]
    fn extract_is_deterministic() {
        let text = "level: 42\ntemp: 285\nvoltage: 4123\n";
        let a = extract(FileType::BatteryBasic, text);
        let b = extract(FileType::BatteryBasic, text);
        assert_eq!(a, b);
    }

    #[test]
    fn render_formats_scalars() {
        assert_eq!(FieldValue::Int(42).render(), "42");
        assert_eq!(FieldValue::Float(28.5).render(), "28.5");
        assert_eq!(FieldValue::Bool(true).render(), "true");
        assert_eq!(FieldValue::Text("OnePlus".into()).render(), "OnePlus");
    }

    #[test]
    fn field_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&FieldValue::Float(38.5)).unwrap(),
            "38.5"
        );
        assert_eq!(serde_json::to_string(&FieldValue::Int(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&FieldValue::Bool(false)).unwrap(),
            "false"
        );
    }
}
