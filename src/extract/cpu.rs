/// Rule tables for `dumpsys cpuinfo` and `dumpsys procstats`.
///
/// The cpuinfo load line carries all three averages in one match, read out
/// through capture groups 1-3. Procstats is summarized as a process entry
/// count rather than a per-process breakdown (one row per session means
/// scalar fields only).
use super::{Convert, Rule};

pub const CPUINFO_RULES: &[Rule] = &[
    Rule::group(
        "cpu_load_1m",
        r"Load:\s*([\d.]+)\s*/\s*([\d.]+)\s*/\s*([\d.]+)",
        1,
        Convert::Float,
    ),
    Rule::group(
        "cpu_load_5m",
        r"Load:\s*([\d.]+)\s*/\s*([\d.]+)\s*/\s*([\d.]+)",
        2,
        Convert::Float,
    ),
    Rule::group(
        "cpu_load_15m",
        r"Load:\s*([\d.]+)\s*/\s*([\d.]+)\s*/\s*([\d.]+)",
        3,
        Convert::Float,
    ),
    Rule::new("cpu_total_percent", r"([\d.]+)% TOTAL", Convert::Float),
];

pub const PROCSTATS_RULES: &[Rule] = &[
    // Process entries look like `* com.android.systemui / u0a123 / v34:`.
    Rule::count("procstats_process_count", r"(?m)^\s*\* \S+ / "),
];
