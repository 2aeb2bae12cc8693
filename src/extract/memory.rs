/// Rule table for `dumpsys meminfo`. RAM totals are comma-grouped kilobyte
/// counts (`Total RAM: 11,484,136K ...`), stored as plain integer KB.
use super::{Convert, Rule};

pub const RULES: &[Rule] = &[
    Rule::new(
        "mem_total_ram_kb",
        r"Total RAM:\s*([\d,]+)\s*K",
        Convert::CommaGroupedInt,
    ),
    Rule::new(
        "mem_free_ram_kb",
        r"Free RAM:\s*([\d,]+)\s*K",
        Convert::CommaGroupedInt,
    ),
    Rule::new(
        "mem_used_ram_kb",
        r"Used RAM:\s*([\d,]+)\s*K",
        Convert::CommaGroupedInt,
    ),
    Rule::new(
        "mem_lost_ram_kb",
        r"Lost RAM:\s*([\d,]+)\s*K",
        Convert::CommaGroupedInt,
    ),
];
