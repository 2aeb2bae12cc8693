/// Rule table for `device_info`: the collector's own header lines plus a
/// few `getprop` build properties in `[key]: [value]` form.
use super::{Convert, Rule};

pub const RULES: &[Rule] = &[
    Rule::new("model", r"(?m)^Model:\s*(.+)$", Convert::Text),
    Rule::new("brand", r"(?m)^Brand:\s*(.+)$", Convert::Text),
    Rule::new(
        "android_version",
        r"(?m)^Android Version:\s*(.+)$",
        Convert::Text,
    ),
    Rule::new(
        "build_id",
        r"\[ro\.build\.id\]:\s*\[([^\]]+)\]",
        Convert::Text,
    ),
    Rule::new(
        "security_patch",
        r"\[ro\.build\.version\.security_patch\]:\s*\[([^\]]+)\]",
        Convert::Text,
    ),
    Rule::new(
        "build_fingerprint",
        r"\[ro\.build\.fingerprint\]:\s*\[([^\]]+)\]",
        Convert::Text,
    ),
];
