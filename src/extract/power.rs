/// Rule table for `dumpsys power`.
use super::{Convert, Rule};

pub const RULES: &[Rule] = &[
    Rule::new("power_state", r"(?m)^\s*mWakefulness=(\w+)", Convert::Text),
    Rule::new("power_wake_locks", r"Wake Locks: size=(\d+)", Convert::Int),
    Rule::new(
        "power_suspend_blockers",
        r"Suspend Blockers: size=(\d+)",
        Convert::Int,
    ),
    Rule::new(
        "power_battery_saver",
        r"mBatterySaverEnabled=(true|false)",
        Convert::Bool,
    ),
];
