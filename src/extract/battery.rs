/// Rule tables for the three battery dumps.
///
/// `battery_basic` is `dumpsys battery` output: one `key: value` pair per
/// line. Voltage arrives in millivolts and temperature in tenths of a
/// degree, so both carry explicit conversions.
use super::{Convert, Rule};

pub const BASIC_RULES: &[Rule] = &[
    Rule::new("battery_level", r"(?m)^\s*level:\s*(-?\d+)\s*$", Convert::Int),
    Rule::new("battery_scale", r"(?m)^\s*scale:\s*(\d+)\s*$", Convert::Int),
    Rule::new(
        "battery_status",
        r"(?m)^\s*status:\s*(\d+)\s*$",
        Convert::Int,
    ),
    Rule::new(
        "battery_health",
        r"(?m)^\s*health:\s*(\d+)\s*$",
        Convert::Int,
    ),
    Rule::new(
        "battery_voltage_v",
        r"(?m)^\s*voltage:\s*(\d+)\s*$",
        Convert::MillivoltsToVolts,
    ),
    // `dumpsys battery` prints `temperature:`; some vendor services shorten
    // it to `temp:`. Both are tenths of a degree.
    Rule::new(
        "battery_temp_c",
        r"(?m)^\s*temp(?:erature)?:\s*(-?\d+)\s*$",
        Convert::TenthsCelsius,
    ),
    Rule::new(
        "battery_ac_powered",
        r"(?m)^\s*AC powered:\s*(true|false)",
        Convert::Bool,
    ),
    Rule::new(
        "battery_usb_powered",
        r"(?m)^\s*USB powered:\s*(true|false)",
        Convert::Bool,
    ),
    Rule::new(
        "battery_wireless_powered",
        r"(?m)^\s*Wireless powered:\s*(true|false)",
        Convert::Bool,
    ),
    Rule::new(
        "battery_present",
        r"(?m)^\s*present:\s*(true|false)",
        Convert::Bool,
    ),
    Rule::new(
        "battery_technology",
        r"(?m)^\s*technology:\s*(\S.*)$",
        Convert::Text,
    ),
];

/// `dumpsys batterystats` summary header, plus per-app usage lines summed
/// into device-wide millisecond totals.
pub const STATS_RULES: &[Rule] = &[
    Rule::new(
        "battery_capacity_mah",
        r"(?m)^\s*Capacity:\s*(\d+)",
        Convert::Int,
    ),
    Rule::new(
        "battery_computed_drain_mah",
        r"Computed drain:\s*([\d.]+)",
        Convert::Float,
    ),
    Rule::new(
        "battery_stats_period",
        r"Statistics since ([a-z ]+):",
        Convert::Text,
    ),
    Rule::sum("battery_screen_time_ms", r"Screen: (\d+) ms"),
    Rule::sum("battery_cpu_time_ms", r"CPU: (\d+) ms"),
    Rule::sum("battery_wake_lock_ms", r"Wake lock: (\d+) ms"),
];

/// sysfs power-supply dump (`POWER_SUPPLY_*` key=value lines). Charge
/// counters are microamp-hours, current is microamps, temperature tenths
/// of a degree.
pub const HARDWARE_RULES: &[Rule] = &[
    Rule::new(
        "battery_cycle_count",
        r"(?m)^POWER_SUPPLY_CYCLE_COUNT=(\d+)",
        Convert::Int,
    ),
    Rule::new(
        "battery_charge_full_uah",
        r"(?m)^POWER_SUPPLY_CHARGE_FULL=(\d+)",
        Convert::Int,
    ),
    Rule::new(
        "battery_charge_design_uah",
        r"(?m)^POWER_SUPPLY_CHARGE_FULL_DESIGN=(\d+)",
        Convert::Int,
    ),
    Rule::new(
        "battery_current_now_ua",
        r"(?m)^POWER_SUPPLY_CURRENT_NOW=(-?\d+)",
        Convert::Int,
    ),
    Rule::new(
        "battery_hw_temp_c",
        r"(?m)^POWER_SUPPLY_TEMP=(-?\d+)",
        Convert::TenthsCelsius,
    ),
];
