/// Rule tables for the three network dumps: `dumpsys wifi`,
/// `dumpsys connectivity`, and `dumpsys telephony.registry`.
use super::{Convert, Rule};

pub const WIFI_RULES: &[Rule] = &[
    Rule::new("wifi_state", r"Wi-Fi is (\w+)", Convert::Text),
    Rule::new("wifi_ssid", r#"SSID:\s*"([^"]+)""#, Convert::Text),
    Rule::new("wifi_rssi", r"RSSI:\s*(-?\d+)", Convert::Int),
    Rule::new(
        "wifi_link_speed_mbps",
        r"Link speed:\s*(\d+)\s*Mbps",
        Convert::Int,
    ),
    Rule::new(
        "wifi_frequency_mhz",
        r"Frequency:\s*(\d+)\s*MHz",
        Convert::Int,
    ),
];

pub const CONNECTIVITY_RULES: &[Rule] = &[
    Rule::new(
        "connectivity_active_network",
        r"(?m)^Active default network:\s*(.+)$",
        Convert::Text,
    ),
    Rule::new(
        "connectivity_mobile_data",
        r"Mobile data enabled:\s*(true|false)",
        Convert::Bool,
    ),
    Rule::count("connectivity_network_count", r"NetworkAgentInfo"),
];

pub const TELEPHONY_RULES: &[Rule] = &[
    Rule::new("telephony_call_state", r"mCallState=(\d+)", Convert::Int),
    Rule::new(
        "telephony_data_state",
        r"mDataConnectionState=(\d+)",
        Convert::Int,
    ),
    Rule::new("telephony_lte_rsrp_dbm", r"rsrp=(-?\d+)", Convert::Int),
];
