/// The fixed set of diagnostic dump kinds a session folder may contain.
///
/// Each variant maps 1:1 to a filename inside the session directory and to
/// one extraction rule table in `crate::extract`. `ALL` is also the
/// aggregation order: when two file types ever define the same field name,
/// the later entry in `ALL` wins (with a warning).
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    BatteryBasic,
    BatteryStats,
    BatteryHardware,
    DeviceInfo,
    Thermal,
    Power,
    Cpuinfo,
    Procstats,
    MemoryInfo,
    Wifi,
    Connectivity,
    Telephony,
}

/// All recognized file types, in processing order.
pub const ALL: [FileType; 12] = [
    FileType::BatteryBasic,
    FileType::BatteryStats,
    FileType::BatteryHardware,
    FileType::DeviceInfo,
    FileType::Thermal,
    FileType::Power,
    FileType::Cpuinfo,
    FileType::Procstats,
    FileType::MemoryInfo,
    FileType::Wifi,
    FileType::Connectivity,
    FileType::Telephony,
];

impl FileType {
    /// The tag used both as the dump filename stem and in log output.
    pub fn tag(&self) -> &'static str {
        match self {
            FileType::BatteryBasic => "battery_basic",
            FileType::BatteryStats => "battery_stats",
            FileType::BatteryHardware => "battery_hardware",
            FileType::DeviceInfo => "device_info",
            FileType::Thermal => "thermal",
            FileType::Power => "power",
            FileType::Cpuinfo => "cpuinfo",
            FileType::Procstats => "procstats",
            FileType::MemoryInfo => "memory_info",
            FileType::Wifi => "wifi",
            FileType::Connectivity => "connectivity",
            FileType::Telephony => "telephony",
        }
    }

    /// Filename of this dump inside a session directory.
    pub fn filename(&self) -> String {
        format!("{}.txt", self.tag())
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
