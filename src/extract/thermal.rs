/// Rule table for `dumpsys thermalservice`.
///
/// Sensor readings come as `Temperature{mValue=36.7, mType=0, mName=CPU,
/// mStatus=0}` lines. Some devices report pre-scaled Celsius, others tenths,
/// hence `AutoTenths` on every sensor field.
use super::{Convert, Rule};

pub const RULES: &[Rule] = &[
    Rule::new("thermal_status", r"Thermal Status:\s*(\d+)", Convert::Int),
    Rule::new(
        "thermal_cpu_temp",
        r"Temperature\{mValue=([\d.]+), mType=\d+, mName=CPU[,}]",
        Convert::AutoTenths,
    ),
    Rule::new(
        "thermal_gpu_temp",
        r"Temperature\{mValue=([\d.]+), mType=\d+, mName=GPU[,}]",
        Convert::AutoTenths,
    ),
    Rule::new(
        "thermal_battery_temp",
        r"Temperature\{mValue=([\d.]+), mType=\d+, mName=BATTERY[,}]",
        Convert::AutoTenths,
    ),
    Rule::new(
        "thermal_skin_temp",
        r"Temperature\{mValue=([\d.]+), mType=\d+, mName=SKIN[,}]",
        Convert::AutoTenths,
    ),
];
