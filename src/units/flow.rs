use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    GallonPerMinute,
}

const SECONDS_PER_HOUR: f64 = 3600.0;
/// 1 US GPM = 6.309×10⁻⁵ m³/s
const M3S_PER_GPM: f64 = 6.309e-5;

fn to_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / SECONDS_PER_HOUR,
        FlowUnit::GallonPerMinute => value * M3S_PER_GPM,
    }
}

fn from_cubic_meter_per_second(value_m3_s: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value_m3_s,
        FlowUnit::CubicMeterPerHour => value_m3_s * SECONDS_PER_HOUR,
        FlowUnit::GallonPerMinute => value_m3_s / M3S_PER_GPM,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let m3_s = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(m3_s, to)
}
