use serde::{Deserialize, Serialize};

/// 길이/수두 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Foot,
    Inch,
}

const M_PER_FT: f64 = 0.3048;
const M_PER_IN: f64 = 0.0254;

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Foot => value * M_PER_FT,
        LengthUnit::Inch => value * M_PER_IN,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Foot => value_m / M_PER_FT,
        LengthUnit::Inch => value_m / M_PER_IN,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
