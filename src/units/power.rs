use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 와트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Horsepower,
}

const W_PER_KW: f64 = 1000.0;
/// 1 HP(기계 마력) = 745.7 W
const W_PER_HP: f64 = 745.7;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * W_PER_KW,
        PowerUnit::Horsepower => value * W_PER_HP,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / W_PER_KW,
        PowerUnit::Horsepower => value_w / W_PER_HP,
    }
}

/// 동력을 다른 단위로 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
