use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 파스칼이다.
/// psig는 환산 계수만 적용한다(대기압 보정 없음). 흡입 압력을 게이지
/// 값 그대로 NPSHa 계산에 넣는 원래 동작을 유지하는 정책이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    Psig,
}

const PA_PER_KPA: f64 = 1000.0;
const PA_PER_BAR: f64 = 100_000.0;
/// 1 psi = 6894.76 Pa
const PA_PER_PSI: f64 = 6894.76;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * PA_PER_KPA,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psig => value * PA_PER_PSI,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / PA_PER_KPA,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psig => value_pa / PA_PER_PSI,
    }
}

/// 압력을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
