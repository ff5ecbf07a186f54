use crate::fluid::FluidProperties;

use super::losses::G;
use super::{HydraulicsError, SuctionCondition};

/// 펌프 동력 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct PumpPower {
    /// 수력 동력 ρ·g·Q·H [W]
    pub hydraulic_w: f64,
    /// 축동력 = 수력 동력 / 효율 [W]
    pub shaft_w: f64,
}

/// 수력 동력과 축동력을 계산한다. 효율은 (0, 1] 범위여야 한다.
pub fn pump_power(
    density_kg_per_m3: f64,
    flow_m3_s: f64,
    total_dynamic_head_m: f64,
    efficiency: f64,
) -> Result<PumpPower, HydraulicsError> {
    if efficiency <= 0.0 || efficiency > 1.0 {
        return Err(HydraulicsError::InvalidEfficiency(efficiency));
    }
    if density_kg_per_m3 <= 0.0 {
        return Err(HydraulicsError::DegenerateFluid(
            "밀도는 0보다 커야 합니다.",
        ));
    }

    let hydraulic_w = density_kg_per_m3 * G * flow_m3_s * total_dynamic_head_m;
    Ok(PumpPower {
        hydraulic_w,
        shaft_w: hydraulic_w / efficiency,
    })
}

/// 사용 가능 NPSH [m]를 계산한다.
///
/// NPSHa = Ps/(ρg) + Hs − Pv/(ρg) − h_f
///
/// `suction_friction_loss_m`는 흡입측 배관의 주손실 수두여야 한다.
/// 이 도구 계열의 일부 변형은 토출측 전체 손실을 그대로 넣는데, 흡입과
/// 토출 배관을 뒤섞는 알려진 단순화이다. 어느 값을 넣을지는 호출자의
/// 몫으로 남긴다.
pub fn npsh_available(
    suction: &SuctionCondition,
    fluid: &FluidProperties,
    suction_friction_loss_m: f64,
) -> f64 {
    let rho_g = fluid.density_kg_per_m3 * G;
    suction.surface_pressure_pa / rho_g + suction.static_head_m
        - fluid.vapor_pressure_pa / rho_g
        - suction_friction_loss_m
}
