use crate::fluid::FluidProperties;

use super::{HydraulicsError, PipeSystem};

/// 중력 가속도 [m/s²]
pub const G: f64 = 9.81;

/// 층류/난류 구분 레이놀즈수. 초과 시 Swamee–Jain, 이하 시 64/Re를 쓴다.
const RE_TURBULENT: f64 = 4000.0;

/// 이 미만의 유량은 0으로 취급한다 [m³/s]. 층류식의 0 나눗셈을 피한다.
const MIN_FLOW_M3_S: f64 = 1e-12;

/// 단일 유량에서의 수두 손실 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct HeadLossResult {
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 레이놀즈수
    pub reynolds: f64,
    /// Darcy 마찰계수
    pub friction_factor: f64,
    /// 주손실(배관 마찰) [m]
    pub major_loss_m: f64,
    /// 부차 손실(피팅) [m]
    pub minor_loss_m: f64,
    /// 전양정 = 주손실 + 부차손실 + 정적 양정 [m]
    pub total_dynamic_head_m: f64,
}

/// Swamee–Jain 식. Colebrook 식의 난류 영역 명시적 근사이다.
fn swamee_jain(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    let log_term = roughness_m / (3.7 * diameter_m) + 5.74 / reynolds.powf(0.9);
    0.25 / log_term.log10().powi(2)
}

/// Darcy–Weisbach 식으로 배관계 수두 손실을 계산한다.
///
/// 유량 0은 오류가 아니라 정의된 경계이다. 유속/손실 전부 0, 전양정은
/// 정적 양정만 남는다.
pub fn head_loss(
    flow_m3_s: f64,
    pipe: &PipeSystem,
    fluid: &FluidProperties,
) -> Result<HeadLossResult, HydraulicsError> {
    if pipe.diameter_m <= 0.0 {
        return Err(HydraulicsError::DegenerateGeometry(
            "내경은 0보다 커야 합니다.",
        ));
    }
    if fluid.dynamic_viscosity_pa_s <= 0.0 {
        return Err(HydraulicsError::DegenerateFluid(
            "점도는 0보다 커야 합니다.",
        ));
    }
    if fluid.density_kg_per_m3 <= 0.0 {
        return Err(HydraulicsError::DegenerateFluid(
            "밀도는 0보다 커야 합니다.",
        ));
    }
    if flow_m3_s < 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "유량은 0 이상이어야 합니다.",
        ));
    }

    if flow_m3_s < MIN_FLOW_M3_S {
        return Ok(HeadLossResult {
            velocity_m_per_s: 0.0,
            reynolds: 0.0,
            friction_factor: 0.0,
            major_loss_m: 0.0,
            minor_loss_m: 0.0,
            total_dynamic_head_m: pipe.elevation_m,
        });
    }

    let velocity = flow_m3_s / pipe.area_m2();
    let reynolds =
        fluid.density_kg_per_m3 * velocity * pipe.diameter_m / fluid.dynamic_viscosity_pa_s;

    let friction_factor = if reynolds > RE_TURBULENT {
        swamee_jain(reynolds, pipe.roughness_m, pipe.diameter_m)
    } else {
        64.0 / reynolds
    };

    let velocity_head = velocity * velocity / (2.0 * G);
    let major_loss_m = friction_factor * (pipe.length_m / pipe.diameter_m) * velocity_head;
    let minor_loss_m = pipe.minor_k_sum * velocity_head;

    Ok(HeadLossResult {
        velocity_m_per_s: velocity,
        reynolds,
        friction_factor,
        major_loss_m,
        minor_loss_m,
        total_dynamic_head_m: major_loss_m + minor_loss_m + pipe.elevation_m,
    })
}
