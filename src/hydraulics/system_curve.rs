use crate::fluid::FluidProperties;

use super::losses::head_loss;
use super::{HydraulicsError, PipeSystem};

/// 시스템 곡선 기본 표본 수
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// 펌프 곡선 정의역 상한에 곱하는 스윕 여유 배율
const SWEEP_MARGIN: f64 = 1.2;

/// 배관계 저항 곡선을 생성한다.
///
/// 0 근처부터 `flow_max_m3_s`의 1.2배까지 `samples`개의 등간격 유량에서
/// 손실 엔진을 평가한 (유량, 전양정) 수열을 돌려준다. K ≥ 0인 물리적
/// 배관계에서는 유량에 대해 단조 비감소이다.
pub fn system_curve(
    pipe: &PipeSystem,
    fluid: &FluidProperties,
    flow_max_m3_s: f64,
    samples: usize,
) -> Result<Vec<(f64, f64)>, HydraulicsError> {
    if flow_max_m3_s <= 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "스윕 상한 유량은 0보다 커야 합니다.",
        ));
    }
    if samples < 2 {
        return Err(HydraulicsError::InvalidInput(
            "시스템 곡선 표본 수는 2 이상이어야 합니다.",
        ));
    }

    let q_top = flow_max_m3_s * SWEEP_MARGIN;
    let q_start = q_top / samples as f64;
    let step = (q_top - q_start) / (samples - 1) as f64;

    let mut curve = Vec::with_capacity(samples);
    for i in 0..samples {
        let q = q_start + step * i as f64;
        let result = head_loss(q, pipe, fluid)?;
        curve.push((q, result.total_dynamic_head_m));
    }
    Ok(curve)
}
