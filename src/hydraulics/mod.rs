//! 펌프-배관계 수리 계산의 핵심 모듈 모음.
//!
//! 모든 함수는 불변 입력 스냅샷을 받아 결과 스냅샷을 돌려주는 순수
//! 함수이다. 공유 상태나 I/O는 없으며, 실패는 전부 사전 조건 위반이다.

pub mod curve;
pub mod losses;
pub mod operating_point;
pub mod pipe;
pub mod power;
pub mod system_curve;

pub use curve::{interpolate_at, parse_series, CurveError, CurveParseError, PumpCurve};
pub use losses::{head_loss, HeadLossResult, G};
pub use operating_point::{
    resolve_operating_point, select_pump, OperatingPoint, PumpSelection,
    CAVITATION_MARGIN_LIMIT_M,
};
pub use pipe::{PipeSystem, SuctionCondition};
pub use power::{npsh_available, pump_power, PumpPower};
pub use system_curve::{system_curve, DEFAULT_SAMPLE_COUNT};

use crate::fluid::{FluidKind, FluidPropertyError};

/// 수리 계산 오류. 전부 계산 시작 전에 감지되는 사전 조건 위반이다.
#[derive(Debug)]
pub enum HydraulicsError {
    /// 직경 등 기하가 0 이하인 경우
    DegenerateGeometry(&'static str),
    /// 밀도나 점도가 0 이하인 경우
    DegenerateFluid(&'static str),
    /// 효율이 (0, 1] 범위를 벗어난 경우
    InvalidEfficiency(f64),
    /// 기타 잘못된 입력
    InvalidInput(&'static str),
}

impl std::fmt::Display for HydraulicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydraulicsError::DegenerateGeometry(msg) => write!(f, "잘못된 배관 기하: {msg}"),
            HydraulicsError::DegenerateFluid(msg) => write!(f, "비물리적 유체 물성: {msg}"),
            HydraulicsError::InvalidEfficiency(eta) => {
                write!(f, "펌프 효율은 (0, 1] 범위여야 합니다: {eta}")
            }
            HydraulicsError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for HydraulicsError {}

impl From<FluidPropertyError> for HydraulicsError {
    fn from(value: FluidPropertyError) -> Self {
        match value {
            FluidPropertyError::NonPhysicalDensity { .. } => {
                HydraulicsError::DegenerateFluid("밀도는 0보다 커야 합니다.")
            }
        }
    }
}

/// 단일 운전점의 종합 수리 계산 결과.
#[derive(Debug, Clone)]
pub struct HydraulicsReport {
    /// 유속/마찰/수두 손실
    pub losses: HeadLossResult,
    /// 수력/축동력
    pub power: PumpPower,
    /// 사용 가능 NPSH [m]
    pub npsha_m: f64,
    /// 물성 모델 등에서 누적된 주의 메시지
    pub warnings: Vec<String>,
}

/// 배관/유체/운전 조건 스냅샷에서 종합 결과를 계산한다.
///
/// `suction_friction_loss_m`는 흡입측 배관 마찰손실 수두이다. 토출측
/// 전체 손실과는 별개의 값이며, 0을 주면 흡입 손실을 무시하던 원래
/// 동작이 된다.
#[allow(clippy::too_many_arguments)]
pub fn compute_hydraulics(
    pipe: &PipeSystem,
    fluid: FluidKind,
    temp_c: f64,
    flow_m3_s: f64,
    suction: &SuctionCondition,
    efficiency: f64,
    suction_friction_loss_m: f64,
) -> Result<HydraulicsReport, HydraulicsError> {
    let props = fluid.properties(temp_c)?;
    let losses = head_loss(flow_m3_s, pipe, &props)?;
    let power = pump_power(
        props.density_kg_per_m3,
        flow_m3_s,
        losses.total_dynamic_head_m,
        efficiency,
    )?;
    let npsha_m = npsh_available(suction, &props, suction_friction_loss_m);

    Ok(HydraulicsReport {
        losses,
        power,
        npsha_m,
        warnings: props.warnings,
    })
}
