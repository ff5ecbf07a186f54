use super::curve::{CurveError, PumpCurve};

/// 공동현상 위험 판정 기준 여유 [m]. 미만이면 위험으로 표시한다.
pub const CAVITATION_MARGIN_LIMIT_M: f64 = 3.0;

/// 펌프 곡선과 시스템 곡선의 교점(또는 최근접점).
#[derive(Debug, Clone, Copy)]
pub struct OperatingPoint {
    /// 운전 유량 [m³/s]
    pub flow_m3_s: f64,
    /// 운전 양정(펌프 곡선 기준) [m]
    pub head_m: f64,
    /// 운전 유량에서의 NPSHr [m]. 곡선에 NPSHr 수열이 없으면 None.
    pub npshr_m: Option<f64>,
    /// |펌프 양정 − 시스템 양정| 잔차 [m].
    /// 곡선이 교차하지 않으면 0에서 멀어진다. 호출자가 유효성 판단에 쓴다.
    pub residual_m: f64,
}

/// 펌프 선정 종합 결과.
#[derive(Debug, Clone, Copy)]
pub struct PumpSelection {
    pub operating: OperatingPoint,
    /// 사용 가능 NPSH [m]
    pub npsha_m: f64,
    /// NPSHa − NPSHr(운전 유량) [m]. NPSHr이 없으면 None.
    pub cavitation_margin_m: Option<f64>,
    /// 여유가 기준 미만인지 여부. NPSHr이 없으면 false.
    pub cavitation_risk: bool,
    /// 최대 양정 표본 기준 BEP 근사 유량 [m³/s]
    pub bep_flow_m3_s: f64,
}

/// 시스템 곡선 격자 위에서 펌프 곡선과의 최근접점을 찾는다.
///
/// 격자 표본별 |펌프 − 시스템| 차가 최소인 점을 돌려주는 근사 탐색이며
/// 진짜 근 찾기가 아니다. 곡선이 정의역 안에서 교차하지 않거나 여러 번
/// 교차해도 "가장 가까운 표본" 이상의 보장은 없다. `residual_m`으로
/// 교차 여부를 판단할 수 있게 잔차를 그대로 노출한다.
pub fn resolve_operating_point(
    pump: &PumpCurve,
    system: &[(f64, f64)],
) -> Result<OperatingPoint, CurveError> {
    if system.is_empty() {
        return Err(CurveError::EmptySystemCurve);
    }

    let mut best_flow = system[0].0;
    let mut best_head = pump.head_at(best_flow);
    let mut best_residual = (best_head - system[0].1).abs();

    for &(q, system_head) in &system[1..] {
        let pump_head = pump.head_at(q);
        let residual = (pump_head - system_head).abs();
        if residual < best_residual {
            best_flow = q;
            best_head = pump_head;
            best_residual = residual;
        }
    }

    Ok(OperatingPoint {
        flow_m3_s: best_flow,
        head_m: best_head,
        npshr_m: pump.npshr_at(best_flow),
        residual_m: best_residual,
    })
}

/// 운전점을 구하고 NPSH 여유와 BEP 근사까지 묶어서 돌려준다.
///
/// `npsha_m`는 호출자가 흡입 조건으로부터 계산해 전달한다.
pub fn select_pump(
    pump: &PumpCurve,
    system: &[(f64, f64)],
    npsha_m: f64,
) -> Result<PumpSelection, CurveError> {
    let operating = resolve_operating_point(pump, system)?;
    let cavitation_margin_m = operating.npshr_m.map(|npshr| npsha_m - npshr);
    let cavitation_risk = cavitation_margin_m
        .map(|margin| margin < CAVITATION_MARGIN_LIMIT_M)
        .unwrap_or(false);

    Ok(PumpSelection {
        operating,
        npsha_m,
        cavitation_margin_m,
        cavitation_risk,
        bep_flow_m3_s: pump.bep_flow(),
    })
}
