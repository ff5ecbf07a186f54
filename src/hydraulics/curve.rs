/// 펌프 성능 곡선 검증 오류.
#[derive(Debug, PartialEq, Eq)]
pub enum CurveError {
    /// 곡선 표본이 2점 미만인 경우
    TooFewPoints,
    /// 유량 축이 순증가가 아닌 경우
    NonMonotonicFlow,
    /// 병렬 수열(NPSHr 등)의 길이가 유량 축과 다른 경우
    LengthMismatch,
    /// 시스템 곡선이 비어 있는 경우
    EmptySystemCurve,
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::TooFewPoints => write!(f, "곡선에는 최소 2개의 점이 필요합니다."),
            CurveError::NonMonotonicFlow => {
                write!(f, "곡선의 유량 축은 순증가여야 합니다.")
            }
            CurveError::LengthMismatch => {
                write!(f, "NPSHr 수열 길이가 유량 축과 일치하지 않습니다.")
            }
            CurveError::EmptySystemCurve => write!(f, "시스템 곡선이 비어 있습니다."),
        }
    }
}

impl std::error::Error for CurveError {}

/// 구분자 텍스트로 들어온 곡선 수열의 파싱 오류. 표시 계층에서 처리한다.
#[derive(Debug, PartialEq, Eq)]
pub enum CurveParseError {
    /// 입력이 비어 있는 경우
    Empty,
    /// 숫자로 해석되지 않는 항목
    InvalidNumber(String),
}

impl std::fmt::Display for CurveParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveParseError::Empty => write!(f, "곡선 입력이 비어 있습니다."),
            CurveParseError::InvalidNumber(s) => {
                write!(f, "숫자로 해석할 수 없는 항목: {s}")
            }
        }
    }
}

impl std::error::Error for CurveParseError {}

/// 쉼표로 구분된 숫자 수열을 파싱한다. `"100, 150, 200"` 형식.
pub fn parse_series(text: &str) -> Result<Vec<f64>, CurveParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CurveParseError::Empty);
    }
    trimmed
        .split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .map_err(|_| CurveParseError::InvalidNumber(item.to_string()))
        })
        .collect()
}

/// 정렬된 (x, y) 표본에 대한 선형 보간. 정의역 밖은 가장 가까운 끝점
/// 값으로 고정한다(외삽이 아니라 클램프).
pub fn interpolate_at(points: &[(f64, f64)], x: f64) -> f64 {
    debug_assert!(points.len() >= 2);
    if x <= points[0].0 {
        return points[0].1;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if (x1 - x0).abs() < 1e-12 {
                return y0;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    points[points.len() - 1].1
}

/// 제조사 펌프 성능 곡선. (유량, 양정) 표본과 같은 유량 축 위의
/// 선택적 NPSHr 표본을 담는다. 생성 후 불변이다.
#[derive(Debug, Clone)]
pub struct PumpCurve {
    points: Vec<(f64, f64)>,
    npshr: Option<Vec<(f64, f64)>>,
}

impl PumpCurve {
    /// 유량/양정 수열을 검증하여 곡선을 만든다.
    pub fn new(flows: &[f64], heads: &[f64]) -> Result<Self, CurveError> {
        if flows.len() < 2 || heads.len() < 2 {
            return Err(CurveError::TooFewPoints);
        }
        if flows.len() != heads.len() {
            return Err(CurveError::LengthMismatch);
        }
        if flows.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CurveError::NonMonotonicFlow);
        }
        Ok(Self {
            points: flows.iter().copied().zip(heads.iter().copied()).collect(),
            npshr: None,
        })
    }

    /// 같은 유량 축 위의 NPSHr 수열을 붙인다.
    pub fn with_npshr(mut self, npshr: &[f64]) -> Result<Self, CurveError> {
        if npshr.len() != self.points.len() {
            return Err(CurveError::LengthMismatch);
        }
        self.npshr = Some(
            self.points
                .iter()
                .map(|&(q, _)| q)
                .zip(npshr.iter().copied())
                .collect(),
        );
        Ok(self)
    }

    /// 곡선 표본 (유량, 양정)
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// 곡선 유량 정의역의 상한
    pub fn max_flow(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }

    /// 주어진 유량에서의 펌프 양정(선형 보간, 정의역 밖 클램프)
    pub fn head_at(&self, flow: f64) -> f64 {
        interpolate_at(&self.points, flow)
    }

    /// 주어진 유량에서의 NPSHr. NPSHr 수열이 없으면 None.
    pub fn npshr_at(&self, flow: f64) -> Option<f64> {
        self.npshr.as_ref().map(|pts| interpolate_at(pts, flow))
    }

    /// 최대 양정 표본의 유량을 BEP 근사로 돌려준다.
    ///
    /// 진짜 BEP는 효율 곡선이 필요하다. 양정 최대점은 조잡한 대용이며
    /// 참고용 표시 이상으로 쓰면 안 된다.
    pub fn bep_flow(&self) -> f64 {
        self.points
            .iter()
            .fold(self.points[0], |best, &p| if p.1 > best.1 { p } else { best })
            .0
    }
}
