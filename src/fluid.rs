use serde::{Deserialize, Serialize};

/// 취급 유체 종류.
///
/// `Other`는 알 수 없는 유체를 물과 유사한 기본값으로 취급하는 명시적
/// 폴백이다. 실패 대신 기본 물성을 쓰는 것이 이 도구의 정책이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidKind {
    Water,
    LightOil,
    Seawater,
    Other,
}

/// 온도에서 유도된 유체 물성.
///
/// `warnings`에는 물성 모델의 유효 범위를 벗어난 입력에 대한 주의
/// 메시지가 담긴다. 계산 자체는 계속 진행된다.
#[derive(Debug, Clone)]
pub struct FluidProperties {
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 동점도 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 증기압 [Pa]
    pub vapor_pressure_pa: f64,
    /// 모델 유효 범위 관련 주의 메시지
    pub warnings: Vec<String>,
}

/// 물성 계산 오류.
#[derive(Debug)]
pub enum FluidPropertyError {
    /// 모델이 0 이하의 밀도를 반환한 경우
    NonPhysicalDensity { temp_c: f64, density: f64 },
}

impl std::fmt::Display for FluidPropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FluidPropertyError::NonPhysicalDensity { temp_c, density } => write!(
                f,
                "비물리적 밀도: {temp_c} °C 에서 {density} kg/m³"
            ),
        }
    }
}

impl std::error::Error for FluidPropertyError {}

/// 물 물성 모델의 기준 온도 [°C]. 1차 근사의 중심점이다.
const WATER_REF_TEMP_C: f64 = 20.0;
/// 기준 온도에서의 물 밀도 [kg/m³]
const WATER_REF_DENSITY: f64 = 1000.0;
/// 밀도 선형 모델 기울기 [kg/(m³·K)]
const WATER_DENSITY_SLOPE: f64 = 0.3;
/// 기준 온도에서의 물 동점도 [Pa·s]
const WATER_REF_VISCOSITY: f64 = 0.001;
/// 점도 지수 모델 계수 [1/K]
const WATER_VISCOSITY_EXP: f64 = 0.02;
/// 기준 온도에서의 물 증기압 [Pa]
const WATER_REF_VAPOR_PRESSURE: f64 = 2330.0;
/// 증기압 지수 모델 계수 [1/K]
const WATER_VAPOR_PRESSURE_EXP: f64 = 0.06;

/// 물 모델이 유효한 온도 범위 [°C]. 바깥은 주의 메시지를 낸다.
const MODEL_TEMP_MIN_C: f64 = 0.0;
const MODEL_TEMP_MAX_C: f64 = 100.0;

const LIGHT_OIL_DENSITY: f64 = 850.0;
const LIGHT_OIL_VISCOSITY: f64 = 0.02;
const SEAWATER_DENSITY: f64 = 1025.0;
const SEAWATER_VISCOSITY: f64 = 0.0012;

/// 물의 증기압 근사 [Pa]. 20 °C 부근 지수 근사이다.
fn water_vapor_pressure_pa(temp_c: f64) -> f64 {
    WATER_REF_VAPOR_PRESSURE * (WATER_VAPOR_PRESSURE_EXP * (temp_c - WATER_REF_TEMP_C)).exp()
}

impl FluidKind {
    /// 유체 종류와 온도에서 밀도/점도/증기압을 유도한다.
    ///
    /// 물은 온도 의존 근사식, 경유/해수는 고정 상수를 쓴다. 증기압은
    /// 모든 유체가 물의 지수 근사식을 공유한다. 비수성 유체에는 물리적
    /// 으로 맞지 않는 근사이므로 주의 메시지로 알린다.
    pub fn properties(self, temp_c: f64) -> Result<FluidProperties, FluidPropertyError> {
        let mut warnings = Vec::new();
        if !(MODEL_TEMP_MIN_C..=MODEL_TEMP_MAX_C).contains(&temp_c) {
            warnings.push(format!(
                "온도 {temp_c:.1} °C 는 물성 모델 유효 범위({MODEL_TEMP_MIN_C:.0}~{MODEL_TEMP_MAX_C:.0} °C) 밖입니다. 결과는 참고용입니다."
            ));
        }

        let (density, viscosity) = match self {
            FluidKind::Water => (
                WATER_REF_DENSITY - WATER_DENSITY_SLOPE * (temp_c - WATER_REF_TEMP_C),
                WATER_REF_VISCOSITY * (-WATER_VISCOSITY_EXP * (temp_c - WATER_REF_TEMP_C)).exp(),
            ),
            FluidKind::LightOil => (LIGHT_OIL_DENSITY, LIGHT_OIL_VISCOSITY),
            FluidKind::Seawater => (SEAWATER_DENSITY, SEAWATER_VISCOSITY),
            FluidKind::Other => (WATER_REF_DENSITY, WATER_REF_VISCOSITY),
        };

        if density <= 0.0 {
            return Err(FluidPropertyError::NonPhysicalDensity {
                temp_c,
                density,
            });
        }

        if matches!(self, FluidKind::LightOil | FluidKind::Seawater) {
            warnings.push(
                "증기압은 물의 근사식을 공유합니다. 비수성 유체에는 근사 한계가 있습니다."
                    .to_string(),
            );
        }

        Ok(FluidProperties {
            density_kg_per_m3: density,
            dynamic_viscosity_pa_s: viscosity,
            vapor_pressure_pa: water_vapor_pressure_pa(temp_c),
            warnings,
        })
    }
}
