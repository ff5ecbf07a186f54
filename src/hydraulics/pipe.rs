use serde::{Deserialize, Serialize};

use super::HydraulicsError;

/// 배관계 기하 입력. 계산 한 번에 대해 불변이다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipeSystem {
    /// 내경 [m]
    pub diameter_m: f64,
    /// 길이 [m]
    pub length_m: f64,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
    /// 정적 양정(부호 있음, 내리막이면 음수) [m]
    pub elevation_m: f64,
    /// 부차 손실 계수 K 합계
    pub minor_k_sum: f64,
}

impl PipeSystem {
    /// 기하 조건을 검증하여 배관계를 만든다.
    pub fn new(
        diameter_m: f64,
        length_m: f64,
        roughness_m: f64,
        elevation_m: f64,
        minor_k_sum: f64,
    ) -> Result<Self, HydraulicsError> {
        if diameter_m <= 0.0 {
            return Err(HydraulicsError::DegenerateGeometry(
                "내경은 0보다 커야 합니다.",
            ));
        }
        if length_m <= 0.0 {
            return Err(HydraulicsError::DegenerateGeometry(
                "배관 길이는 0보다 커야 합니다.",
            ));
        }
        if roughness_m < 0.0 {
            return Err(HydraulicsError::DegenerateGeometry(
                "거칠기는 0 이상이어야 합니다.",
            ));
        }
        if minor_k_sum < 0.0 {
            return Err(HydraulicsError::InvalidInput(
                "부차 손실 K 합계는 0 이상이어야 합니다.",
            ));
        }
        Ok(Self {
            diameter_m,
            length_m,
            roughness_m,
            elevation_m,
            minor_k_sum,
        })
    }

    /// 단면적 [m²]
    pub fn area_m2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m * self.diameter_m / 4.0
    }
}

/// 흡입측 조건.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuctionCondition {
    /// 흡입 액면 압력 [Pa]
    pub surface_pressure_pa: f64,
    /// 흡입 정수두(부호 있음) [m]
    pub static_head_m: f64,
}
