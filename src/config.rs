use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hydraulics::DEFAULT_SAMPLE_COUNT;
use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    Si,
    /// 현장 미터법 혼합 (m³/h, m, kPa)
    Metric,
    /// 영국식/야드파운드법 (GPM, ft, psig, HP)
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub flow: FlowUnit,
    pub length: LengthUnit,
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub power: PowerUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트를 돌려준다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self {
                flow: FlowUnit::CubicMeterPerSecond,
                length: LengthUnit::Meter,
                pressure: PressureUnit::Pascal,
                temperature: TemperatureUnit::Celsius,
                power: PowerUnit::Watt,
            },
            UnitSystem::Metric => Self {
                flow: FlowUnit::CubicMeterPerHour,
                length: LengthUnit::Meter,
                pressure: PressureUnit::KiloPascal,
                temperature: TemperatureUnit::Celsius,
                power: PowerUnit::Kilowatt,
            },
            UnitSystem::Imperial => Self {
                flow: FlowUnit::GallonPerMinute,
                length: LengthUnit::Foot,
                pressure: PressureUnit::Psig,
                temperature: TemperatureUnit::Fahrenheit,
                power: PowerUnit::Horsepower,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

fn default_curve_samples() -> usize {
    DEFAULT_SAMPLE_COUNT
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 시스템 곡선 스윕 표본 수
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
    /// 표시 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            curve_samples: DEFAULT_SAMPLE_COUNT,
            language: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 단위 시스템을 바꾸고 기본 단위 세트도 프리셋으로 재설정한다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}
