use crate::config::Config;
use crate::conversion;
use crate::fluid;
use crate::hydraulics;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 유체 물성 오류
    Fluid(fluid::FluidPropertyError),
    /// 수리 계산 오류
    Hydraulics(hydraulics::HydraulicsError),
    /// 펌프 곡선 검증 오류
    Curve(hydraulics::CurveError),
    /// 곡선 텍스트 파싱 오류
    CurveParse(hydraulics::CurveParseError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Fluid(e) => write!(f, "유체 물성 오류: {e}"),
            AppError::Hydraulics(e) => write!(f, "수리 계산 오류: {e}"),
            AppError::Curve(e) => write!(f, "펌프 곡선 오류: {e}"),
            AppError::CurveParse(e) => write!(f, "곡선 입력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<fluid::FluidPropertyError> for AppError {
    fn from(value: fluid::FluidPropertyError) -> Self {
        AppError::Fluid(value)
    }
}

impl From<hydraulics::HydraulicsError> for AppError {
    fn from(value: hydraulics::HydraulicsError) -> Self {
        AppError::Hydraulics(value)
    }
}

impl From<hydraulics::CurveError> for AppError {
    fn from(value: hydraulics::CurveError) -> Self {
        AppError::Curve(value)
    }
}

impl From<hydraulics::CurveParseError> for AppError {
    fn from(value: hydraulics::CurveParseError) -> Self {
        AppError::CurveParse(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산/입력 오류는 결과 대신 메시지를 출력하고 메뉴로 돌아간다.
/// 세션을 끝내는 것은 입출력 오류뿐이다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(tr)?;
        let result = match choice {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config),
            MenuChoice::Hydraulics => ui_cli::handle_hydraulics(tr, config),
            MenuChoice::SystemCurve => ui_cli::handle_system_curve(tr, config),
            MenuChoice::PumpSelection => ui_cli::handle_pump_selection(tr, config),
            MenuChoice::Settings => {
                let result = ui_cli::handle_settings(tr, config);
                if result.is_ok() {
                    config.save()?;
                }
                result
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        if let Err(err) = result {
            match err {
                AppError::Io(e) => return Err(AppError::Io(e)),
                AppError::Config(e) => return Err(AppError::Config(e)),
                other => println!("{}: {other}", tr.t(keys::ERROR_PREFIX)),
            }
        }
    }
    Ok(())
}
