use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::fluid::FluidKind;
use crate::hydraulics::{
    compute_hydraulics, npsh_available, parse_series, select_pump, system_curve, PipeSystem,
    PumpCurve, SuctionCondition,
};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{
    convert_flow, convert_length, convert_pressure, temperature::to_celsius, FlowUnit, LengthUnit,
    PressureUnit, TemperatureUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Hydraulics,
    SystemCurve,
    PumpSelection,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_HYDRAULICS));
    println!("{}", tr.t(keys::MAIN_MENU_SYSTEM_CURVE));
    println!("{}", tr.t(keys::MAIN_MENU_PUMP_SELECTION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Hydraulics),
            "3" => return Ok(MenuChoice::SystemCurve),
            "4" => return Ok(MenuChoice::PumpSelection),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Flow),
        2 => Some(QuantityKind::Length),
        3 => Some(QuantityKind::Pressure),
        4 => Some(QuantityKind::Temperature),
        5 => Some(QuantityKind::Power),
        _ => None,
    }
}

/// 단일 운전점 수리 계산 메뉴를 처리한다.
pub fn handle_hydraulics(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HYDRAULICS_HEADING));
    let fluid = read_fluid(tr)?;
    let temp_c = read_temperature_c(tr, cfg)?;
    let flow_m3_s = read_flow_m3_s(tr, cfg, tr.t(keys::PROMPT_FLOW))?;
    let pipe = read_pipe_system(tr, cfg)?;
    let efficiency = read_f64(tr, tr.t(keys::PROMPT_EFFICIENCY))?;
    let suction = read_suction_condition(tr, cfg)?;
    let suction_friction_m = read_f64(tr, tr.t(keys::PROMPT_SUCTION_FRICTION))?;

    let report = compute_hydraulics(
        &pipe,
        fluid,
        temp_c,
        flow_m3_s,
        &suction,
        efficiency,
        suction_friction_m,
    )?;

    println!(
        "{} {:.3} m/s",
        tr.t(keys::RESULT_VELOCITY),
        report.losses.velocity_m_per_s
    );
    println!(
        "{} {:.3e}",
        tr.t(keys::RESULT_REYNOLDS),
        report.losses.reynolds
    );
    println!(
        "{} {:.5}",
        tr.t(keys::RESULT_FRICTION_FACTOR),
        report.losses.friction_factor
    );
    println!(
        "{} {:.3} m",
        tr.t(keys::RESULT_MAJOR_LOSS),
        report.losses.major_loss_m
    );
    println!(
        "{} {:.3} m",
        tr.t(keys::RESULT_MINOR_LOSS),
        report.losses.minor_loss_m
    );
    println!(
        "{} {:.3} m",
        tr.t(keys::RESULT_TDH),
        report.losses.total_dynamic_head_m
    );
    println!(
        "{} {:.1} W",
        tr.t(keys::RESULT_HYDRAULIC_POWER),
        report.power.hydraulic_w
    );
    println!(
        "{} {:.1} W",
        tr.t(keys::RESULT_SHAFT_POWER),
        report.power.shaft_w
    );
    println!("{} {:.3} m", tr.t(keys::RESULT_NPSHA), report.npsha_m);
    for warning in &report.warnings {
        println!("{} {warning}", tr.t(keys::WARNING_PREFIX));
    }
    Ok(())
}

/// 시스템 곡선 메뉴를 처리한다.
pub fn handle_system_curve(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SYSTEM_CURVE_HEADING));
    let fluid = read_fluid(tr)?;
    let temp_c = read_temperature_c(tr, cfg)?;
    let pipe = read_pipe_system(tr, cfg)?;
    let flow_max_m3_s = read_flow_m3_s(tr, cfg, tr.t(keys::PROMPT_FLOW_MAX))?;

    let props = fluid.properties(temp_c)?;
    let curve = system_curve(&pipe, &props, flow_max_m3_s, cfg.curve_samples)?;

    println!("{}", tr.t(keys::SYSTEM_CURVE_TABLE_HEADER));
    let stride = (curve.len() / 20).max(1);
    for (i, &(q, head)) in curve.iter().enumerate() {
        if i % stride == 0 || i == curve.len() - 1 {
            println!(
                "{:>10.2}   {:>8.3}",
                convert_flow(q, FlowUnit::CubicMeterPerSecond, FlowUnit::CubicMeterPerHour),
                head
            );
        }
    }
    for warning in &props.warnings {
        println!("{} {warning}", tr.t(keys::WARNING_PREFIX));
    }
    Ok(())
}

/// 펌프 선정 메뉴를 처리한다.
pub fn handle_pump_selection(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PUMP_SELECTION_HEADING));
    let fluid = read_fluid(tr)?;
    let temp_c = read_temperature_c(tr, cfg)?;
    let pipe = read_pipe_system(tr, cfg)?;
    let suction = read_suction_condition(tr, cfg)?;
    let suction_friction_m = read_f64(tr, tr.t(keys::PROMPT_SUCTION_FRICTION))?;

    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let flow_unit = read_flow_unit(tr, cfg.default_units.flow)?;
    let flows_text = read_line(tr.t(keys::PROMPT_CURVE_FLOWS))?;
    let flows: Vec<f64> = parse_series(&flows_text)?
        .into_iter()
        .map(|q| convert_flow(q, flow_unit, FlowUnit::CubicMeterPerSecond))
        .collect();

    println!("{}", tr.t(keys::LENGTH_UNIT_OPTIONS));
    let head_unit = read_length_unit(tr, cfg.default_units.length)?;
    let heads_text = read_line(tr.t(keys::PROMPT_CURVE_HEADS))?;
    let heads: Vec<f64> = parse_series(&heads_text)?
        .into_iter()
        .map(|h| convert_length(h, head_unit, LengthUnit::Meter))
        .collect();

    let mut pump = PumpCurve::new(&flows, &heads)?;
    let npshr_text = read_line(tr.t(keys::PROMPT_CURVE_NPSHR))?;
    if !npshr_text.trim().is_empty() {
        let npshr: Vec<f64> = parse_series(&npshr_text)?
            .into_iter()
            .map(|h| convert_length(h, head_unit, LengthUnit::Meter))
            .collect();
        pump = pump.with_npshr(&npshr)?;
    }

    let props = fluid.properties(temp_c)?;
    let system = system_curve(&pipe, &props, pump.max_flow(), cfg.curve_samples)?;
    let npsha_m = npsh_available(&suction, &props, suction_friction_m);
    let selection = select_pump(&pump, &system, npsha_m)?;

    println!(
        "{} {:.2} m3/h",
        tr.t(keys::RESULT_OPERATING_FLOW),
        convert_flow(
            selection.operating.flow_m3_s,
            FlowUnit::CubicMeterPerSecond,
            FlowUnit::CubicMeterPerHour
        )
    );
    println!(
        "{} {:.2} m",
        tr.t(keys::RESULT_OPERATING_HEAD),
        selection.operating.head_m
    );
    println!(
        "{} {:.3} m",
        tr.t(keys::RESULT_RESIDUAL),
        selection.operating.residual_m
    );
    println!("{} {:.2} m", tr.t(keys::RESULT_NPSHA), selection.npsha_m);
    match (selection.operating.npshr_m, selection.cavitation_margin_m) {
        (Some(npshr), Some(margin)) => {
            println!("{} {npshr:.2} m", tr.t(keys::RESULT_OPERATING_NPSHR));
            println!("{} {margin:.2} m", tr.t(keys::RESULT_CAVITATION_MARGIN));
            if selection.cavitation_risk {
                println!("{}", tr.t(keys::CAVITATION_RISK));
            } else {
                println!("{}", tr.t(keys::CAVITATION_OK));
            }
        }
        _ => println!("{}", tr.t(keys::NPSHR_MISSING)),
    }
    println!(
        "{} {:.2} m3/h",
        tr.t(keys::RESULT_BEP_FLOW),
        convert_flow(
            selection.bep_flow_m3_s,
            FlowUnit::CubicMeterPerSecond,
            FlowUnit::CubicMeterPerHour
        )
    );
    for warning in &props.warnings {
        println!("{} {warning}", tr.t(keys::WARNING_PREFIX));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.set_unit_system(crate::config::UnitSystem::Si),
        "2" => cfg.set_unit_system(crate::config::UnitSystem::Metric),
        "3" => cfg.set_unit_system(crate::config::UnitSystem::Imperial),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_SAMPLES),
        cfg.curve_samples
    );
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_SAMPLES))?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<usize>() {
            Ok(n) if n >= 2 => cfg.curve_samples = n,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_fluid(tr: &Translator) -> Result<FluidKind, AppError> {
    println!("{}", tr.t(keys::FLUID_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_FLUID))?;
    // 알 수 없는 선택은 물 기준 기본값(Other)으로 처리한다. 명시적 정책.
    let fluid = match sel.trim() {
        "1" => FluidKind::Water,
        "2" => FluidKind::LightOil,
        "3" => FluidKind::Seawater,
        _ => FluidKind::Other,
    };
    Ok(fluid)
}

fn read_flow_unit(tr: &Translator, default: FlowUnit) -> Result<FlowUnit, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => FlowUnit::CubicMeterPerHour,
        "2" => FlowUnit::CubicMeterPerSecond,
        "3" => FlowUnit::GallonPerMinute,
        _ => default,
    };
    Ok(unit)
}

fn read_length_unit(tr: &Translator, default: LengthUnit) -> Result<LengthUnit, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => LengthUnit::Meter,
        "2" => LengthUnit::Foot,
        "3" => LengthUnit::Inch,
        _ => default,
    };
    Ok(unit)
}

fn read_pressure_unit(tr: &Translator, default: PressureUnit) -> Result<PressureUnit, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Pascal,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::Bar,
        "4" => PressureUnit::Psig,
        _ => default,
    };
    Ok(unit)
}

fn read_temperature_unit(
    tr: &Translator,
    default: TemperatureUnit,
) -> Result<TemperatureUnit, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Fahrenheit,
        _ => default,
    };
    Ok(unit)
}

fn read_temperature_c(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_TEMPERATURE))?;
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let unit = read_temperature_unit(tr, cfg.default_units.temperature)?;
    Ok(to_celsius(value, unit))
}

fn read_flow_m3_s(tr: &Translator, cfg: &Config, prompt: &str) -> Result<f64, AppError> {
    let value = read_f64(tr, prompt)?;
    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let unit = read_flow_unit(tr, cfg.default_units.flow)?;
    Ok(convert_flow(value, unit, FlowUnit::CubicMeterPerSecond))
}

fn read_length_m(tr: &Translator, cfg: &Config, prompt: &str) -> Result<f64, AppError> {
    let value = read_f64(tr, prompt)?;
    println!("{}", tr.t(keys::LENGTH_UNIT_OPTIONS));
    let unit = read_length_unit(tr, cfg.default_units.length)?;
    Ok(convert_length(value, unit, LengthUnit::Meter))
}

fn read_pipe_system(tr: &Translator, cfg: &Config) -> Result<PipeSystem, AppError> {
    let diameter_m = read_length_m(tr, cfg, tr.t(keys::PROMPT_DIAMETER))?;
    let length_m = read_length_m(tr, cfg, tr.t(keys::PROMPT_PIPE_LENGTH))?;
    let roughness_m = read_f64(tr, tr.t(keys::PROMPT_ROUGHNESS))?;
    let elevation_m = read_length_m(tr, cfg, tr.t(keys::PROMPT_ELEVATION))?;
    let minor_k_sum = read_f64(tr, tr.t(keys::PROMPT_MINOR_K))?;
    Ok(PipeSystem::new(
        diameter_m,
        length_m,
        roughness_m,
        elevation_m,
        minor_k_sum,
    )?)
}

fn read_suction_condition(tr: &Translator, cfg: &Config) -> Result<SuctionCondition, AppError> {
    let pressure_value = read_f64(tr, tr.t(keys::PROMPT_SUCTION_PRESSURE))?;
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let pressure_unit = read_pressure_unit(tr, cfg.default_units.pressure)?;
    let surface_pressure_pa =
        convert_pressure(pressure_value, pressure_unit, PressureUnit::Pascal);
    let static_head_m = read_length_m(tr, cfg, tr.t(keys::PROMPT_SUCTION_STATIC))?;
    Ok(SuctionCondition {
        surface_pressure_pa,
        static_head_m,
    })
}
