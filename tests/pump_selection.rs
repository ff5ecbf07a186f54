//! 운전점 탐색, 공동현상 여유, 곡선 검증 회귀 테스트.
use pump_selection_toolbox::fluid::{FluidKind, FluidProperties};
use pump_selection_toolbox::hydraulics::{
    compute_hydraulics, head_loss, interpolate_at, parse_series, resolve_operating_point,
    select_pump, system_curve, CurveError, CurveParseError, PipeSystem, PumpCurve,
    SuctionCondition,
};

fn water_20c() -> FluidProperties {
    FluidKind::Water.properties(20.0).unwrap()
}

/// Q=40 m³/h에서 전양정 32 m를 지나도록 맞춘 배관계.
/// 마찰 길이를 거의 없애고 K로 저항을 잡았다.
fn scenario_pipe(elevation_m: f64) -> PipeSystem {
    PipeSystem::new(0.1, 0.01, 0.0, elevation_m, 117.637).unwrap()
}

fn scenario_pump() -> PumpCurve {
    let flows: Vec<f64> = [10.0, 30.0, 50.0, 70.0]
        .iter()
        .map(|q| q / 3600.0)
        .collect();
    let heads = [40.0, 35.0, 30.0, 20.0];
    PumpCurve::new(&flows, &heads).unwrap()
}

#[test]
fn scenario_system_passes_through_reference_point() {
    let pipe = scenario_pipe(20.0);
    let result = head_loss(40.0 / 3600.0, &pipe, &water_20c()).unwrap();
    assert!(
        (result.total_dynamic_head_m - 32.0).abs() < 0.01,
        "TDH={}",
        result.total_dynamic_head_m
    );
}

#[test]
fn operating_point_near_curve_intersection() {
    let pipe = scenario_pipe(20.0);
    let props = water_20c();
    let pump = scenario_pump();
    let system = system_curve(&pipe, &props, pump.max_flow(), 100).unwrap();
    let op = resolve_operating_point(&pump, &system).unwrap();

    let grid_step = system[1].0 - system[0].0;
    assert!(
        (op.flow_m3_s - 40.0 / 3600.0).abs() <= grid_step,
        "operating flow {} m3/s not within one grid step of 40 m3/h",
        op.flow_m3_s
    );
    assert!((op.head_m - 32.0).abs() < 1.0, "head={}", op.head_m);
    assert!(op.residual_m < 0.5);
}

#[test]
fn npshr_interpolated_at_operating_flow() {
    let pipe = scenario_pipe(20.0);
    let props = water_20c();
    let pump = scenario_pump().with_npshr(&[2.0, 3.0, 5.0, 8.0]).unwrap();
    let system = system_curve(&pipe, &props, pump.max_flow(), 100).unwrap();
    let op = resolve_operating_point(&pump, &system).unwrap();

    // 운전 유량 ≈ 40 m³/h 부근이므로 NPSHr은 30~50 구간 보간값
    let npshr = op.npshr_m.expect("npshr curve supplied");
    assert!(npshr > 3.0 && npshr < 5.0, "npshr={npshr}");
}

#[test]
fn cavitation_margin_flagging() {
    let pipe = scenario_pipe(20.0);
    let props = water_20c();
    let pump = scenario_pump().with_npshr(&[2.0, 3.0, 5.0, 8.0]).unwrap();
    let system = system_curve(&pipe, &props, pump.max_flow(), 100).unwrap();
    let npshr = resolve_operating_point(&pump, &system)
        .unwrap()
        .npshr_m
        .unwrap();

    // 여유 2.0 m → 위험 플래그
    let risky = select_pump(&pump, &system, npshr + 2.0).unwrap();
    assert!((risky.cavitation_margin_m.unwrap() - 2.0).abs() < 1e-9);
    assert!(risky.cavitation_risk);

    // 여유 4.0 m → 플래그 없음
    let fine = select_pump(&pump, &system, npshr + 4.0).unwrap();
    assert!((fine.cavitation_margin_m.unwrap() - 4.0).abs() < 1e-9);
    assert!(!fine.cavitation_risk);
}

#[test]
fn missing_npshr_curve_disables_margin() {
    let pipe = scenario_pipe(20.0);
    let props = water_20c();
    let pump = scenario_pump();
    let system = system_curve(&pipe, &props, pump.max_flow(), 100).unwrap();
    let selection = select_pump(&pump, &system, 10.0).unwrap();
    assert!(selection.operating.npshr_m.is_none());
    assert!(selection.cavitation_margin_m.is_none());
    assert!(!selection.cavitation_risk);
}

#[test]
fn bep_heuristic_is_max_head_sample() {
    let pump = scenario_pump();
    assert!((pump.bep_flow() - 10.0 / 3600.0).abs() < 1e-12);
}

#[test]
fn non_crossing_curves_expose_residual() {
    // 정적 양정 50 m: 펌프 곡선(최대 40 m)이 시스템 곡선 아래에 머문다
    let pipe = scenario_pipe(50.0);
    let props = water_20c();
    let pump = scenario_pump();
    let system = system_curve(&pipe, &props, pump.max_flow(), 100).unwrap();
    let op = resolve_operating_point(&pump, &system).unwrap();

    assert!(op.residual_m > 1.0, "residual={}", op.residual_m);
    let min_residual = system
        .iter()
        .map(|&(q, head)| (interpolate_at(pump.points(), q) - head).abs())
        .fold(f64::INFINITY, f64::min);
    assert!((op.residual_m - min_residual).abs() < 1e-12);
}

#[test]
fn interpolation_clamps_outside_domain() {
    let pump = scenario_pump();
    assert!((pump.head_at(0.0) - 40.0).abs() < 1e-12);
    assert!((pump.head_at(100.0 / 3600.0) - 20.0).abs() < 1e-12);
}

#[test]
fn pump_curve_validation() {
    assert_eq!(
        PumpCurve::new(&[1.0], &[10.0]).unwrap_err(),
        CurveError::TooFewPoints
    );
    assert_eq!(
        PumpCurve::new(&[1.0, 1.0, 2.0], &[10.0, 9.0, 8.0]).unwrap_err(),
        CurveError::NonMonotonicFlow
    );
    assert_eq!(
        PumpCurve::new(&[1.0, 2.0, 3.0], &[10.0, 9.0]).unwrap_err(),
        CurveError::LengthMismatch
    );
    assert_eq!(
        PumpCurve::new(&[1.0, 2.0], &[10.0, 9.0])
            .unwrap()
            .with_npshr(&[1.0])
            .unwrap_err(),
        CurveError::LengthMismatch
    );
    assert_eq!(
        resolve_operating_point(&scenario_pump(), &[]).unwrap_err(),
        CurveError::EmptySystemCurve
    );
}

#[test]
fn curve_text_parsing() {
    assert_eq!(
        parse_series("100, 150 ,200").unwrap(),
        vec![100.0, 150.0, 200.0]
    );
    assert_eq!(parse_series("  ").unwrap_err(), CurveParseError::Empty);
    assert_eq!(
        parse_series("10,abc,30").unwrap_err(),
        CurveParseError::InvalidNumber("abc".to_string())
    );
}

#[test]
fn full_pipeline_smoke() {
    // 원래 도구의 기본값: 200 GPM, 6인치, 300 ft, 정적 양정 20 ft, K=3
    let pipe = PipeSystem::new(
        6.0 * 0.0254,
        300.0 * 0.3048,
        4.5e-5,
        20.0 * 0.3048,
        3.0,
    )
    .unwrap();
    let suction = SuctionCondition {
        surface_pressure_pa: 0.0,
        static_head_m: 5.0 * 0.3048,
    };
    let report = compute_hydraulics(
        &pipe,
        FluidKind::Water,
        25.0,
        200.0 * 6.309e-5,
        &suction,
        0.8,
        0.0,
    )
    .unwrap();

    assert!(report.losses.velocity_m_per_s > 0.5 && report.losses.velocity_m_per_s < 1.0);
    assert!(report.losses.reynolds > 4000.0);
    assert!(report.losses.total_dynamic_head_m > pipe.elevation_m);
    assert!(report.power.shaft_w > report.power.hydraulic_w);
    assert!(report.npsha_m.is_finite());
}
