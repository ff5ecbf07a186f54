//! 유체 물성, 손실 엔진, 시스템 곡선, 동력/NPSHa 회귀 테스트.
use pump_selection_toolbox::fluid::{FluidKind, FluidProperties};
use pump_selection_toolbox::hydraulics::{
    head_loss, npsh_available, pump_power, system_curve, HydraulicsError, PipeSystem,
    SuctionCondition, G,
};

fn water_20c() -> FluidProperties {
    FluidKind::Water.properties(20.0).unwrap()
}

#[test]
fn water_density_reference_and_decreasing() {
    let props = water_20c();
    assert!((props.density_kg_per_m3 - 1000.0).abs() < 1e-9);
    assert!((props.dynamic_viscosity_pa_s - 0.001).abs() < 1e-12);
    assert!((props.vapor_pressure_pa - 2330.0).abs() < 1e-9);

    let mut last = f64::INFINITY;
    for t in [0.0, 10.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
        let density = FluidKind::Water.properties(t).unwrap().density_kg_per_m3;
        assert!(density < last, "density must decrease with temperature");
        last = density;
    }
}

#[test]
fn fixed_constant_fluids() {
    let oil = FluidKind::LightOil.properties(25.0).unwrap();
    assert!((oil.density_kg_per_m3 - 850.0).abs() < 1e-9);
    assert!((oil.dynamic_viscosity_pa_s - 0.02).abs() < 1e-12);
    // 비수성 유체는 증기압 근사 공유에 대한 주의가 붙는다
    assert!(!oil.warnings.is_empty());

    let sea = FluidKind::Seawater.properties(25.0).unwrap();
    assert!((sea.density_kg_per_m3 - 1025.0).abs() < 1e-9);
    assert!((sea.dynamic_viscosity_pa_s - 0.0012).abs() < 1e-12);

    let other = FluidKind::Other.properties(25.0).unwrap();
    assert!((other.density_kg_per_m3 - 1000.0).abs() < 1e-9);
}

#[test]
fn out_of_range_temperature_warns_but_computes() {
    let props = FluidKind::Water.properties(150.0).unwrap();
    assert!(props.density_kg_per_m3 > 0.0);
    assert!(props
        .warnings
        .iter()
        .any(|w| w.contains("유효 범위") || w.contains("range")));
}

#[test]
fn laminar_friction_factor_at_re_2000() {
    // d=0.1, 물 20°C에서 v=0.02 m/s → Re=2000
    let pipe = PipeSystem::new(0.1, 10.0, 0.0, 0.0, 0.0).unwrap();
    let flow = 0.02 * pipe.area_m2();
    let result = head_loss(flow, &pipe, &water_20c()).unwrap();
    assert!((result.reynolds - 2000.0).abs() < 1e-6);
    assert!((result.friction_factor - 0.032).abs() < 1e-9);
}

#[test]
fn swamee_jain_friction_factor_at_re_10000() {
    // d=0.1, ε=0.00045, v=0.1 m/s → Re=10000, ε/d=0.0045
    let pipe = PipeSystem::new(0.1, 10.0, 0.00045, 0.0, 0.0).unwrap();
    let flow = 0.1 * pipe.area_m2();
    let result = head_loss(flow, &pipe, &water_20c()).unwrap();
    assert!((result.reynolds - 10_000.0).abs() < 1e-6);
    // f = 0.25 / log10(0.0045/3.7 + 5.74/10000^0.9)^2, 소수 4자리 재현
    assert!(
        (result.friction_factor - 0.0377).abs() < 1e-4,
        "f={}",
        result.friction_factor
    );
}

#[test]
fn zero_flow_is_a_defined_boundary() {
    let pipe = PipeSystem::new(0.15, 300.0, 4.5e-5, 6.1, 3.0).unwrap();
    let result = head_loss(0.0, &pipe, &water_20c()).unwrap();
    assert_eq!(result.velocity_m_per_s, 0.0);
    assert_eq!(result.reynolds, 0.0);
    assert_eq!(result.major_loss_m, 0.0);
    assert_eq!(result.minor_loss_m, 0.0);
    assert!((result.total_dynamic_head_m - 6.1).abs() < 1e-12);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(matches!(
        PipeSystem::new(0.0, 10.0, 0.0, 0.0, 0.0),
        Err(HydraulicsError::DegenerateGeometry(_))
    ));
    assert!(matches!(
        PipeSystem::new(0.1, 10.0, -1e-6, 0.0, 0.0),
        Err(HydraulicsError::DegenerateGeometry(_))
    ));

    let pipe = PipeSystem::new(0.1, 10.0, 0.0, 0.0, 0.0).unwrap();
    let bad_fluid = FluidProperties {
        density_kg_per_m3: 1000.0,
        dynamic_viscosity_pa_s: 0.0,
        vapor_pressure_pa: 2330.0,
        warnings: Vec::new(),
    };
    assert!(matches!(
        head_loss(0.01, &pipe, &bad_fluid),
        Err(HydraulicsError::DegenerateFluid(_))
    ));
    assert!(matches!(
        head_loss(-0.01, &pipe, &water_20c()),
        Err(HydraulicsError::InvalidInput(_))
    ));
}

#[test]
fn system_curve_is_monotonic_non_decreasing() {
    let pipe = PipeSystem::new(0.1, 50.0, 4.5e-5, 5.0, 3.0).unwrap();
    let props = water_20c();
    let curve = system_curve(&pipe, &props, 0.02, 100).unwrap();
    assert_eq!(curve.len(), 100);
    assert!(curve[0].0 > 0.0);
    for pair in curve.windows(2) {
        assert!(
            pair[1].1 >= pair[0].1 - 1e-12,
            "system head must not decrease: {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
    // 스윕 상한은 1.2배
    assert!((curve[curve.len() - 1].0 - 0.024).abs() < 1e-12);
}

#[test]
fn system_curve_input_validation() {
    let pipe = PipeSystem::new(0.1, 50.0, 4.5e-5, 5.0, 3.0).unwrap();
    let props = water_20c();
    assert!(matches!(
        system_curve(&pipe, &props, 0.0, 100),
        Err(HydraulicsError::InvalidInput(_))
    ));
    assert!(matches!(
        system_curve(&pipe, &props, 0.02, 1),
        Err(HydraulicsError::InvalidInput(_))
    ));
}

#[test]
fn pump_power_formulas() {
    let power = pump_power(1000.0, 0.01, 50.0, 0.8).unwrap();
    assert!((power.hydraulic_w - 1000.0 * G * 0.01 * 50.0).abs() < 1e-9);
    assert!((power.shaft_w - power.hydraulic_w / 0.8).abs() < 1e-9);

    assert!(matches!(
        pump_power(1000.0, 0.01, 50.0, 0.0),
        Err(HydraulicsError::InvalidEfficiency(_))
    ));
    assert!(matches!(
        pump_power(1000.0, 0.01, 50.0, 1.2),
        Err(HydraulicsError::InvalidEfficiency(_))
    ));
}

#[test]
fn npsh_available_formula() {
    let props = water_20c();
    let suction = SuctionCondition {
        surface_pressure_pa: 101_325.0,
        static_head_m: 3.0,
    };
    let npsha = npsh_available(&suction, &props, 1.0);
    let rho_g = 1000.0 * G;
    let expected = 101_325.0 / rho_g + 3.0 - 2330.0 / rho_g - 1.0;
    assert!((npsha - expected).abs() < 1e-9);
}
