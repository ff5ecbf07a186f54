//! 단위 변환 왕복/계수 회귀 테스트.
use pump_selection_toolbox::conversion::{convert, ConversionError};
use pump_selection_toolbox::quantity::QuantityKind;

fn assert_rel_eq(actual: f64, expected: f64) {
    let tol = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn flow_gpm_factor() {
    // 1 GPM = 6.309e-5 m3/s
    let m3s = convert(QuantityKind::Flow, 1.0, "gpm", "m3/s").unwrap();
    assert_rel_eq(m3s, 6.309e-5);
    let m3h = convert(QuantityKind::Flow, 3600.0, "m3/h", "m3/s").unwrap();
    assert_rel_eq(m3h, 1.0);
}

#[test]
fn pressure_psig_factor_only() {
    // psig는 대기압 보정 없이 계수만 적용한다
    let pa = convert(QuantityKind::Pressure, 1.0, "psig", "pa").unwrap();
    assert_rel_eq(pa, 6894.76);
    let bar = convert(QuantityKind::Pressure, 100_000.0, "pa", "bar").unwrap();
    assert_rel_eq(bar, 1.0);
}

#[test]
fn power_horsepower_factor() {
    let w = convert(QuantityKind::Power, 1.0, "hp", "w").unwrap();
    assert_rel_eq(w, 745.7);
    let kw = convert(QuantityKind::Power, 745.7, "w", "kw").unwrap();
    assert_rel_eq(kw, 0.7457);
}

#[test]
fn temperature_fahrenheit() {
    let c = convert(QuantityKind::Temperature, 212.0, "F", "C").unwrap();
    assert_rel_eq(c, 100.0);
    let f = convert(QuantityKind::Temperature, 0.0, "c", "f").unwrap();
    assert_rel_eq(f, 32.0);
}

#[test]
fn round_trips_within_tolerance() {
    let cases = [
        (QuantityKind::Flow, 123.456, "gpm", "m3/s"),
        (QuantityKind::Flow, 88.8, "m3/h", "gpm"),
        (QuantityKind::Length, 300.0, "ft", "m"),
        (QuantityKind::Length, 6.0, "in", "m"),
        (QuantityKind::Pressure, 14.7, "psig", "kpa"),
        (QuantityKind::Temperature, 77.0, "f", "c"),
        (QuantityKind::Power, 25.0, "hp", "kw"),
    ];
    for (kind, value, from, to) in cases {
        let there = convert(kind, value, from, to).unwrap();
        let back = convert(kind, there, to, from).unwrap();
        assert!(
            (back - value).abs() < value.abs() * 1e-9,
            "{from}->{to} round trip: {value} became {back}"
        );
    }
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(QuantityKind::Flow, 1.0, "l/min", "m3/s").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
    let err = convert(QuantityKind::Pressure, 1.0, "pa", "mmhg").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
}
