use float_eq::assert_float_eq;
use geodetic::{
    convert::{parse_decimal_degrees, to_decimal_degrees, to_degrees_decimal_minutes, to_degrees_minutes_seconds},
    from_str, AngularValue, Error,
};

#[test]
fn reference_scenarios() {
    assert_eq!(to_degrees_minutes_seconds(&[32.8303, 0., 0.]).unwrap(), [32., 49., 49.08]);
    assert_eq!(to_degrees_minutes_seconds(&[32., 49.818, 0.]).unwrap(), [32., 49., 49.08]);
    assert_eq!(to_degrees_decimal_minutes(&[32.8303, 0., 0.]).unwrap(), [32., 49.818, 0.]);
    assert_float_eq!(to_decimal_degrees(&["32", "49", "49.08"]).unwrap(), 32.8303, abs <= 1e-12);
}

#[test]
fn wrong_shape_is_rejected() {
    assert!(matches!(to_degrees_minutes_seconds(&[1., 2.]), Err(Error::InvalidShape(2))));
    assert!(matches!(to_degrees_decimal_minutes(&[1., 2., 3., 4.]), Err(Error::InvalidShape(4))));
    assert!(matches!(to_decimal_degrees(&[1_f64; 0]), Err(Error::InvalidShape(0))));
    assert!(matches!(to_decimal_degrees(&vec![1., 2.]), Err(Error::InvalidShape(2))));
    assert!(matches!(parse_decimal_degrees("32 49"), Err(Error::InvalidShape(2))));
    assert!(matches!(parse_decimal_degrees("32 49 north"), Err(Error::ParseAngle(_))));
    assert!(matches!(to_decimal_degrees(&[f64::INFINITY, 0., 0.]), Err(Error::InvalidAngle(_))));
}

#[test]
fn non_finite_trailing_slots_are_rejected() {
    assert!(matches!(to_decimal_degrees(&[32., 0., f64::NAN]), Err(Error::InvalidAngle(_))));
    assert!(matches!(to_decimal_degrees(&[32., f64::NAN, 0.]), Err(Error::InvalidAngle(_))));
    assert!(matches!(parse_decimal_degrees("32 NaN 0"), Err(Error::InvalidAngle(_))));
    assert!(matches!(parse_decimal_degrees("32 0 inf"), Err(Error::InvalidAngle(_))));
}

#[test]
fn non_finite_input_has_no_dms_or_ddm() {
    assert!(matches!(to_degrees_minutes_seconds(&[f64::NAN, 0., 0.]), Err(Error::InvalidAngle(_))));
    assert!(matches!(to_degrees_decimal_minutes(&[f64::NAN, 0., 0.]), Err(Error::InvalidAngle(_))));
    assert!(matches!(to_degrees_minutes_seconds(&[1., 0., f64::INFINITY]), Err(Error::InvalidAngle(_))));
    assert!(matches!(to_degrees_decimal_minutes(&[1., f64::NEG_INFINITY, 0.]), Err(Error::InvalidAngle(_))));
    assert!(matches!(to_degrees_minutes_seconds(&[32., 0., f64::NAN]), Err(Error::InvalidAngle(_))));
}

#[test]
fn sign_propagation() {
    let negative = to_decimal_degrees(&[-32., 49., 49.08]).unwrap();
    let positive = to_decimal_degrees(&[32., 49., 49.08]).unwrap();
    assert_eq!(negative, -positive);

    assert_float_eq!(parse_decimal_degrees("-32 49 49.08").unwrap(), -32.8303, abs <= 1e-12);
    assert_float_eq!(to_decimal_degrees(&[0., -30., 0.]).unwrap(), -0.5, abs <= 1e-12);
}

#[test]
fn composition_reconstructs_decimal_degrees() {
    for step in -18_000..=18_000 {
        let dd = f64::from(step) * 0.01 + 0.003_7;
        if dd > 180. {
            continue;
        }

        let dms = to_degrees_minutes_seconds(&[dd, 0., 0.]).unwrap();
        assert_float_eq!(to_decimal_degrees(&dms).unwrap(), dd, abs <= 1e-4);

        let ddm = to_degrees_decimal_minutes(&[dd, 0., 0.]).unwrap();
        assert_float_eq!(to_decimal_degrees(&ddm).unwrap(), dd, abs <= 1e-4);
    }
}

#[test]
fn cross_format_consistency() {
    for d in (-179..=179).step_by(13) {
        for m in (0..60).step_by(7) {
            for s in [0.5, 12.25, 30., 59.999] {
                let value = [f64::from(d), f64::from(m), s];

                let dms = to_degrees_minutes_seconds(&value).unwrap();
                let ddm = to_degrees_decimal_minutes(&value).unwrap();

                assert_float_eq!(
                    to_decimal_degrees(&dms).unwrap(),
                    to_decimal_degrees(&ddm).unwrap(),
                    abs <= 1e-4
                );
            }
        }
    }
}

#[test]
fn dimension_two_keeps_whole_degrees() {
    // Degrees are truncated once minutes are given
    assert_eq!(to_degrees_minutes_seconds(&[32.5, 30.5, 0.]).unwrap(), [32., 30., 30.]);
    assert_eq!(to_degrees_decimal_minutes(&[32., 30., 30.]).unwrap(), [32., 30.5, 0.]);
}

#[test]
fn dms_passes_through() {
    assert_eq!(to_degrees_minutes_seconds(&[-12., 3., 4.567_89]).unwrap(), [-12., 3., 4.567_9]);
}

#[test]
fn parse_with_helper() {
    let value: AngularValue = from_str("  10 20   30 ").unwrap();
    assert_eq!(value, AngularValue::DegreesMinutesSeconds(10., 20., 30.));
    assert_float_eq!(value.to_radians().unwrap(), (10. + 20. / 60. + 30. / 3600_f64).to_radians(), abs <= 1e-15);

    let back: AngularValue = value.to_string().parse().unwrap();
    assert_eq!(back, value);
}
