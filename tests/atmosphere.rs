use float_eq::assert_float_eq;
use geodetic::atmosphere::{meters_per_second_to_mach, molecular_weight, speed_of_sound, strata, temperature, Strata};

const TROPOSPHERE_VALUES: [f64; 4] = [-0.4, 0., 3.7, 11.];
const THERMOSPHERE_VALUES: [f64; 4] = [87., 95.6, 450.1, 500.];

// (altitude m, value asserted by the legacy JavaScript suite, U.S. 1976 reference)
// The legacy model returned the same speed at 1 km and 10 km and rose between
// 80 and 86 km; only the 1976 column is physical.
const LEGACY_SPEED_OF_SOUND: [(f64, f64, f64); 7] = [
    (0., 340.9, 340.29),
    (1_000., 295.6, 336.4),
    (10_000., 295.6, 299.5),
    (50_000., 332.8, 329.8),
    (80_000., 267.1, 282.5),
    (84_000., 272.1, 276.9),
    (86_000., 274.6, 274.1),
];

// (altitude km, value asserted by the legacy JavaScript suite)
const LEGACY_MOLECULAR_WEIGHT: [(f64, f64); 4] = [(0., 28.964), (12., 26.66), (21., 16.17), (22., 28.964)];

#[test]
fn layer_from_altitude() {
    for altitude in TROPOSPHERE_VALUES {
        assert_eq!(strata(altitude), Strata::Troposphere);
        assert_eq!(strata(altitude).to_string(), "troposphere");
    }
    for altitude in THERMOSPHERE_VALUES {
        assert_eq!(strata(altitude), Strata::Thermosphere);
    }
    assert_eq!(strata(30.), Strata::Stratosphere);
    assert_eq!(strata(60.), Strata::Mesosphere);
    assert_eq!(strata(700.), Strata::Exosphere);
}

#[test]
fn molecular_weight_by_altitude() {
    assert_eq!(molecular_weight(0.), 28.9644);
    assert_eq!(molecular_weight(12.), 28.9644);
    assert_eq!(molecular_weight(85.9), 28.9644);
    assert_eq!(molecular_weight(86.), 28.95);
    assert_float_eq!(molecular_weight(95.), 28.655, abs <= 1e-9);
    assert_eq!(molecular_weight(5_000.), 3.94);
}

#[test]
fn speed_of_sound_by_altitude() {
    assert_float_eq!(speed_of_sound(None), 340.294, abs <= 1e-3);
    assert_eq!(speed_of_sound(Some(0.)), speed_of_sound(None));
    assert_float_eq!(speed_of_sound(Some(1_000.)), 336.435, abs <= 1e-3);
    assert_float_eq!(speed_of_sound(Some(50_000.)), 329.799, abs <= 1e-3);
    assert_float_eq!(speed_of_sound(Some(80_000.)), 282.538, abs <= 1e-3);
    assert_float_eq!(speed_of_sound(Some(86_000.)), 274.096, abs <= 1e-3);
    // Held at the 86 km temperature above it
    assert_float_eq!(speed_of_sound(Some(100_000.)), speed_of_sound(Some(86_000.)), abs <= 1e-9);
    assert!(speed_of_sound(Some(-500.)) > speed_of_sound(None));
}

#[test]
fn legacy_suite_cases() {
    for altitude in [0., 3.7, 11.] {
        assert_eq!(strata(altitude), Strata::Troposphere);
    }
    for altitude in THERMOSPHERE_VALUES {
        assert_eq!(strata(altitude), Strata::Thermosphere);
    }

    // Air is well mixed below 86 km, so 12 and 21 km keep the sea level
    // weight instead of the legacy 26.66 and 16.17.
    for (altitude, legacy) in LEGACY_MOLECULAR_WEIGHT {
        assert_eq!(molecular_weight(altitude), 28.9644);
        let agrees = (molecular_weight(altitude) - legacy).abs() < 1e-3;
        assert_eq!(agrees, altitude == 0. || altitude == 22., "{altitude} km");
    }

    // Same tolerance as the legacy suite, one decimal place
    for (altitude, legacy, reference) in LEGACY_SPEED_OF_SOUND {
        let speed = speed_of_sound(Some(altitude));
        assert_float_eq!(speed, reference, abs <= 0.05);
        assert!((speed - legacy).abs() > 0.05, "{altitude} m");
    }

    assert_eq!(meters_per_second_to_mach(speed_of_sound(None), None), 1.);
    assert_eq!(meters_per_second_to_mach(speed_of_sound(None), Some(0.)), 1.);
    assert_eq!(meters_per_second_to_mach(speed_of_sound(Some(10_000.)), Some(10_000.)), 1.);
}

#[test]
fn temperature_profile() {
    assert_float_eq!(temperature(0.), 288.15, abs <= 1e-9);
    assert_float_eq!(temperature(20_000.), 216.65, abs <= 1e-9);
    assert_float_eq!(temperature(50_000.), 270.65, abs <= 1e-9);
}

#[test]
fn mach_conversion() {
    assert_eq!(meters_per_second_to_mach(speed_of_sound(None), None), 1.);
    assert_eq!(meters_per_second_to_mach(speed_of_sound(None), Some(0.)), 1.);
    assert_eq!(meters_per_second_to_mach(speed_of_sound(Some(10_000.)), Some(10_000.)), 1.);
    assert_float_eq!(meters_per_second_to_mach(680.588, None), 2., abs <= 1e-4);
}
