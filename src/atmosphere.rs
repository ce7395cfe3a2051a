//! Layers, composition and speed of sound of the standard atmosphere.
//!
//! Temperatures follow the U.S. Standard Atmosphere 1976 up to 86 km. Above
//! that the temperature is held at its 86 km value, so speed of sound there
//! is only indicative.

use std::fmt::Display;

/// Ratio of specific heats of air
const GAMMA: f64 = 1.4;
/// Universal gas constant, J/(kmol·K)
const GAS_CONSTANT: f64 = 8_314.32;
/// Sea level mean molecular weight of air, kg/kmol
const SEA_LEVEL_MOLECULAR_WEIGHT: f64 = 28.9644;
/// Effective Earth radius for geopotential altitude, m
const EARTH_RADIUS: f64 = 6_356_766.;
/// Geometric altitude where the well-mixed region ends, km
const HOMOSPHERE_TOP_KM: f64 = 86.;
/// Geopotential altitude matching `HOMOSPHERE_TOP_KM`, km
const HOMOSPHERE_TOP_GEOPOTENTIAL_KM: f64 = 84.852;

// (base geopotential altitude km, base temperature K, lapse rate K/km)
const TEMPERATURE_LAYERS: [(f64, f64, f64); 7] = [
    (0., 288.15, -6.5),
    (11., 216.65, 0.),
    (20., 216.65, 1.),
    (32., 228.65, 2.8),
    (47., 270.65, 0.),
    (51., 270.65, -2.8),
    (71., 214.65, -2.),
];

// (geometric altitude km, mean molecular weight kg/kmol) above the well-mixed region
const MOLECULAR_WEIGHTS: [(f64, f64); 18] = [
    (86., 28.95),
    (90., 28.91),
    (100., 28.40),
    (110., 27.27),
    (120., 26.20),
    (130., 25.44),
    (150., 24.10),
    (180., 22.34),
    (200., 21.30),
    (250., 19.19),
    (300., 17.73),
    (400., 15.98),
    (500., 14.33),
    (600., 11.51),
    (700., 8.30),
    (800., 5.54),
    (900., 3.94),
    (1000., 3.94),
];

/// Atmospheric layer, named by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strata {
    Troposphere,
    Stratosphere,
    Mesosphere,
    Thermosphere,
    Exosphere,
}

impl Strata {
    pub fn name(&self) -> &'static str {
        match self {
            Strata::Troposphere => "troposphere",
            Strata::Stratosphere => "stratosphere",
            Strata::Mesosphere => "mesosphere",
            Strata::Thermosphere => "thermosphere",
            Strata::Exosphere => "exosphere",
        }
    }
}

impl Display for Strata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Layer of the atmosphere at a geometric altitude in kilometers. Altitudes
/// below sea level are in the troposphere.
///
/// # Example
///
/// ```
/// use geodetic::atmosphere::{strata, Strata};
///
/// assert_eq!(strata(3.7), Strata::Troposphere);
/// assert_eq!(strata(95.6).to_string(), "thermosphere");
/// ```
pub fn strata(altitude_km: f64) -> Strata {
    if altitude_km < 12. {
        Strata::Troposphere
    } else if altitude_km < 50. {
        Strata::Stratosphere
    } else if altitude_km < 85. {
        Strata::Mesosphere
    } else if altitude_km < 600. {
        Strata::Thermosphere
    } else {
        Strata::Exosphere
    }
}

/// Mean molecular weight of air (kg/kmol) at a geometric altitude in
/// kilometers. Constant in the well-mixed region below 86 km, interpolated
/// from tabulated values above it.
///
/// # Example
///
/// ```
/// use geodetic::atmosphere::molecular_weight;
///
/// assert_eq!(molecular_weight(0.0), 28.9644);
/// assert!((molecular_weight(190.0) - 21.82).abs() < 1e-9);
/// ```
pub fn molecular_weight(altitude_km: f64) -> f64 {
    if altitude_km < HOMOSPHERE_TOP_KM {
        return SEA_LEVEL_MOLECULAR_WEIGHT;
    }

    MOLECULAR_WEIGHTS
        .windows(2)
        .find(|pair| altitude_km <= pair[1].0)
        .map_or(MOLECULAR_WEIGHTS[MOLECULAR_WEIGHTS.len() - 1].1, |pair| {
            let (z0, m0) = pair[0];
            let (z1, m1) = pair[1];
            m0 + (m1 - m0) * (altitude_km - z0) / (z1 - z0)
        })
}

/// Temperature (K) at a geometric altitude in meters.
pub fn temperature(altitude_m: f64) -> f64 {
    let geopotential_km = (EARTH_RADIUS * altitude_m / (EARTH_RADIUS + altitude_m) / 1000.)
        .min(HOMOSPHERE_TOP_GEOPOTENTIAL_KM);

    let (base, base_temperature, lapse_rate) = TEMPERATURE_LAYERS
        .iter()
        .rev()
        .find(|layer| geopotential_km >= layer.0)
        .copied()
        .unwrap_or(TEMPERATURE_LAYERS[0]);

    base_temperature + lapse_rate * (geopotential_km - base)
}

/// Speed of sound (m/s) at a geometric altitude in meters, sea level if `None`.
///
/// # Example
///
/// ```
/// use geodetic::atmosphere::speed_of_sound;
///
/// assert!((speed_of_sound(None) - 340.294).abs() < 1e-3);
/// assert!((speed_of_sound(Some(20_000.0)) - 295.070).abs() < 1e-3);
/// ```
pub fn speed_of_sound(altitude_m: Option<f64>) -> f64 {
    let temperature = temperature(altitude_m.unwrap_or_default());
    (GAMMA * GAS_CONSTANT * temperature / SEA_LEVEL_MOLECULAR_WEIGHT).sqrt()
}

/// Converts a speed in m/s to a Mach number at a geometric altitude in
/// meters, sea level if `None`.
///
/// # Example
///
/// ```
/// use geodetic::atmosphere::{meters_per_second_to_mach, speed_of_sound};
///
/// assert_eq!(meters_per_second_to_mach(speed_of_sound(None), None), 1.0);
/// assert_eq!(meters_per_second_to_mach(speed_of_sound(Some(10_000.0)), Some(10_000.0)), 1.0);
/// ```
pub fn meters_per_second_to_mach(speed: f64, altitude_m: Option<f64>) -> f64 {
    speed / speed_of_sound(altitude_m)
}
