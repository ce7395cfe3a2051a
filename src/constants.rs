// WGS84 parameters, as published in NIMA TR8350.2
// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Semi-minor axis b = a(1-f)
pub(crate) const WGS84_B: f64 = 6_356_752.314_2;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 0.0033528106718309896;
// Inverse flattening
pub(crate) const WGS84_F_INV: f64 = 298.257_223_563;
// First eccentricity squared e^2
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_E2: f64 = 0.006694380004260827;
// Linear eccentricity sqrt(a^2 - b^2)
pub(crate) const WGS84_E: f64 = 521_854.008_423_39;
// Axis ratio b/a
pub(crate) const WGS84_AXIS_RATIO: f64 = 0.996_647_189_335;

// Decimal places kept in output minutes/seconds
pub(crate) const TEN_THOUSANDTHS: u32 = 4;
// Decimal places kept when splitting off a fractional part
pub(crate) const FRACTION_PLACES: u32 = 10;
// Slots in a [degrees, minutes, seconds] value
pub(crate) const GEOSPATIAL_VALUE_LENGTH: usize = 3;
// Most decimal places an f64 angle can carry
pub(crate) const MAX_DECIMAL_PLACES: u32 = 15;
