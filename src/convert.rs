//! Free functions over plain numbers and triples, for callers that do not
//! want to go through [`Geodetic`], [`Cartesian`] and [`AngularValue`].

use crate::{
    angle::{AngularInput, AngularValue},
    cartesian::Cartesian,
    datum::Datum,
    geodetic::Geodetic,
    Error,
};

/// Converts geodetic (latitude, longitude, height) to cartesian `[x, y, z]`.
/// Height defaults to `0` and datum to [`Datum::WGS84`].
///
/// # Usage
///
/// ```
/// use geodetic::convert::to_cartesian;
///
/// assert_eq!(to_cartesian(0.0, 0.0, None, None), [6_378_137.0, 0.0, 0.0]);
/// ```
pub fn to_cartesian(latitude: f64, longitude: f64, height: Option<f64>, datum: Option<&Datum>) -> [f64; 3] {
    let xyz = Geodetic::new(latitude, longitude, height.unwrap_or_default())
        .to_cartesian_with(datum.unwrap_or(&Datum::WGS84));

    [xyz.x, xyz.y, xyz.z]
}

/// Converts cartesian (x, y, z) to geodetic `[latitude, longitude, height]`,
/// with height rounded to a tenth of a meter. Datum defaults to [`Datum::WGS84`].
///
/// # Usage
///
/// ```
/// use geodetic::convert::{to_cartesian, to_geodetic};
///
/// let [x, y, z] = to_cartesian(32.8303, -117.1, Some(25.0), None);
/// let [lat, lon, h] = to_geodetic(x, y, z, None);
///
/// assert!((lat - 32.8303).abs() < 1e-9);
/// assert!((lon + 117.1).abs() < 1e-9);
/// assert_eq!(h, 25.0);
/// ```
pub fn to_geodetic(x: f64, y: f64, z: f64, datum: Option<&Datum>) -> [f64; 3] {
    let coord = Cartesian::new(x, y, z).to_geodetic_with(datum.unwrap_or(&Datum::WGS84));

    [coord.latitude, coord.longitude, coord.height]
}

/// Converts a `[degrees, minutes, seconds]` triple in any notation to
/// `[degrees, minutes, seconds]`, seconds rounded to four decimal places.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if `value` does not have exactly three
/// components and [`Error::InvalidAngle`] if any component is NaN or infinite.
///
/// # Usage
///
/// ```
/// use geodetic::convert::to_degrees_minutes_seconds;
///
/// assert_eq!(to_degrees_minutes_seconds(&[32.8303, 0.0, 0.0]).unwrap(), [32.0, 49.0, 49.08]);
/// assert_eq!(to_degrees_minutes_seconds(&[32.0, 49.818, 0.0]).unwrap(), [32.0, 49.0, 49.08]);
/// assert!(to_degrees_minutes_seconds(&[1.0, 2.0]).is_err());
/// assert!(to_degrees_minutes_seconds(&[1.0, 0.0, f64::INFINITY]).is_err());
/// ```
pub fn to_degrees_minutes_seconds(value: &[f64]) -> Result<[f64; 3], Error> {
    Ok(AngularValue::try_from(value)?.to_dms()?.to_array())
}

/// Converts a `[degrees, minutes, seconds]` triple in any notation to
/// `[degrees, minutes, 0]`, minutes rounded to four decimal places.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if `value` does not have exactly three
/// components and [`Error::InvalidAngle`] if any component is NaN or infinite.
///
/// # Usage
///
/// ```
/// use geodetic::convert::to_degrees_decimal_minutes;
///
/// assert_eq!(to_degrees_decimal_minutes(&[32.8303, 0.0, 0.0]).unwrap(), [32.0, 49.818, 0.0]);
/// assert_eq!(to_degrees_decimal_minutes(&[32.0, 49.0, 49.08]).unwrap(), [32.0, 49.818, 0.0]);
/// ```
pub fn to_degrees_decimal_minutes(value: &[f64]) -> Result<[f64; 3], Error> {
    Ok(AngularValue::try_from(value)?.to_ddm()?.to_array())
}

/// Composes a `[degrees, minutes, seconds]` triple, given as numbers, as
/// text components or as one space-delimited string, into signed decimal
/// degrees.
///
/// The sign comes from the most significant nonzero component, not only from
/// the degrees slot, and a negative zero counts as negative: `[0, -30, 0]` and
/// `"-0 30 0"` are both `-0.5`. Signs on lower components are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] or [`Error::ParseAngle`] for malformed
/// input and [`Error::InvalidAngle`] if the result is not finite.
///
/// # Usage
///
/// ```
/// use geodetic::convert::to_decimal_degrees;
///
/// let dd = to_decimal_degrees(&["32", "49", "49.08"]).unwrap();
/// assert!((dd - 32.8303).abs() < 1e-12);
///
/// let dd = to_decimal_degrees("-32 49 49.08").unwrap();
/// assert!((dd + 32.8303).abs() < 1e-12);
///
/// assert_eq!(to_decimal_degrees(&[0.0, -30.0, 0.0]).unwrap(), -0.5);
/// assert_eq!(to_decimal_degrees(&[-1.0, -30.0, 0.0]).unwrap(), -1.5);
///
/// assert!(to_decimal_degrees(&[f64::NAN, 0.0, 0.0]).is_err());
/// assert!(to_decimal_degrees(&[32.0, 0.0, f64::NAN]).is_err());
/// ```
pub fn to_decimal_degrees<V>(value: &V) -> Result<f64, Error>
where
    V: AngularInput + ?Sized,
{
    value.to_angular_value()?.to_decimal_degrees()
}

/// Parses one space-delimited `"D M S"` string into signed decimal degrees.
///
/// # Errors
///
/// See [`to_decimal_degrees`].
pub fn parse_decimal_degrees(value: &str) -> Result<f64, Error> {
    to_decimal_degrees(value)
}
