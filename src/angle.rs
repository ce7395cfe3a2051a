use std::{fmt::Display, str::FromStr};

use log::{debug, trace};

use crate::{
    constants::{FRACTION_PLACES, GEOSPATIAL_VALUE_LENGTH, TEN_THOUSANDTHS},
    format::GeospatialFormat,
    utility::{dms, leading_sign, GeoMath},
    Error, ParseCoord,
};

const MINUTES_PER_DEGREE: f64 = dms::DM as f64;
const SECONDS_PER_MINUTE: f64 = dms::MS as f64;
const SECONDS_PER_DEGREE: f64 = dms::DS as f64;

/// A single latitude or longitude in one of the three angular notations.
///
/// The sign of the angle is carried by the most significant nonzero
/// component, so `-0° 30'` is written `DegreesMinutes(0.0, -30.0)`.
/// When composing, that sign applies to the whole angle.
///
/// Values usually come from a `[degrees, minutes, seconds]` triple, where the
/// notation is inferred from trailing zeros:
///
/// ```
/// use geodetic::AngularValue;
///
/// assert_eq!(AngularValue::from([32.8303, 0.0, 0.0]), AngularValue::Degrees(32.8303));
/// assert_eq!(AngularValue::from([32.0, 49.818, 0.0]), AngularValue::DegreesMinutes(32.0, 49.818));
/// assert_eq!(
///     AngularValue::from([32.0, 49.0, 49.08]),
///     AngularValue::DegreesMinutesSeconds(32.0, 49.0, 49.08),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngularValue {
    /// Decimal degrees (DD)
    Degrees(f64),
    /// Whole degrees and decimal minutes (DDM)
    DegreesMinutes(f64, f64),
    /// Whole degrees, whole minutes and decimal seconds (DMS)
    DegreesMinutesSeconds(f64, f64, f64),
}

impl AngularValue {
    /// Infers the notation of a `[degrees, minutes, seconds]` triple from the
    /// last slot holding a nonzero value. An all-zero triple is `Degrees(0.0)`.
    /// A NaN slot counts as nonzero, so it is never dropped.
    pub fn classify(value: [f64; 3]) -> AngularValue {
        let [d, m, s] = value;
        match value.iter().rposition(|c| c.is_nan() || c.abs() > 0.) {
            Some(2) => AngularValue::DegreesMinutesSeconds(d, m, s),
            Some(1) => AngularValue::DegreesMinutes(d, m),
            Some(_) => AngularValue::Degrees(d),
            None => {
                trace!("All-zero angle {value:?} taken as decimal degrees");
                AngularValue::Degrees(d)
            }
        }
    }

    /// Number of significant slots: 1 for DD, 2 for DDM and 3 for DMS.
    pub fn dimension(&self) -> usize {
        match self {
            AngularValue::Degrees(_) => 1,
            AngularValue::DegreesMinutes(..) => 2,
            AngularValue::DegreesMinutesSeconds(..) => 3,
        }
    }

    /// The notation this value is written in.
    pub fn format(&self) -> GeospatialFormat {
        match self {
            AngularValue::Degrees(_) => GeospatialFormat::DecimalDegrees,
            AngularValue::DegreesMinutes(..) => GeospatialFormat::DegreesDecimalMinutes,
            AngularValue::DegreesMinutesSeconds(..) => GeospatialFormat::DegreesMinutesSeconds,
        }
    }

    /// The value as a `[degrees, minutes, seconds]` triple, unused slots zero.
    pub fn to_array(&self) -> [f64; 3] {
        match *self {
            AngularValue::Degrees(d) => [d, 0., 0.],
            AngularValue::DegreesMinutes(d, m) => [d, m, 0.],
            AngularValue::DegreesMinutesSeconds(d, m, s) => [d, m, s],
        }
    }

    /// Converts to degrees, minutes and seconds, with seconds rounded to four
    /// decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if any component is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::AngularValue;
    ///
    /// let dms = AngularValue::Degrees(32.8303).to_dms().unwrap();
    /// assert_eq!(dms.to_array(), [32.0, 49.0, 49.08]);
    ///
    /// let dms = AngularValue::DegreesMinutes(32.0, 49.818).to_dms().unwrap();
    /// assert_eq!(dms.to_array(), [32.0, 49.0, 49.08]);
    ///
    /// let dms = AngularValue::Degrees(-0.5).to_dms().unwrap();
    /// assert_eq!(dms.to_array(), [0.0, -30.0, 0.0]);
    ///
    /// assert!(AngularValue::Degrees(f64::NAN).to_dms().is_err());
    /// ```
    pub fn to_dms(&self) -> Result<AngularValue, Error> {
        self.to_dms_with_precision(TEN_THOUSANDTHS)
    }

    /// Converts to degrees, minutes and seconds, with seconds rounded to
    /// `places` decimal places. Values already in DMS keep their minutes and
    /// seconds; only the rounding is applied. `places` above 15 is treated as
    /// 15, the most an `f64` angle can carry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if any component is NaN or infinite.
    pub fn to_dms_with_precision(&self, places: u32) -> Result<AngularValue, Error> {
        self.finite()?;
        let sign = self.sign();
        let [d, m, s] = self.magnitudes();
        let degrees = d.trunc();

        let (degrees, minutes, seconds) = match self {
            AngularValue::Degrees(_) => {
                let minutes = d.frac(FRACTION_PLACES) * MINUTES_PER_DEGREE;
                let seconds = minutes.frac(FRACTION_PLACES) * SECONDS_PER_MINUTE;
                carry(degrees, minutes.trunc(), seconds.round_to(places))
            }
            AngularValue::DegreesMinutes(..) => {
                let seconds = m.frac(FRACTION_PLACES) * SECONDS_PER_MINUTE;
                carry(degrees, m.trunc(), seconds.round_to(places))
            }
            AngularValue::DegreesMinutesSeconds(..) => (degrees, m.trunc(), s.round_to(places)),
        };

        let [d, m, s] = signed([degrees, minutes, seconds], sign);
        AngularValue::DegreesMinutesSeconds(d, m, s).finite()
    }

    /// Converts to degrees and decimal minutes, with minutes rounded to four
    /// decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if any component is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::AngularValue;
    ///
    /// let ddm = AngularValue::Degrees(32.8303).to_ddm().unwrap();
    /// assert_eq!(ddm.to_array(), [32.0, 49.818, 0.0]);
    ///
    /// let ddm = AngularValue::DegreesMinutesSeconds(32.0, 49.0, 49.08).to_ddm().unwrap();
    /// assert_eq!(ddm.to_array(), [32.0, 49.818, 0.0]);
    /// ```
    pub fn to_ddm(&self) -> Result<AngularValue, Error> {
        self.to_ddm_with_precision(TEN_THOUSANDTHS)
    }

    /// Converts to degrees and decimal minutes, with minutes rounded to
    /// `places` decimal places (at most 15).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if any component is NaN or infinite.
    pub fn to_ddm_with_precision(&self, places: u32) -> Result<AngularValue, Error> {
        self.finite()?;
        let sign = self.sign();
        let [d, m, s] = self.magnitudes();

        let minutes = match self {
            AngularValue::Degrees(_) => d.frac(FRACTION_PLACES) * MINUTES_PER_DEGREE,
            _ => m + s / SECONDS_PER_MINUTE,
        }
        .round_to(places);
        let (degrees, minutes) = if minutes >= MINUTES_PER_DEGREE {
            (d.trunc() + 1., minutes - MINUTES_PER_DEGREE)
        } else {
            (d.trunc(), minutes)
        };

        let [d, m, _] = signed([degrees, minutes, 0.], sign);
        AngularValue::DegreesMinutes(d, m).finite()
    }

    /// Composes the value into signed decimal degrees.
    ///
    /// The sign is taken from the most significant nonzero component rather
    /// than from the degrees slot alone, and a negative zero counts as
    /// negative. Lower components contribute their magnitude only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if the result is not a finite number.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::AngularValue;
    ///
    /// let dd = AngularValue::DegreesMinutesSeconds(-32.0, 49.0, 49.08).to_decimal_degrees().unwrap();
    /// assert!((dd + 32.8303).abs() < 1e-12);
    ///
    /// let dd = AngularValue::DegreesMinutes(0.0, -30.0).to_decimal_degrees().unwrap();
    /// assert_eq!(dd, -0.5);
    ///
    /// assert!(AngularValue::Degrees(f64::NAN).to_decimal_degrees().is_err());
    /// ```
    pub fn to_decimal_degrees(&self) -> Result<f64, Error> {
        let [d, m, s] = self.magnitudes();
        let value = self.sign() * (d + m / MINUTES_PER_DEGREE + s / SECONDS_PER_DEGREE);

        if value.is_finite() {
            Ok(value)
        } else {
            debug!("Angle {self:?} does not compose to a finite value");
            Err(Error::InvalidAngle(format!("{self:?} is not a finite angle")))
        }
    }

    /// Composes the value into signed radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if the result is not a finite number.
    pub fn to_radians(&self) -> Result<f64, Error> {
        self.to_decimal_degrees().map(f64::to_radians)
    }

    fn finite(self) -> Result<AngularValue, Error> {
        if self.to_array().iter().all(|c| c.is_finite()) {
            Ok(self)
        } else {
            debug!("Angle {self:?} has a component that is not finite");
            Err(Error::InvalidAngle(format!("{self:?} has a component that is not finite")))
        }
    }

    fn sign(&self) -> f64 {
        leading_sign(&self.to_array())
    }

    fn magnitudes(&self) -> [f64; 3] {
        self.to_array().map(f64::abs)
    }
}

// Rounding may push seconds up to a full minute and minutes to a full degree.
fn carry(degrees: f64, minutes: f64, seconds: f64) -> (f64, f64, f64) {
    let (minutes, seconds) = if seconds >= SECONDS_PER_MINUTE {
        (minutes + 1., seconds - SECONDS_PER_MINUTE)
    } else {
        (minutes, seconds)
    };

    if minutes >= MINUTES_PER_DEGREE {
        (degrees + 1., minutes - MINUTES_PER_DEGREE, seconds)
    } else {
        (degrees, minutes, seconds)
    }
}

// Puts the sign on the most significant nonzero component.
fn signed(mut components: [f64; 3], sign: f64) -> [f64; 3] {
    if let Some(c) = components.iter_mut().find(|c| c.abs() > 0.) {
        *c *= sign;
    }
    components
}

impl From<[f64; 3]> for AngularValue {
    fn from(value: [f64; 3]) -> Self {
        AngularValue::classify(value)
    }
}

impl TryFrom<&[f64]> for AngularValue {
    type Error = Error;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let value: [f64; GEOSPATIAL_VALUE_LENGTH] = value.try_into().map_err(|_| {
            debug!("Rejected angle with {} components", value.len());
            Error::InvalidShape(value.len())
        })?;

        Ok(AngularValue::classify(value))
    }
}

impl ParseCoord for AngularValue {
    /// Parses three whitespace-separated numbers, `"32 49 49.08"`.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let tokens = value.split_whitespace().collect::<Vec<_>>();
        AngularValue::try_from(tokens.as_slice())
    }
}

impl FromStr for AngularValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AngularValue::parse_coord(s)
    }
}

impl TryFrom<&[&str]> for AngularValue {
    type Error = Error;

    fn try_from(value: &[&str]) -> Result<Self, Self::Error> {
        if value.len() != GEOSPATIAL_VALUE_LENGTH {
            debug!("Rejected angle with {} components", value.len());
            return Err(Error::InvalidShape(value.len()));
        }

        let mut parsed = [0_f64; GEOSPATIAL_VALUE_LENGTH];
        for (slot, token) in parsed.iter_mut().zip(value) {
            *slot = token.trim().parse().map_err(|_| {
                debug!("Rejected angle component {token:?}");
                Error::ParseAngle(format!("{token:?} is not a number"))
            })?;
        }

        Ok(AngularValue::classify(parsed))
    }
}

impl Display for AngularValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [d, m, s] = self.to_array();
        let mut buf = ryu::Buffer::new();
        let d = buf.format(d);
        let mut buf = ryu::Buffer::new();
        let m = buf.format(m);
        let mut buf = ryu::Buffer::new();
        let s = buf.format(s);
        write!(f, "{d} {m} {s}")
    }
}

/// Anything that can be read as a `[degrees, minutes, seconds]` angle:
/// numeric triples, string triples, or a single space-delimited string.
pub trait AngularInput {
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if there are not exactly three
    /// components and [`Error::ParseAngle`] if a text component is not a number.
    fn to_angular_value(&self) -> Result<AngularValue, Error>;
}

impl AngularInput for AngularValue {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        Ok(*self)
    }
}

impl AngularInput for [f64] {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::try_from(self)
    }
}

impl<const N: usize> AngularInput for [f64; N] {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::try_from(self.as_slice())
    }
}

impl AngularInput for Vec<f64> {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::try_from(self.as_slice())
    }
}

impl AngularInput for [&str] {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::try_from(self)
    }
}

impl<const N: usize> AngularInput for [&str; N] {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::try_from(self.as_slice())
    }
}

impl AngularInput for str {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::parse_coord(self)
    }
}

impl AngularInput for String {
    fn to_angular_value(&self) -> Result<AngularValue, Error> {
        AngularValue::parse_coord(self)
    }
}
