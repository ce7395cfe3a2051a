//! Conversions between Earth-centered cartesian coordinates, geodetic
//! latitude/longitude/height on a reference ellipsoid, and the three common
//! angular notations: degrees/minutes/seconds, degrees/decimal minutes and
//! decimal degrees.
//!
//! ```
//! use geodetic::{AngularValue, Geodetic};
//!
//! let xyz = Geodetic::new(32.8303, -117.1, 25.0).to_cartesian();
//! let back = xyz.to_geodetic();
//! assert!((back.latitude() - 32.8303).abs() < 1e-9);
//!
//! let dms = AngularValue::Degrees(back.latitude()).to_dms().unwrap();
//! assert_eq!(dms.to_array(), [32.0, 49.0, 49.08]);
//! ```
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod angle;
pub mod atmosphere;
pub mod cartesian;
pub mod convert;
pub mod datum;
pub mod format;
pub mod geodetic;

pub use angle::{AngularInput, AngularValue};
pub use cartesian::Cartesian;
pub use datum::Datum;
pub use format::GeospatialFormat;
pub use geodetic::Geodetic;

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Angle must have exactly 3 components, got {0}")]
    InvalidShape(usize),
    #[error("Angle is invalid: {0}")]
    InvalidAngle(String),
    #[error("Angle string is invalid: {0}")]
    ParseAngle(String),
    #[error("Unknown geospatial format: {0}")]
    ParseFormat(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
