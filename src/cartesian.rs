use std::fmt::Display;

use log::debug;

use crate::{datum::Datum, geodetic::Geodetic, utility::{dms, GeoMath}, ThisOrThat};

/// Representation of an Earth-centered, Earth-fixed (ECEF) position in meters.
/// Can be converted to/from [`Geodetic`] on any [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cartesian {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Cartesian {
        Self { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Converts from [`Cartesian`] to [`Geodetic`] on [`Datum::WGS84`].
    /// Height is rounded to a tenth of a meter.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::{Cartesian, Geodetic};
    ///
    /// let coord = Geodetic::new(32.8303, -117.1, 25.0);
    /// let converted = coord.to_cartesian().to_geodetic();
    ///
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-9);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-9);
    /// assert_eq!(converted.height(), 25.0);
    ///
    /// // On the polar axis
    /// let pole = Cartesian::new(0.0, 0.0, -6_356_852.3).to_geodetic();
    /// assert_eq!(pole.latitude(), -90.0);
    /// assert_eq!(pole.longitude(), 0.0);
    /// assert_eq!(pole.height(), 100.0);
    /// ```
    pub fn to_geodetic(&self) -> Geodetic {
        self.to_geodetic_with(&Datum::WGS84)
    }

    /// Converts from [`Cartesian`] to [`Geodetic`] on the given datum without
    /// iterating.
    ///
    /// The reduced latitude is taken from the confocal ellipsoid through the
    /// point (Vermeille, "Cartesian to Geodetic Coordinates without
    /// Iterations", <http://dx.doi.org/10.1061/(ASCE)0733-9453(2000)126:1(1)>)
    /// and evaluated into geodetic latitude with Bowring's formula. Points
    /// inside the ellipsoid get a negative height.
    ///
    /// On the polar axis the longitude is undefined; the result is then
    /// latitude ±90 (north for `z >= 0`), longitude 0 and height `|z| - b`.
    #[allow(non_snake_case)]
    pub fn to_geodetic_with(&self, datum: &Datum) -> Geodetic {
        let Cartesian { x, y, z } = *self;
        let a = datum.semi_major_axis;
        let b = datum.semi_minor_axis;
        let E = datum.linear_eccentricity;
        let es = datum.first_eccentricity_squared;

        // Distance from the polar axis
        let Q = x.hypot(y);

        if Q.is_zero() {
            debug!("Point ({x}, {y}, {z}) is on the polar axis, longitude set to 0");
            let pole = f64::from(dms::QD);
            let latitude = (z < 0.).ternary(-pole, pole);
            return Geodetic::new(latitude, 0., (z.abs() - b).round_to(1));
        }

        let E2 = E.powi(2);
        let R2mE2 = x.powi(2) + y.powi(2) + z.powi(2) - E2;
        // Semi-minor axis of the confocal ellipsoid through the point
        let u = (0.5 * (R2mE2 + (R2mE2.powi(2) + 4. * E2 * z.powi(2)).sqrt())).sqrt();
        let beta = ((u.powi(2) + E2).sqrt() * z).atan2(u * Q);
        let (sin_beta, cos_beta) = beta.sin_cos();

        // Close to the center the normal through the point is not unique and
        // the denominator can turn negative; keep latitude within [-90, 90].
        let latitude = (z + datum.second_eccentricity_squared() * b * sin_beta.powi(3))
            .atan2((Q - es * a * cos_beta.powi(3)).max(0.));
        let longitude = y.atan2(x);

        let (sin_lat, cos_lat) = latitude.sin_cos();
        let height = Q * cos_lat + z * sin_lat - a * (1. - es * sin_lat.powi(2)).sqrt();

        Geodetic::new(latitude.to_degrees(), longitude.to_degrees(), height.round_to(1))
    }

    /// Converts from [`Geodetic`] to [`Cartesian`] on [`Datum::WGS84`].
    pub fn from_geodetic(value: &Geodetic) -> Cartesian {
        value.to_cartesian()
    }
}

impl From<Geodetic> for Cartesian {
    fn from(value: Geodetic) -> Self {
        value.to_cartesian()
    }
}

impl Display for Cartesian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        let mut buf = ryu::Buffer::new();
        let z = buf.format(self.z);
        write!(f, "{x} {y} {z}")
    }
}
