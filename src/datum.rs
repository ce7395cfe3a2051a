use log::warn;

use crate::constants::{
    WGS84_A, WGS84_AXIS_RATIO, WGS84_B, WGS84_E, WGS84_E2, WGS84_F, WGS84_F_INV,
};

/// Ellipsoid parameters of a geodetic datum. All derived fields are stored
/// rather than computed so that published constants (such as the ones for
/// [`Datum::WGS84`]) are used exactly as published.
///
/// A `Datum` is never validated: passing one whose fields disagree with each
/// other gives numerically wrong results rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Datum {
    pub(crate) semi_major_axis: f64,
    pub(crate) semi_minor_axis: f64,
    pub(crate) flattening: f64,
    pub(crate) flattening_inverse: f64,
    pub(crate) first_eccentricity_squared: f64,
    pub(crate) linear_eccentricity: f64,
    pub(crate) axis_ratio: f64,
}

impl Datum {
    /// World Geodetic System 1984, an Earth-centered, Earth-fixed global datum.
    ///
    /// <http://earth-info.nga.mil/GandG/publications/tr8350.2/tr8350_2.html>
    pub const WGS84: Datum = Datum {
        semi_major_axis: WGS84_A,
        semi_minor_axis: WGS84_B,
        flattening: WGS84_F,
        flattening_inverse: WGS84_F_INV,
        first_eccentricity_squared: WGS84_E2,
        linear_eccentricity: WGS84_E,
        axis_ratio: WGS84_AXIS_RATIO,
    };

    /// Builds a datum from its semi-major axis `a` and semi-minor axis `b`
    /// (meters), deriving the remaining parameters.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::Datum;
    ///
    /// let grs80 = Datum::from_axes(6_378_137.0, 6_356_752.314_140_347);
    ///
    /// assert!((grs80.flattening_inverse() - 298.257_222_101).abs() < 1e-6);
    /// assert!((grs80.first_eccentricity_squared() - 0.006_694_380_022_90).abs() < 1e-12);
    /// ```
    pub fn from_axes(semi_major_axis: f64, semi_minor_axis: f64) -> Datum {
        let a = semi_major_axis;
        let b = semi_minor_axis;
        if a <= 0. || b <= 0. || b > a {
            warn!("Datum axes a={a} b={b} do not describe an oblate ellipsoid");
        }

        let flattening = (a - b) / a;
        Datum {
            semi_major_axis: a,
            semi_minor_axis: b,
            flattening,
            flattening_inverse: 1. / flattening,
            first_eccentricity_squared: (a * a - b * b) / (a * a),
            linear_eccentricity: (a * a - b * b).abs().sqrt(),
            axis_ratio: b / a,
        }
    }

    /// Equatorial radius `a`, in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Polar radius `b`, in meters.
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// `f = (a - b) / a`
    #[inline]
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// `1 / f`
    #[inline]
    pub fn flattening_inverse(&self) -> f64 {
        self.flattening_inverse
    }

    /// `e² = (a² - b²) / a²`
    #[inline]
    pub fn first_eccentricity_squared(&self) -> f64 {
        self.first_eccentricity_squared
    }

    /// `E = sqrt(a² - b²)`, in meters.
    #[inline]
    pub fn linear_eccentricity(&self) -> f64 {
        self.linear_eccentricity
    }

    /// `b / a`
    #[inline]
    pub fn axis_ratio(&self) -> f64 {
        self.axis_ratio
    }

    /// `e'² = (a² - b²) / b² = e² / (1 - e²)`
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.first_eccentricity_squared;
        es / (1. - es)
    }
}

impl Default for Datum {
    fn default() -> Datum {
        Datum::WGS84
    }
}
