use std::fmt::Display;

use crate::{cartesian::Cartesian, datum::Datum, Error};

/// Representation of a geodetic position: latitude and longitude in decimal
/// degrees and height above the ellipsoid in meters. Can be converted
/// to/from [`Cartesian`] on any [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodetic {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "h", default))]
    pub(crate) height: f64,
}

impl Geodetic {
    /// Creates a position without checking the bounds of lat/lon. Longitudes
    /// outside `[-180, 180]` are kept as given.
    pub fn new(lat: f64, lon: f64, height: f64) -> Geodetic {
        Self {
            latitude: lat,
            longitude: lon,
            height,
        }
    }

    /// Tries to create a geodetic position. First checks if the values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::Geodetic;
    ///
    /// let coord = Geodetic::create(32.8303, -117.1, 25.0);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 32.8303);
    /// assert_eq!(coord.longitude(), -117.1);
    /// assert_eq!(coord.height(), 25.0);
    ///
    /// let invalid_coord_lat = Geodetic::create(100.0, 0.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = Geodetic::create(0.0, -200.0, 0.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64, height: f64) -> Result<Geodetic, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else if !height.is_finite() {
            Err(Error::InvalidCoord(format!("Height {height} is not finite.")))
        } else {
            Ok(Geodetic::new(lat, lon, height))
        }
    }

    /// Returns the latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the height above the ellipsoid in meters.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use geodetic::Geodetic;
    ///
    /// assert!(Geodetic::new(40.748333, -73.985278, 0.0).is_north());
    /// assert!(!Geodetic::new(-40.748333, -73.985278, 0.0).is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Converts from [`Geodetic`] to [`Cartesian`] on [`Datum::WGS84`].
    ///
    /// # Usage
    ///
    /// ```
    /// use geodetic::Geodetic;
    ///
    /// let xyz = Geodetic::new(0.0, 0.0, 0.0).to_cartesian();
    ///
    /// assert_eq!(xyz.x(), 6_378_137.0);
    /// assert_eq!(xyz.y(), 0.0);
    /// assert_eq!(xyz.z(), 0.0);
    /// ```
    pub fn to_cartesian(&self) -> Cartesian {
        self.to_cartesian_with(&Datum::WGS84)
    }

    /// Converts from [`Geodetic`] to [`Cartesian`] on the given datum, using
    /// the closed form through the prime vertical radius of curvature.
    #[allow(non_snake_case)]
    pub fn to_cartesian_with(&self, datum: &Datum) -> Cartesian {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let h = self.height;
        let es = datum.first_eccentricity_squared;

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        // Prime vertical radius of curvature
        let N = datum.semi_major_axis / (1. - es * sin_lat.powi(2)).sqrt();

        Cartesian::new(
            (N + h) * cos_lat * cos_lon,
            (N + h) * cos_lat * sin_lon,
            ((1. - es) * N + h) * sin_lat,
        )
    }

    /// Converts from [`Cartesian`] to [`Geodetic`] on [`Datum::WGS84`].
    pub fn from_cartesian(value: &Cartesian) -> Geodetic {
        value.to_geodetic()
    }
}

impl From<Cartesian> for Geodetic {
    fn from(value: Cartesian) -> Self {
        value.to_geodetic()
    }
}

impl Display for Geodetic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let height = buf.format(self.height);
        write!(
            f,
            "{lat} {lon} {height}",
        )
    }
}
