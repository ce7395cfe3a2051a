use std::{fmt::Display, str::FromStr};

use crate::Error;

/// Tags which representation a coordinate value is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeospatialFormat {
    Cartesian,
    #[cfg_attr(feature = "serde", serde(rename = "DegreesMinuteSeconds"))]
    DegreesMinutesSeconds,
    DegreesDecimalMinutes,
    DecimalDegrees,
    RadianDegrees,
}

impl GeospatialFormat {
    pub const ALL: [GeospatialFormat; 5] = [
        GeospatialFormat::Cartesian,
        GeospatialFormat::DegreesMinutesSeconds,
        GeospatialFormat::DegreesDecimalMinutes,
        GeospatialFormat::DecimalDegrees,
        GeospatialFormat::RadianDegrees,
    ];

    /// The conventional name of the format.
    ///
    /// # Example
    ///
    /// ```
    /// use geodetic::GeospatialFormat;
    ///
    /// assert_eq!(GeospatialFormat::DegreesMinutesSeconds.name(), "DegreesMinuteSeconds");
    /// assert_eq!("DecimalDegrees".parse::<GeospatialFormat>().unwrap(), GeospatialFormat::DecimalDegrees);
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            GeospatialFormat::Cartesian => "Cartesian",
            GeospatialFormat::DegreesMinutesSeconds => "DegreesMinuteSeconds",
            GeospatialFormat::DegreesDecimalMinutes => "DegreesDecimalMinutes",
            GeospatialFormat::DecimalDegrees => "DecimalDegrees",
            GeospatialFormat::RadianDegrees => "RadianDegrees",
        }
    }
}

impl Display for GeospatialFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeospatialFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeospatialFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| Error::ParseFormat(s.to_string()))
    }
}
