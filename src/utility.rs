use crate::constants::MAX_DECIMAL_PLACES;

#[allow(dead_code)]
pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    #[cfg(test)]
    fn eps_eq(&self, other: Self) -> bool;
    fn round_to(&self, places: u32) -> Self;
    fn frac(&self, places: u32) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    #[cfg(test)]
    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Round half away from zero to a fixed number of decimal places, at most
    /// `MAX_DECIMAL_PLACES`. Values too large to scale are already whole.
    fn round_to(&self, places: u32) -> f64 {
        let scale = 10_f64.powf(f64::from(places.min(MAX_DECIMAL_PLACES)));
        let scaled = *self * scale;
        if scaled.is_finite() {
            scaled.round() / scale
        } else {
            *self
        }
    }

    /// Unsigned fractional part, rounded to `places` decimals so that binary
    /// noise such as `0.83029999999` reads back as `0.8303`.
    fn frac(&self, places: u32) -> f64 {
        let value = self.abs();
        (value - value.trunc()).round_to(places)
    }
}

/// Sign of the most significant nonzero component, `1.0` if there is none.
/// A negative zero counts as negative so that `-0 30 0` reads as `-0.5`.
pub(crate) fn leading_sign(components: &[f64]) -> f64 {
    components
        .iter()
        .find(|c| c.is_sign_negative() || !c.is_zero())
        .map_or(1.0, |c| if c.is_sign_negative() { -1.0 } else { 1.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frac_drops_binary_noise() {
        assert!(32.8303_f64.frac(10).eps_eq(0.8303));
        assert!((-32.8303_f64).frac(10).eps_eq(0.8303));
        assert!(49.818_f64.frac(10).eps_eq(0.818));
        assert!(12_f64.frac(10).is_zero());
    }

    #[test]
    fn round_to_places() {
        assert!(49.080_000_000_01_f64.round_to(4).eps_eq(49.08));
        assert!(0.123_45_f64.round_to(2).eps_eq(0.12));
        assert!((-1.005_01_f64).round_to(2).eps_eq(-1.01));
        assert!(0.123_45_f64.round_to(u32::MAX).eps_eq(0.123_45));
        assert!(1e300_f64.round_to(20).eps_eq(1e300));
    }

    #[test]
    fn sign_from_most_significant_component() {
        assert!(leading_sign(&[-32., 49., 49.08]).eps_eq(-1.));
        assert!(leading_sign(&[0., -30., 0.]).eps_eq(-1.));
        assert!(leading_sign(&[-0., 30., 0.]).eps_eq(-1.));
        assert!(leading_sign(&[0., 30., -5.]).eps_eq(1.));
        assert!(leading_sign(&[0., 0., 0.]).eps_eq(1.));
    }
}
