//! Planetary position as reported by an external chart engine.

use jyoti_math::normalize_360;

use crate::error::VedicError;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Sidereal position of one chart point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanetaryPosition {
    /// 0-based sign index (0 = Mesha). Read modulo 12.
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Whether the body is in apparent retrograde motion.
    pub retrograde: bool,
    /// Nakshatra name as supplied by the engine.
    pub nakshatra: String,
    /// Nakshatra pada, 1-4.
    pub nakshatra_pada: u8,
}

impl PlanetaryPosition {
    /// Build a position from an absolute sidereal longitude.
    pub fn from_longitude(sidereal_lon_deg: f64, retrograde: bool) -> Self {
        let lon = normalize_360(sidereal_lon_deg);
        let sign = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        Self {
            sign_index: sign.rashi_index,
            degree_in_sign: sign.degrees_in_rashi,
            retrograde,
            nakshatra: nak.nakshatra.name().to_string(),
            nakshatra_pada: nak.pada,
        }
    }

    /// Absolute sidereal longitude, `sign * 30 + degree`, in [0, 360).
    pub fn absolute_longitude(&self) -> f64 {
        normalize_360((self.sign_index % 12) as f64 * 30.0 + self.degree_in_sign)
    }

    /// The sign this position falls in.
    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign_index)
    }

    /// Check that every field is inside its documented range.
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.sign_index > 11 {
            return Err(VedicError::InvalidPosition("sign index must be 0-11"));
        }
        if !(0.0..30.0).contains(&self.degree_in_sign) {
            return Err(VedicError::InvalidPosition("degree in sign must be in [0, 30)"));
        }
        if !(1..=4).contains(&self.nakshatra_pada) {
            return Err(VedicError::InvalidPosition("nakshatra pada must be 1-4"));
        }
        Ok(())
    }
}
