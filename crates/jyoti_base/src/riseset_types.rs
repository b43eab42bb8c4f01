//! Types for approximate sunrise/sunset computation.

/// Latitude assumed when the caller gives no location (New Delhi).
pub const DEFAULT_LATITUDE_DEG: f64 = 28.6;

/// Observer location for solar times.
///
/// Longitude and time zone only matter together: when both are present the
/// solar noon is shifted from 12:00 by the observer's offset from the zone's
/// standard meridian.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolarLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: Option<f64>,
    /// IANA time zone name, e.g. "Asia/Kolkata".
    pub timezone: Option<String>,
}

impl Default for SolarLocation {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: None,
            timezone: None,
        }
    }
}

impl SolarLocation {
    /// Location with full longitude correction.
    pub fn new(latitude_deg: f64, longitude_deg: f64, timezone: impl Into<String>) -> Self {
        Self {
            latitude_deg,
            longitude_deg: Some(longitude_deg),
            timezone: Some(timezone.into()),
        }
    }

    /// Latitude only; solar noon stays at 12:00.
    pub fn latitude_only(latitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            ..Self::default()
        }
    }
}

/// Sunrise and sunset as local hours of the day.
///
/// Hours are not clamped to [0, 24): near the poles sunrise can reach 0 and
/// sunset 24, and a longitude shift can push either past the day boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolarTimes {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
    pub solar_noon_hour: f64,
    /// 12-hour clock text, e.g. "6:04 AM".
    pub sunrise: String,
    pub sunset: String,
}

impl SolarTimes {
    /// Hours between sunrise and sunset.
    pub fn day_length_hours(&self) -> f64 {
        self.sunset_hour - self.sunrise_hour
    }
}
