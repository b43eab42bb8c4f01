//! Approximate sunrise, sunset and solar noon.
//!
//! Declination from the cosine approximation
//! `dec = -23.45 * cos(360/365 * (day_of_year + 10))`, and the sunrise hour
//! angle `H = acos(-tan(lat) * tan(dec))`. The acos argument is clamped to
//! [-1, 1], so polar day collapses to H = 180 and polar night to H = 0.
//!
//! Good to a few minutes at mid latitudes; no refraction or equation of time.

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use jyoti_math::format_hour_12;

use crate::riseset_types::{SolarLocation, SolarTimes};

/// Mean obliquity used by the declination approximation, in degrees.
const MAX_DECLINATION_DEG: f64 = 23.45;

/// Minutes of clock time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Solar declination in degrees for a 1-based day of the year.
pub fn solar_declination_deg(day_of_year: u32) -> f64 {
    -MAX_DECLINATION_DEG * (TAU / 365.0 * (day_of_year as f64 + 10.0)).cos()
}

/// Sunrise hour angle in degrees, in [0, 180].
pub fn sunrise_hour_angle_deg(latitude_deg: f64, declination_deg: f64) -> f64 {
    let cos_h = -latitude_deg.to_radians().tan() * declination_deg.to_radians().tan();
    cos_h.clamp(-1.0, 1.0).acos().to_degrees()
}

/// UTC offset of an IANA zone in minutes, taken at 12:00 UTC on `date`.
///
/// The same instant is rendered in UTC and in the zone and the wall clocks
/// are differenced. Returns `None` for unknown zone names.
pub fn utc_offset_minutes(date: NaiveDate, timezone: &str) -> Option<i64> {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::warn!(timezone, error = %e, "unknown time zone");
            return None;
        }
    };
    let instant = date.and_hms_opt(12, 0, 0)?.and_utc();
    let local = instant.with_timezone(&tz).naive_local();
    Some((local - instant.naive_utc()).num_minutes())
}

/// Local solar noon as an hour of the day.
///
/// With both longitude and time zone, noon moves by 4 minutes per degree
/// between the zone's standard meridian (`offset_hours * 15`) and the
/// observer. Otherwise, or if the zone cannot be resolved, noon is 12:00.
pub fn solar_noon_hour(date: NaiveDate, location: &SolarLocation) -> f64 {
    let (Some(lng), Some(tz)) = (location.longitude_deg, location.timezone.as_deref()) else {
        return 12.0;
    };
    if !lng.is_finite() {
        tracing::debug!(lng, "non-finite longitude, solar noon at 12:00");
        return 12.0;
    }
    match utc_offset_minutes(date, tz) {
        Some(offset_minutes) => {
            let meridian_deg = offset_minutes as f64 / 60.0 * 15.0;
            12.0 + (meridian_deg - lng) * MINUTES_PER_DEGREE / 60.0
        }
        None => {
            tracing::debug!(timezone = tz, "falling back to unshifted solar noon");
            12.0
        }
    }
}

/// Sunrise and sunset for a date and location.
pub fn solar_times(date: NaiveDate, location: &SolarLocation) -> SolarTimes {
    let declination = solar_declination_deg(date.ordinal());
    let half_day_hours = sunrise_hour_angle_deg(location.latitude_deg, declination) / 15.0;
    let noon = solar_noon_hour(date, location);
    let sunrise_hour = noon - half_day_hours;
    let sunset_hour = noon + half_day_hours;
    SolarTimes {
        sunrise_hour,
        sunset_hour,
        solar_noon_hour: noon,
        sunrise: format_hour_12(sunrise_hour),
        sunset: format_hour_12(sunset_hour),
    }
}
