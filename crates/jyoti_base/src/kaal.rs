//! Inauspicious daytime windows: Rahu Kaal, Yamaganda and Gulika Kaal.
//!
//! Two methods are provided:
//! - a fixed weekday table of clock times (not location-aware), and
//! - the proportional method, which splits sunrise..sunset into 8 equal
//!   parts and picks one part per weekday from a traditional sequence.
//!
//! The weekday sequences are load-bearing and reproduced verbatim.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use jyoti_math::{format_hour_12, hour_of_day};

use crate::riseset::solar_times;
use crate::riseset_types::SolarLocation;

/// Number of equal parts the daylight span is divided into.
pub const DAY_PARTS: u8 = 8;

/// Rahu Kaal part (0-based, of 8) for Sunday..Saturday.
pub const RAHU_KAAL_PARTS: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Yamaganda part (0-based, of 8) for Sunday..Saturday.
pub const YAMAGANDA_PARTS: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Gulika Kaal part (0-based, of 8) for Sunday..Saturday.
pub const GULIKA_PARTS: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Fixed Rahu Kaal clock hours `(start, end)` for Sunday..Saturday.
pub const RAHU_KAAL_FIXED: [(f64, f64); 7] = [
    (16.5, 18.0), // Sunday    4:30 PM - 6:00 PM
    (7.5, 9.0),   // Monday    7:30 AM - 9:00 AM
    (15.0, 16.5), // Tuesday   3:00 PM - 4:30 PM
    (12.0, 13.5), // Wednesday 12:00 PM - 1:30 PM
    (13.5, 15.0), // Thursday  1:30 PM - 3:00 PM
    (10.5, 12.0), // Friday    10:30 AM - 12:00 PM
    (9.0, 10.5),  // Saturday  9:00 AM - 10:30 AM
];

/// Half-width of Abhijit Muhurta around solar noon, in hours (24 minutes).
const ABHIJIT_HALF_WIDTH_HOURS: f64 = 24.0 / 60.0;

/// A window of local clock time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimeWindow {
    pub start_hour: f64,
    pub end_hour: f64,
    /// 12-hour clock text.
    pub start: String,
    pub end: String,
    /// Whether "now" falls in `[start_hour, end_hour)`.
    pub is_active: bool,
}

impl TimeWindow {
    /// Window `[start, end)` evaluated against the current hour of the day.
    pub fn from_hours(start_hour: f64, end_hour: f64, now_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
            start: format_hour_12(start_hour),
            end: format_hour_12(end_hour),
            is_active: now_hour >= start_hour && now_hour < end_hour,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// Which of the 8-part daytime windows to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KaalKind {
    RahuKaal,
    Yamaganda,
    Gulika,
}

impl KaalKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika Kaal",
        }
    }

    /// 0-based part of the day (of 8) for a weekday.
    pub fn part_index(self, weekday: Weekday) -> u8 {
        let table = match self {
            Self::RahuKaal => &RAHU_KAAL_PARTS,
            Self::Yamaganda => &YAMAGANDA_PARTS,
            Self::Gulika => &GULIKA_PARTS,
        };
        table[weekday.num_days_from_sunday() as usize]
    }
}

fn now_hour(now: &NaiveDateTime) -> f64 {
    hour_of_day(now.hour(), now.minute(), now.second())
}

/// Fixed-table Rahu Kaal for a weekday.
pub fn rahu_kaal_fixed_for(weekday: Weekday, now_hour: f64) -> TimeWindow {
    let (start, end) = RAHU_KAAL_FIXED[weekday.num_days_from_sunday() as usize];
    TimeWindow::from_hours(start, end, now_hour)
}

/// Fixed-table Rahu Kaal for the local date and time `now`.
pub fn rahu_kaal_fixed(now: NaiveDateTime) -> TimeWindow {
    rahu_kaal_fixed_for(now.weekday(), now_hour(&now))
}

/// One eighth of the daylight span, chosen by weekday for the given kind.
///
/// With sunrise 6:00 and sunset 18:00 each part is 1.5 h, so Sunday's Rahu
/// Kaal (part 7) is `[16.5, 18.0)`.
pub fn kaal_window(
    kind: KaalKind,
    weekday: Weekday,
    sunrise_hour: f64,
    sunset_hour: f64,
    now_hour: f64,
) -> TimeWindow {
    let part = (sunset_hour - sunrise_hour) / DAY_PARTS as f64;
    let index = kind.part_index(weekday) as f64;
    let start = sunrise_hour + index * part;
    TimeWindow::from_hours(start, start + part, now_hour)
}

/// Proportional Rahu Kaal from sunrise and sunset hours.
pub fn rahu_kaal_window(
    weekday: Weekday,
    sunrise_hour: f64,
    sunset_hour: f64,
    now_hour: f64,
) -> TimeWindow {
    kaal_window(KaalKind::RahuKaal, weekday, sunrise_hour, sunset_hour, now_hour)
}

/// Location-aware window for the local date and time `now`.
pub fn kaal_for_location(
    kind: KaalKind,
    now: NaiveDateTime,
    location: &SolarLocation,
) -> TimeWindow {
    let times = solar_times(now.date(), location);
    kaal_window(
        kind,
        now.weekday(),
        times.sunrise_hour,
        times.sunset_hour,
        now_hour(&now),
    )
}

/// Location-aware Rahu Kaal for the local date and time `now`.
pub fn rahu_kaal_for_location(now: NaiveDateTime, location: &SolarLocation) -> TimeWindow {
    kaal_for_location(KaalKind::RahuKaal, now, location)
}

/// Abhijit Muhurta: 24 minutes either side of local solar noon.
pub fn abhijit_muhurta(now: NaiveDateTime, location: &SolarLocation) -> TimeWindow {
    let noon = solar_times(now.date(), location).solar_noon_hour;
    TimeWindow::from_hours(
        noon - ABHIJIT_HALF_WIDTH_HOURS,
        noon + ABHIJIT_HALF_WIDTH_HOURS,
        now_hour(&now),
    )
}
