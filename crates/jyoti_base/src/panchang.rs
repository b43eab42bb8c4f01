//! Panchang derivation: tithi, nakshatra, yoga and karana.
//!
//! Two entry paths produce a [`PanchangSnapshot`]:
//! - from sidereal Sun/Moon longitudes at a reference instant, and
//! - from labels already computed upstream, where only the numeric tithi
//!   index has to be recovered from the paksha-qualified tithi label.
//!
//! Tithi = Moon-Sun elongation / 12 deg (30 per month).
//! Karana = elongation / 6 deg (60 per month).
//! Yoga = (Sun + Moon) / 13 deg 20' (27 in the circle).

use std::str::FromStr;

use chrono::NaiveDate;
use jyoti_math::normalize_360;

use crate::engine::ChartEngine;
use crate::error::VedicError;
use crate::graha::{ChartPoint, Graha};
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::panchang_types::{Karana, Paksha, PanchangSnapshot, TITHI_NAMES, Tithi, Yoga};

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Span of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Moon-Sun elongation in [0, 360).
pub fn elongation(sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg - sun_lon_deg)
}

/// Tithi from Moon-Sun elongation.
pub fn tithi_from_elongation(elongation_deg: f64) -> Tithi {
    let idx = ((normalize_360(elongation_deg) / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    Tithi::from_index(idx)
}

/// Karana from Moon-Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> Karana {
    let slot = ((normalize_360(elongation_deg) / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    Karana::from_sequence(slot)
}

/// Yoga from the sum of sidereal Sun and Moon longitudes.
pub fn yoga_from_sum(sun_lon_deg: f64, moon_lon_deg: f64) -> Yoga {
    let sum = normalize_360(sun_lon_deg + moon_lon_deg);
    Yoga::from_index(((sum / NAKSHATRA_SPAN_27).floor() as u8).min(26))
}

/// Split a paksha-qualified label into paksha and remainder.
///
/// The paksha word may stand alone or be followed by whitespace or `-`.
/// Labels without a recognized paksha word are read as Shukla.
fn split_paksha(label: &str) -> (Paksha, &str) {
    let is_sep = |c: char| c == '-' || c.is_whitespace();
    let trimmed = label.trim();
    for (word, paksha) in [("shukla", Paksha::Shukla), ("krishna", Paksha::Krishna)] {
        let Some(head) = trimmed.get(..word.len()) else {
            continue;
        };
        let rest = &trimmed[word.len()..];
        if head.eq_ignore_ascii_case(word) && (rest.is_empty() || rest.starts_with(is_sep)) {
            return (paksha, rest.trim_start_matches(is_sep));
        }
    }
    (Paksha::Shukla, trimmed)
}

/// Position (0..=14) of a bare tithi name. Amavasya shares the 15th slot with Purnima.
fn tithi_position(name: &str) -> Option<u8> {
    if name.eq_ignore_ascii_case("Amavasya") {
        return Some(14);
    }
    TITHI_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .map(|i| i as u8)
}

/// Lenient tithi label parsing.
///
/// "Shukla Panchami" is Shukla index 4; "Krishna Ashtami" is 7 + 15 = 22.
/// An unrecognized tithi name falls back to the first tithi of its paksha.
pub fn tithi_from_label(label: &str) -> Tithi {
    let (paksha, name) = split_paksha(label);
    let position = tithi_position(name).unwrap_or_else(|| {
        tracing::debug!(
            label,
            paksha = paksha.name(),
            "unrecognized tithi name, using first of paksha"
        );
        0
    });
    Tithi::from_paksha(paksha, position)
}

/// Numeric tithi index (0..=29) for a paksha-qualified label.
pub fn tithi_index_from_label(label: &str) -> u8 {
    tithi_from_label(label).index()
}

impl FromStr for Tithi {
    type Err = VedicError;

    /// Strict form of [`tithi_from_label`]: unknown names are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (paksha, name) = split_paksha(s);
        tithi_position(name)
            .map(|p| Tithi::from_paksha(paksha, p))
            .ok_or_else(|| VedicError::UnknownName(s.to_string()))
    }
}

/// Derive the full panchang from sidereal Sun and Moon longitudes.
pub fn derive_panchang(date: NaiveDate, sun_lon_deg: f64, moon_lon_deg: f64) -> PanchangSnapshot {
    let elong = elongation(sun_lon_deg, moon_lon_deg);
    let tithi = tithi_from_elongation(elong);
    PanchangSnapshot {
        date,
        tithi: tithi.to_string(),
        tithi_index: tithi.index(),
        nakshatra: nakshatra_from_longitude(moon_lon_deg).nakshatra.name().to_string(),
        yoga: yoga_from_sum(sun_lon_deg, moon_lon_deg).name().to_string(),
        karana: karana_from_elongation(elong).name().to_string(),
    }
}

/// Assemble a snapshot from labels computed upstream, recovering the tithi index.
pub fn panchang_from_labels(
    date: NaiveDate,
    tithi: &str,
    nakshatra: &str,
    yoga: &str,
    karana: &str,
) -> PanchangSnapshot {
    PanchangSnapshot {
        date,
        tithi: tithi.to_string(),
        tithi_index: tithi_index_from_label(tithi),
        nakshatra: nakshatra.to_string(),
        yoga: yoga.to_string(),
        karana: karana.to_string(),
    }
}

/// Derive the panchang from the Sun and Moon reported by a chart engine.
pub fn panchang_from_engine<E: ChartEngine + ?Sized>(
    engine: &E,
    date: NaiveDate,
) -> Result<PanchangSnapshot, VedicError> {
    let sun_point = ChartPoint::Graha(Graha::Surya);
    let moon_point = ChartPoint::Graha(Graha::Chandra);
    let sun = engine
        .position(sun_point)
        .ok_or(VedicError::MissingBody(sun_point))?;
    let moon = engine
        .position(moon_point)
        .ok_or(VedicError::MissingBody(moon_point))?;
    Ok(derive_panchang(
        date,
        sun.absolute_longitude(),
        moon.absolute_longitude(),
    ))
}
