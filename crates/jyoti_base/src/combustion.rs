//! Combustion (Asta/Moudhya) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun, with thresholds
//! varying by planet and retrograde status per BPHS. The boundary is
//! inclusive: a graha exactly at its threshold distance is combust.

use jyoti_math::{angular_distance, round_to};

use crate::engine::ChartEngine;
use crate::graha::{ChartPoint, Graha};

/// Grahas checked for combustion, in report order.
pub const COMBUSTION_GRAHAS: [Graha; 6] = [
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Combustion status of one graha.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombustionEntry {
    pub planet: Graha,
    pub is_combust: bool,
    /// Circular distance from the Sun in degrees, rounded to 0.1.
    pub distance_from_sun: f64,
    /// Threshold applied (retrograde-adjusted where relevant).
    pub threshold: f64,
    pub effect: String,
}

/// BPHS combustion threshold (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
/// For Mercury and Venus, retrograde thresholds are tighter.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => {
            if is_retrograde {
                Some(12.0)
            } else {
                Some(14.0)
            }
        }
        Graha::Guru => Some(11.0),
        Graha::Shukra => {
            if is_retrograde {
                Some(8.0)
            } else {
                Some(10.0)
            }
        }
        Graha::Shani => Some(15.0),
    }
}

/// Check if a single graha is combust.
///
/// Returns `false` for Sun, Rahu, and Ketu.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64, is_retrograde: bool) -> bool {
    match combustion_threshold(graha, is_retrograde) {
        Some(threshold) => angular_distance(graha_lon, sun_lon) <= threshold,
        None => false,
    }
}

fn combust_effect(graha: Graha) -> &'static str {
    match graha {
        Graha::Chandra => "Emotional steadiness and public standing are weakened",
        Graha::Mangal => "Courage and drive are suppressed and energy turns inward",
        Graha::Buddh => "Communication and analytical judgment are clouded",
        Graha::Guru => "Wisdom, counsel and fortune lose part of their strength",
        Graha::Shukra => "Relationships and comforts come under strain",
        Graha::Shani => "Discipline is tested and results arrive with delay",
        Graha::Surya | Graha::Rahu | Graha::Ketu => "",
    }
}

/// Combustion entry for one graha, or `None` if combustion does not apply to it.
pub fn combustion_entry(
    graha: Graha,
    graha_lon: f64,
    sun_lon: f64,
    is_retrograde: bool,
) -> Option<CombustionEntry> {
    let threshold = combustion_threshold(graha, is_retrograde)?;
    let distance = angular_distance(graha_lon, sun_lon);
    let is_combust = distance <= threshold;
    let effect = if is_combust {
        combust_effect(graha).to_string()
    } else {
        format!("{} is clear of the Sun and gives its results fully", graha.english_name())
    };
    Some(CombustionEntry {
        planet: graha,
        is_combust,
        distance_from_sun: round_to(distance, 1),
        threshold,
        effect,
    })
}

/// Combustion report for every tracked graha the engine has a position for.
///
/// Grahas without a position are omitted. Without the Sun the report is empty.
pub fn combustion_report<E: ChartEngine + ?Sized>(engine: &E) -> Vec<CombustionEntry> {
    let Some(sun) = engine.position(ChartPoint::Graha(Graha::Surya)) else {
        tracing::debug!("no Sun position, combustion report empty");
        return Vec::new();
    };
    let sun_lon = sun.absolute_longitude();
    COMBUSTION_GRAHAS
        .into_iter()
        .filter_map(|graha| {
            let pos = engine.position(graha.into())?;
            combustion_entry(graha, pos.absolute_longitude(), sun_lon, pos.retrograde)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StaticChart;
    use crate::position::PlanetaryPosition;

    #[test]
    fn threshold_not_applicable() {
        for g in [Graha::Surya, Graha::Rahu, Graha::Ketu] {
            assert!(combustion_threshold(g, false).is_none());
        }
    }

    #[test]
    fn threshold_mercury_direct_vs_retrograde() {
        assert_eq!(combustion_threshold(Graha::Buddh, false), Some(14.0));
        assert_eq!(combustion_threshold(Graha::Buddh, true), Some(12.0));
    }

    #[test]
    fn threshold_venus_direct_vs_retrograde() {
        assert_eq!(combustion_threshold(Graha::Shukra, false), Some(10.0));
        assert_eq!(combustion_threshold(Graha::Shukra, true), Some(8.0));
    }

    #[test]
    fn threshold_others_ignore_retrograde() {
        assert_eq!(combustion_threshold(Graha::Chandra, true), Some(12.0));
        assert_eq!(combustion_threshold(Graha::Mangal, true), Some(17.0));
        assert_eq!(combustion_threshold(Graha::Guru, true), Some(11.0));
        assert_eq!(combustion_threshold(Graha::Shani, true), Some(15.0));
    }

    #[test]
    fn moon_within_threshold() {
        assert!(is_combust(Graha::Chandra, 105.0, 100.0, false));
    }

    #[test]
    fn moon_far_from_sun() {
        assert!(!is_combust(Graha::Chandra, 200.0, 100.0, false));
    }

    #[test]
    fn boundary_exactly_at_threshold_is_combust() {
        assert!(is_combust(Graha::Mangal, 117.0, 100.0, false));
        assert!(!is_combust(Graha::Mangal, 117.01, 100.0, false));
    }

    #[test]
    fn wraparound() {
        // Sun at 355, Mars at 5 -> distance 10
        assert!(is_combust(Graha::Mangal, 5.0, 355.0, false));
    }

    #[test]
    fn mercury_retrograde_tighter_threshold() {
        assert!(is_combust(Graha::Buddh, 113.0, 100.0, false));
        assert!(!is_combust(Graha::Buddh, 113.0, 100.0, true));
    }

    #[test]
    fn entry_rounds_distance() {
        let e = combustion_entry(Graha::Guru, 104.96, 100.0, false).unwrap();
        assert_eq!(e.distance_from_sun, 5.0);
        assert_eq!(e.threshold, 11.0);
        assert!(e.is_combust);
    }

    #[test]
    fn entry_uses_retrograde_threshold() {
        let e = combustion_entry(Graha::Shukra, 109.0, 100.0, true).unwrap();
        assert_eq!(e.threshold, 8.0);
        assert!(!e.is_combust);
        assert!(e.effect.contains("Venus"));
    }

    #[test]
    fn report_needs_sun() {
        let chart = StaticChart::from_longitudes([(Graha::Chandra, 105.0)]);
        assert!(combustion_report(&chart).is_empty());
    }

    #[test]
    fn report_one_entry_per_present_graha() {
        let chart = StaticChart::new()
            .with(Graha::Surya, PlanetaryPosition::from_longitude(100.0, false))
            .with(Graha::Chandra, PlanetaryPosition::from_longitude(105.0, false))
            .with(Graha::Buddh, PlanetaryPosition::from_longitude(113.0, true))
            .with(Graha::Rahu, PlanetaryPosition::from_longitude(100.0, true));
        let report = combustion_report(&chart);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].planet, Graha::Chandra);
        assert!(report[0].is_combust);
        assert_eq!(report[1].planet, Graha::Buddh);
        assert!(!report[1].is_combust);
    }
}
