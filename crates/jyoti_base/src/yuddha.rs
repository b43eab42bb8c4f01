//! Graha Yuddha (planetary war) among the five tara grahas.
//!
//! Two of Mars, Mercury, Jupiter, Venus and Saturn within 1 deg of each
//! other are at war. The winner is the one further along its sign (larger
//! degree-in-sign). Classical texts decide by ecliptic latitude, which is
//! not part of [`PlanetaryPosition`]; this approximation is kept as is.

use jyoti_math::{angular_distance, round_to};

use crate::engine::ChartEngine;
use crate::graha::{Graha, TARA_GRAHAS};
use crate::position::PlanetaryPosition;

/// Maximum separation in degrees for a planetary war.
pub const WAR_ORB_DEG: f64 = 1.0;

/// One planetary war between two grahas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanetaryWarEntry {
    pub planet1: Graha,
    pub planet2: Graha,
    /// Circular separation in degrees, rounded to 0.01.
    pub distance: f64,
    pub winner: Graha,
    pub effect: String,
}

/// War between two positioned grahas, or `None` when they are more than 1 deg apart.
///
/// Equal degree-in-sign goes to `planet1`.
pub fn planetary_war(
    planet1: Graha,
    pos1: &PlanetaryPosition,
    planet2: Graha,
    pos2: &PlanetaryPosition,
) -> Option<PlanetaryWarEntry> {
    let distance = angular_distance(pos1.absolute_longitude(), pos2.absolute_longitude());
    if distance > WAR_ORB_DEG {
        return None;
    }
    let (winner, loser) = if pos2.degree_in_sign > pos1.degree_in_sign {
        (planet2, planet1)
    } else {
        (planet1, planet2)
    };
    Some(PlanetaryWarEntry {
        planet1,
        planet2,
        distance: round_to(distance, 2),
        winner,
        effect: format!(
            "{} defeats {}: {} gains strength while {}'s significations are weakened",
            winner.english_name(),
            loser.english_name(),
            winner.english_name(),
            loser.english_name(),
        ),
    })
}

/// All planetary wars among the tara grahas the engine has positions for.
///
/// Every unordered pair is checked once, in tara graha order.
pub fn planetary_wars<E: ChartEngine + ?Sized>(engine: &E) -> Vec<PlanetaryWarEntry> {
    let present: Vec<(Graha, PlanetaryPosition)> = TARA_GRAHAS
        .into_iter()
        .filter_map(|g| engine.position(g.into()).map(|p| (g, p)))
        .collect();

    let mut wars = Vec::new();
    for (i, (g1, p1)) in present.iter().enumerate() {
        for (g2, p2) in &present[i + 1..] {
            if let Some(war) = planetary_war(*g1, p1, *g2, p2) {
                wars.push(war);
            }
        }
    }
    wars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StaticChart;

    fn at(sign_index: u8, degree_in_sign: f64) -> PlanetaryPosition {
        PlanetaryPosition {
            sign_index,
            degree_in_sign,
            retrograde: false,
            nakshatra: String::new(),
            nakshatra_pada: 1,
        }
    }

    #[test]
    fn mercury_beats_mars_by_degree() {
        let war = planetary_war(Graha::Mangal, &at(2, 10.5), Graha::Buddh, &at(2, 10.9)).unwrap();
        assert_eq!(war.distance, 0.4);
        assert_eq!(war.winner, Graha::Buddh);
        assert!(war.effect.starts_with("Mercury defeats Mars"));
    }

    #[test]
    fn no_war_beyond_one_degree() {
        assert!(planetary_war(Graha::Guru, &at(0, 1.0), Graha::Shani, &at(0, 2.01)).is_none());
    }

    #[test]
    fn war_exactly_at_orb() {
        assert!(planetary_war(Graha::Guru, &at(0, 1.0), Graha::Shani, &at(0, 2.0)).is_some());
    }

    #[test]
    fn war_across_sign_boundary_uses_degree_in_sign() {
        // Venus at 29.8 Mesha, Saturn at 0.3 Vrishabha: 0.5 apart, Venus wins
        let war = planetary_war(Graha::Shukra, &at(0, 29.8), Graha::Shani, &at(1, 0.3)).unwrap();
        assert_eq!(war.distance, 0.5);
        assert_eq!(war.winner, Graha::Shukra);
    }

    #[test]
    fn tie_goes_to_first() {
        let war = planetary_war(Graha::Mangal, &at(3, 5.0), Graha::Guru, &at(3, 5.0)).unwrap();
        assert_eq!(war.winner, Graha::Mangal);
        assert_eq!(war.distance, 0.0);
    }

    #[test]
    fn wars_ignore_luminaries() {
        let chart = StaticChart::from_longitudes([
            (Graha::Surya, 70.6),
            (Graha::Chandra, 70.7),
            (Graha::Mangal, 70.5),
            (Graha::Buddh, 70.9),
            (Graha::Guru, 200.0),
        ]);
        let wars = planetary_wars(&chart);
        assert_eq!(wars.len(), 1);
        assert_eq!((wars[0].planet1, wars[0].planet2), (Graha::Mangal, Graha::Buddh));
    }

    #[test]
    fn three_way_cluster_yields_three_pairs() {
        let chart = StaticChart::from_longitudes([
            (Graha::Mangal, 10.0),
            (Graha::Guru, 10.3),
            (Graha::Shani, 10.6),
        ]);
        assert_eq!(planetary_wars(&chart).len(), 3);
    }
}
