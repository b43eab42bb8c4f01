//! Ashtakoot Guna Milan: eight-factor compatibility from two birth nakshatras.
//!
//! Each koota is scored from the 0-based nakshatra indices with integer and
//! modular arithmetic. Every formula uses absolute differences, sums or
//! equality tests, so each score is symmetric in its two arguments.
//!
//! | Koota        | Max | Rule                                                  |
//! |--------------|-----|-------------------------------------------------------|
//! | Varna        | 1   | `d % 4 == 0` -> 1, `d % 2 == 0` -> 0.5, else 0        |
//! | Vashya       | 2   | `2 - d % 3`                                           |
//! | Tara         | 3   | `d % 9`: <= 3 -> 3, <= 6 -> 1.5, else 0               |
//! | Yoni         | 4   | `(n1 + n2) % 5`: <= 2 -> 4, 3 -> 2, else 1            |
//! | Graha Maitri | 5   | `d <= 9` -> 5, `d <= 18` -> 3, else 0                 |
//! | Gana         | 6   | `n % 3` equal -> 6, one apart -> 3, else 0            |
//! | Bhakoot      | 7   | signs `n * 12 / 27` six apart -> 0, else 7            |
//! | Nadi         | 8   | `n % 3` differ -> 8, else 0                           |
//!
//! where `d = |n1 - n2|`.

use crate::engine::{BirthDetails, ChartEngine};
use crate::error::VedicError;

/// Maximum total score.
pub const MAX_GUNA_TOTAL: f64 = 36.0;

/// The eight kootas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points, 1 through 8 in koota order.
    pub const fn max_points(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::GrahaMaitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Varna => "Spiritual compatibility and ego levels",
            Self::Vashya => "Mutual attraction and influence over each other",
            Self::Tara => "Birth star compatibility and shared destiny",
            Self::Yoni => "Physical and instinctive compatibility",
            Self::GrahaMaitri => "Mental compatibility and friendship of sign lords",
            Self::Gana => "Temperament and behavioural match",
            Self::Bhakoot => "Emotional bond and family welfare",
            Self::Nadi => "Health and hereditary compatibility",
        }
    }

    /// Points for this koota, clamped to `[0, max_points]`.
    ///
    /// Indices are reduced modulo 27.
    pub fn score(self, n1: u8, n2: u8) -> f64 {
        let (a, b) = (n1 % 27, n2 % 27);
        let d = a.abs_diff(b);
        let raw = match self {
            Self::Varna => {
                if d % 4 == 0 {
                    1.0
                } else if d % 2 == 0 {
                    0.5
                } else {
                    0.0
                }
            }
            Self::Vashya => 2.0 - (d % 3) as f64,
            Self::Tara => match d % 9 {
                0..=3 => 3.0,
                4..=6 => 1.5,
                _ => 0.0,
            },
            Self::Yoni => match (a + b) % 5 {
                0..=2 => 4.0,
                3 => 2.0,
                _ => 1.0,
            },
            Self::GrahaMaitri => match d {
                0..=9 => 5.0,
                10..=18 => 3.0,
                _ => 0.0,
            },
            Self::Gana => match (a % 3).abs_diff(b % 3) {
                0 => 6.0,
                1 => 3.0,
                _ => 0.0,
            },
            Self::Bhakoot => {
                let r1 = a as u16 * 12 / 27;
                let r2 = b as u16 * 12 / 27;
                if r1.abs_diff(r2) == 6 { 0.0 } else { 7.0 }
            }
            Self::Nadi => {
                if a % 3 != b % 3 {
                    8.0
                } else {
                    0.0
                }
            }
        };
        raw.clamp(0.0, self.max_points())
    }
}

/// Score of one koota.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GunaScore {
    pub name: String,
    pub max: f64,
    pub obtained: f64,
    pub description: String,
}

/// Overall compatibility band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compatibility {
    Excellent,
    Good,
    Average,
    Challenging,
}

impl Compatibility {
    /// Band for a total score; lower bounds are inclusive.
    pub fn from_total(total: f64) -> Self {
        if total >= 28.0 {
            Self::Excellent
        } else if total >= 21.0 {
            Self::Good
        } else if total >= 18.0 {
            Self::Average
        } else {
            Self::Challenging
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Average => "Average Match",
            Self::Challenging => "Challenging Match",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => {
                "A highly harmonious pairing with strong agreement across nearly every koota."
            }
            Self::Good => "A compatible pairing; minor differences are easily worked through.",
            Self::Average => {
                "An acceptable pairing that benefits from patience and mutual understanding."
            }
            Self::Challenging => {
                "Significant differences are indicated; a detailed chart comparison is advised."
            }
        }
    }
}

/// Title and description shown for a total score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityVerdict {
    pub title: String,
    pub description: String,
}

impl From<Compatibility> for CompatibilityVerdict {
    fn from(c: Compatibility) -> Self {
        Self {
            title: c.title().to_string(),
            description: c.description().to_string(),
        }
    }
}

/// Full Guna Milan result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GunaMilan {
    pub scores: Vec<GunaScore>,
    /// Sum of obtained points, in [0, 36].
    pub total: f64,
    /// `round(total / 36 * 100)`, in [0, 100].
    pub percentage: u8,
    pub compatibility: Compatibility,
    pub verdict: CompatibilityVerdict,
}

/// Score two birth nakshatra indices (0..=26; larger values are reduced modulo 27).
pub fn guna_milan(n1: u8, n2: u8) -> GunaMilan {
    let scores: Vec<GunaScore> = ALL_KOOTAS
        .into_iter()
        .map(|k| GunaScore {
            name: k.name().to_string(),
            max: k.max_points(),
            obtained: k.score(n1, n2),
            description: k.description().to_string(),
        })
        .collect();
    let total: f64 = scores.iter().map(|s| s.obtained).sum();
    let percentage = (total / MAX_GUNA_TOTAL * 100.0).round().clamp(0.0, 100.0) as u8;
    let compatibility = Compatibility::from_total(total);
    GunaMilan {
        scores,
        total,
        percentage,
        compatibility,
        verdict: compatibility.into(),
    }
}

/// Resolve both birth nakshatras through the chart engine and score them.
pub fn guna_milan_for_births<E: ChartEngine + ?Sized>(
    engine: &E,
    first: &BirthDetails,
    second: &BirthDetails,
) -> Result<GunaMilan, VedicError> {
    let n1 = engine.nakshatra_index(first)?;
    let n2 = engine.nakshatra_index(second)?;
    Ok(guna_milan(n1, n2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obtained(m: &GunaMilan) -> Vec<f64> {
        m.scores.iter().map(|s| s.obtained).collect()
    }

    #[test]
    fn same_nakshatra_scores_28() {
        let m = guna_milan(0, 0);
        assert_eq!(obtained(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 0.0]);
        assert_eq!(m.total, 28.0);
        assert_eq!(m.percentage, 78);
        assert_eq!(m.verdict.title, "Excellent Match");
    }

    #[test]
    fn maxima_are_one_through_eight() {
        let m = guna_milan(3, 17);
        let maxes: Vec<f64> = m.scores.iter().map(|s| s.max).collect();
        assert_eq!(maxes, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn varna_half_point() {
        assert_eq!(Koota::Varna.score(0, 2), 0.5);
        assert_eq!(Koota::Varna.score(0, 4), 1.0);
        assert_eq!(Koota::Varna.score(0, 3), 0.0);
    }

    #[test]
    fn vashya_steps() {
        assert_eq!(Koota::Vashya.score(0, 1), 1.0);
        assert_eq!(Koota::Vashya.score(0, 2), 0.0);
        assert_eq!(Koota::Vashya.score(0, 3), 2.0);
    }

    #[test]
    fn tara_bands() {
        assert_eq!(Koota::Tara.score(0, 3), 3.0);
        assert_eq!(Koota::Tara.score(0, 5), 1.5);
        assert_eq!(Koota::Tara.score(0, 8), 0.0);
        assert_eq!(Koota::Tara.score(0, 9), 3.0);
    }

    #[test]
    fn yoni_bands() {
        assert_eq!(Koota::Yoni.score(1, 1), 4.0);
        assert_eq!(Koota::Yoni.score(1, 2), 2.0);
        assert_eq!(Koota::Yoni.score(2, 2), 1.0);
    }

    #[test]
    fn graha_maitri_bands() {
        assert_eq!(Koota::GrahaMaitri.score(0, 9), 5.0);
        assert_eq!(Koota::GrahaMaitri.score(0, 18), 3.0);
        assert_eq!(Koota::GrahaMaitri.score(0, 19), 0.0);
    }

    #[test]
    fn gana_and_nadi_are_complementary() {
        // Equal n % 3: Gana full, Nadi zero
        assert_eq!(Koota::Gana.score(1, 4), 6.0);
        assert_eq!(Koota::Nadi.score(1, 4), 0.0);
        // Two apart: Gana zero, Nadi full
        assert_eq!(Koota::Gana.score(0, 2), 0.0);
        assert_eq!(Koota::Nadi.score(0, 2), 8.0);
        assert_eq!(Koota::Gana.score(0, 1), 3.0);
    }

    #[test]
    fn bhakoot_six_signs_apart() {
        // 0 -> sign 0, 14 -> sign 6
        assert_eq!(Koota::Bhakoot.score(0, 14), 0.0);
        assert_eq!(Koota::Bhakoot.score(0, 13), 7.0);
        assert_eq!(Koota::Bhakoot.score(26, 12), 0.0);
        assert_eq!(Koota::Bhakoot.score(26, 26), 7.0);
    }

    #[test]
    fn indices_wrap_modulo_27() {
        assert_eq!(guna_milan(27, 28), guna_milan(0, 1));
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Compatibility::from_total(28.0), Compatibility::Excellent);
        assert_eq!(Compatibility::from_total(27.5), Compatibility::Good);
        assert_eq!(Compatibility::from_total(21.0), Compatibility::Good);
        assert_eq!(Compatibility::from_total(18.0), Compatibility::Average);
        assert_eq!(Compatibility::from_total(17.5), Compatibility::Challenging);
    }

    #[test]
    fn symmetric_over_all_pairs() {
        for n1 in 0..27u8 {
            for n2 in 0..27u8 {
                for k in ALL_KOOTAS {
                    assert_eq!(k.score(n1, n2), k.score(n2, n1), "{} {n1} {n2}", k.name());
                }
            }
        }
    }
}
