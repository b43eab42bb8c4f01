//! Auspiciousness of panchang elements.
//!
//! Tithi labels are matched by case-insensitive substring so that both
//! "Krishna Ashtami" and "krishna ashtami (till 14:02)" classify. Nakshatra,
//! yoga and karana names are matched exactly against static lists. Anything
//! in neither list is neutral.

use std::fmt::{Display, Formatter};

use crate::panchang_types::PanchangSnapshot;

/// Classification of a panchang element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Inauspicious => "Inauspicious",
            Self::Neutral => "Neutral",
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tithi name fragments that make a label inauspicious.
pub const INAUSPICIOUS_TITHI_FRAGMENTS: [&str; 2] = ["amavasya", "chaturdashi"];

/// Tithi name fragments that make a label auspicious.
pub const AUSPICIOUS_TITHI_FRAGMENTS: [&str; 8] = [
    "purnima",
    "ekadashi",
    "dwitiya",
    "tritiya",
    "panchami",
    "saptami",
    "dashami",
    "trayodashi",
];

pub const AUSPICIOUS_NAKSHATRAS: [&str; 15] = [
    "Ashwini",
    "Rohini",
    "Mrigashira",
    "Punarvasu",
    "Pushya",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Anuradha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Uttara Bhadrapada",
    "Revati",
];

pub const INAUSPICIOUS_NAKSHATRAS: [&str; 9] = [
    "Bharani",
    "Krittika",
    "Ardra",
    "Ashlesha",
    "Magha",
    "Jyeshtha",
    "Mula",
    "Purva Phalguni",
    "Purva Bhadrapada",
];

pub const AUSPICIOUS_YOGAS: [&str; 17] = [
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Sukarma",
    "Dhriti",
    "Vriddhi",
    "Dhruva",
    "Harshana",
    "Siddhi",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
];

pub const INAUSPICIOUS_YOGAS: [&str; 9] = [
    "Vishkambha",
    "Atiganda",
    "Shula",
    "Ganda",
    "Vyaghata",
    "Vajra",
    "Vyatipata",
    "Parigha",
    "Vaidhriti",
];

pub const AUSPICIOUS_KARANAS: [&str; 6] =
    ["Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija"];

pub const INAUSPICIOUS_KARANAS: [&str; 4] = ["Vishti", "Shakuni", "Chatushpada", "Naga"];

fn by_membership(name: &str, auspicious: &[&str], inauspicious: &[&str]) -> Quality {
    if auspicious.contains(&name) {
        Quality::Auspicious
    } else if inauspicious.contains(&name) {
        Quality::Inauspicious
    } else {
        Quality::Neutral
    }
}

/// Classify a tithi label.
///
/// Amavasya, Chaturdashi and Krishna Ashtami are inauspicious and take
/// precedence; the listed auspicious tithis follow; everything else is neutral.
pub fn classify_tithi(label: &str) -> Quality {
    let lower = label.to_lowercase();
    let krishna_ashtami = lower.contains("krishna") && lower.contains("ashtami");
    if krishna_ashtami || INAUSPICIOUS_TITHI_FRAGMENTS.iter().any(|f| lower.contains(f)) {
        Quality::Inauspicious
    } else if AUSPICIOUS_TITHI_FRAGMENTS.iter().any(|f| lower.contains(f)) {
        Quality::Auspicious
    } else {
        Quality::Neutral
    }
}

pub fn classify_nakshatra(name: &str) -> Quality {
    by_membership(name, &AUSPICIOUS_NAKSHATRAS, &INAUSPICIOUS_NAKSHATRAS)
}

pub fn classify_yoga(name: &str) -> Quality {
    by_membership(name, &AUSPICIOUS_YOGAS, &INAUSPICIOUS_YOGAS)
}

pub fn classify_karana(name: &str) -> Quality {
    by_membership(name, &AUSPICIOUS_KARANAS, &INAUSPICIOUS_KARANAS)
}

/// Quality of each element of a panchang snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangQuality {
    pub tithi: Quality,
    pub nakshatra: Quality,
    pub yoga: Quality,
    pub karana: Quality,
}

/// Classify every element of a snapshot.
pub fn classify_panchang(snapshot: &PanchangSnapshot) -> PanchangQuality {
    PanchangQuality {
        tithi: classify_tithi(&snapshot.tithi),
        nakshatra: classify_nakshatra(&snapshot.nakshatra),
        yoga: classify_yoga(&snapshot.yoga),
        karana: classify_karana(&snapshot.karana),
    }
}
