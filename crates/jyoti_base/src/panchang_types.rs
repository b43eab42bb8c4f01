//! Vocabulary of the daily panchang: paksha, tithi, yoga and karana.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paksha {
    /// Waxing fortnight, tithi indices 0-14.
    Shukla,
    /// Waning fortnight, tithi indices 15-29.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within one paksha, in order. The 15th is Purnima in Shukla
/// paksha and Amavasya in Krishna paksha.
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// One of the 30 tithis of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tithi {
    /// 0-based tithi index (0..29).
    index: u8,
}

impl Tithi {
    /// Tithi for a 0-based month index, taken modulo 30.
    pub const fn from_index(index: u8) -> Self {
        Self { index: index % 30 }
    }

    /// Tithi from paksha and 0-based position within it (taken modulo 15).
    pub const fn from_paksha(paksha: Paksha, index_in_paksha: u8) -> Self {
        let i = index_in_paksha % 15;
        match paksha {
            Paksha::Shukla => Self { index: i },
            Paksha::Krishna => Self { index: i + 15 },
        }
    }

    /// 0-based index in the month (0..29).
    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn paksha(self) -> Paksha {
        if self.index < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1-based number within the paksha (1..15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index % 15 + 1
    }

    /// Bare tithi name without paksha, e.g. "Panchami" or "Amavasya".
    pub const fn name(self) -> &'static str {
        if self.index == 29 {
            "Amavasya"
        } else {
            TITHI_NAMES[(self.index % 15) as usize]
        }
    }
}

impl Display for Tithi {
    /// Paksha-qualified label, e.g. "Shukla Panchami".
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.paksha().name(), self.name())
    }
}

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// Yoga for a 0-based index, taken modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_YOGAS[(index % 27) as usize]
    }
}

/// The 11 karanas: 7 movable (chara) and 4 fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The 7 movable karanas, cycled 8 times through a month.
pub const CHARA_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana for one of the 60 half-tithi slots of a month (taken modulo 60).
    ///
    /// Slot 0 is Kimstughna, slots 1..=56 cycle through the movable karanas,
    /// and slots 57, 58, 59 are Shakuni, Chatushpada and Naga.
    pub const fn from_sequence(slot: u8) -> Self {
        match slot % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            s => CHARA_KARANAS[((s - 1) % 7) as usize],
        }
    }
}

/// Panchang elements for one reference instant (conventionally sunrise).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PanchangSnapshot {
    pub date: NaiveDate,
    /// Paksha-qualified tithi label, e.g. "Krishna Ashtami".
    pub tithi: String,
    /// 0-14 Shukla, 15-29 Krishna.
    pub tithi_index: u8,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_labels() {
        assert_eq!(Tithi::from_index(4).to_string(), "Shukla Panchami");
        assert_eq!(Tithi::from_index(14).to_string(), "Shukla Purnima");
        assert_eq!(Tithi::from_index(22).to_string(), "Krishna Ashtami");
        assert_eq!(Tithi::from_index(29).to_string(), "Krishna Amavasya");
    }

    #[test]
    fn tithi_from_paksha() {
        assert_eq!(Tithi::from_paksha(Paksha::Krishna, 7).index(), 22);
        assert_eq!(Tithi::from_paksha(Paksha::Shukla, 16).index(), 1);
        assert_eq!(Tithi::from_index(31).index(), 1);
    }

    #[test]
    fn tithi_number_in_paksha() {
        assert_eq!(Tithi::from_index(0).number_in_paksha(), 1);
        assert_eq!(Tithi::from_index(15).number_in_paksha(), 1);
        assert_eq!(Tithi::from_index(29).number_in_paksha(), 15);
    }

    #[test]
    fn karana_sequence_edges() {
        assert_eq!(Karana::from_sequence(0), Karana::Kimstughna);
        assert_eq!(Karana::from_sequence(1), Karana::Bava);
        assert_eq!(Karana::from_sequence(7), Karana::Vishti);
        assert_eq!(Karana::from_sequence(8), Karana::Bava);
        assert_eq!(Karana::from_sequence(56), Karana::Vishti);
        assert_eq!(Karana::from_sequence(57), Karana::Shakuni);
        assert_eq!(Karana::from_sequence(59), Karana::Naga);
    }

    #[test]
    fn yoga_wraps() {
        assert_eq!(Yoga::from_index(0), Yoga::Vishkambha);
        assert_eq!(Yoga::from_index(26), Yoga::Vaidhriti);
        assert_eq!(Yoga::from_index(27), Yoga::Vishkambha);
    }
}
