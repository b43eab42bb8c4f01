//! Derived Vedic calculations built on chart-engine outputs.
//!
//! This crate provides:
//! - Approximate sunrise/sunset and solar noon with time-zone meridian shift
//! - Rahu Kaal (fixed table and proportional), Yamaganda, Gulika, Abhijit
//! - Panchang derivation: tithi, nakshatra, yoga, karana
//! - Longitude table rows in degrees-minutes-seconds
//! - Combustion and planetary war among grahas
//! - Auspiciousness classification of panchang elements
//! - Ashtakoot Guna Milan compatibility
//!
//! Raw planetary positions come from an injected [`ChartEngine`]. Every
//! function is pure: the current time is always an explicit argument.

pub mod auspicious;
pub mod combustion;
pub mod engine;
pub mod error;
pub mod graha;
pub mod guna;
pub mod kaal;
pub mod longitude;
pub mod nakshatra;
pub mod panchang;
pub mod panchang_types;
pub mod position;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod yuddha;

pub use auspicious::{
    PanchangQuality, Quality, classify_karana, classify_nakshatra, classify_panchang,
    classify_tithi, classify_yoga,
};
pub use combustion::{
    COMBUSTION_GRAHAS, CombustionEntry, combustion_entry, combustion_report, combustion_threshold,
    is_combust,
};
pub use engine::{BirthDetails, BirthPlace, ChartEngine, StaticChart};
pub use error::VedicError;
pub use graha::{ALL_CHART_POINTS, ALL_GRAHAS, ChartPoint, Graha, TARA_GRAHAS};
pub use guna::{
    ALL_KOOTAS, Compatibility, CompatibilityVerdict, GunaMilan, GunaScore, Koota, MAX_GUNA_TOTAL,
    guna_milan, guna_milan_for_births,
};
pub use kaal::{
    KaalKind, TimeWindow, abhijit_muhurta, kaal_for_location, kaal_window, rahu_kaal_fixed,
    rahu_kaal_fixed_for, rahu_kaal_for_location, rahu_kaal_window,
};
pub use longitude::{LongitudeRow, longitude_row, longitude_table};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use panchang::{
    derive_panchang, elongation, karana_from_elongation, panchang_from_engine,
    panchang_from_labels, tithi_from_elongation, tithi_from_label, tithi_index_from_label,
    yoga_from_sum,
};
pub use panchang_types::{Karana, Paksha, PanchangSnapshot, Tithi, Yoga};
pub use position::PlanetaryPosition;
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use riseset::{solar_declination_deg, solar_noon_hour, solar_times, utc_offset_minutes};
pub use riseset_types::{DEFAULT_LATITUDE_DEG, SolarLocation, SolarTimes};
pub use yuddha::{PlanetaryWarEntry, WAR_ORB_DEG, planetary_war, planetary_wars};

pub use jyoti_math::{Dms, angular_distance, deg_to_dms, dms_to_deg, format_hour_12, parse_dms};
