//! Seam to the external ephemeris / chart engine.
//!
//! Raw planetary positions are never computed in this crate. Callers inject
//! a [`ChartEngine`]; tests and the CLI use the in-memory [`StaticChart`].

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::error::VedicError;
use crate::graha::{ChartPoint, Graha};
use crate::nakshatra::nakshatra_from_longitude;
use crate::position::PlanetaryPosition;

/// Where a birth took place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BirthPlace {
    /// Free-text place name, resolved by the engine.
    Named(String),
    /// Geographic coordinates in degrees (north and east positive).
    Coordinates { latitude_deg: f64, longitude_deg: f64 },
}

/// Date, local clock time and place of a birth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthDetails {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: BirthPlace,
}

/// Source of sidereal chart positions.
pub trait ChartEngine {
    /// Position of a chart point, or `None` when the engine has no data for it.
    fn position(&self, point: ChartPoint) -> Option<PlanetaryPosition>;

    /// 0-based birth nakshatra index (0..=26) for a birth moment and place.
    fn nakshatra_index(&self, birth: &BirthDetails) -> Result<u8, VedicError>;
}

/// A fixed chart held in memory.
///
/// `nakshatra_index` ignores the birth details and reports the nakshatra
/// of the chart's own Moon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticChart {
    positions: BTreeMap<ChartPoint, PlanetaryPosition>,
}

impl StaticChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StaticChart::insert`].
    pub fn with(mut self, point: impl Into<ChartPoint>, position: PlanetaryPosition) -> Self {
        self.insert(point, position);
        self
    }

    pub fn insert(&mut self, point: impl Into<ChartPoint>, position: PlanetaryPosition) {
        self.positions.insert(point.into(), position);
    }

    /// Build from absolute sidereal longitudes (no retrograde flags).
    pub fn from_longitudes<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<ChartPoint>,
    {
        let mut chart = Self::new();
        for (point, lon) in entries {
            chart.insert(point, PlanetaryPosition::from_longitude(lon, false));
        }
        chart
    }

    /// Build from `name -> position` pairs, e.g. a deserialized JSON object.
    ///
    /// Fails on the first unknown body name or out-of-range position.
    pub fn from_named<I, S>(entries: I) -> Result<Self, VedicError>
    where
        I: IntoIterator<Item = (S, PlanetaryPosition)>,
        S: AsRef<str>,
    {
        let mut chart = Self::new();
        for (name, position) in entries {
            let point: ChartPoint = name.as_ref().parse()?;
            position.validate()?;
            chart.insert(point, position);
        }
        Ok(chart)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl ChartEngine for StaticChart {
    fn position(&self, point: ChartPoint) -> Option<PlanetaryPosition> {
        self.positions.get(&point).cloned()
    }

    fn nakshatra_index(&self, _birth: &BirthDetails) -> Result<u8, VedicError> {
        let moon = ChartPoint::Graha(Graha::Chandra);
        let pos = self
            .positions
            .get(&moon)
            .ok_or(VedicError::MissingBody(moon))?;
        Ok(nakshatra_from_longitude(pos.absolute_longitude()).nakshatra_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_CHART_POINTS;

    fn birth() -> BirthDetails {
        BirthDetails {
            date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            place: BirthPlace::Named("Varanasi".into()),
        }
    }

    #[test]
    fn positions_by_point() {
        let chart = StaticChart::from_longitudes([(Graha::Surya, 100.0), (Graha::Chandra, 105.0)]);
        assert_eq!(chart.len(), 2);
        let sun = chart.position(Graha::Surya.into()).unwrap();
        assert!((sun.absolute_longitude() - 100.0).abs() < 1e-12);
        assert!(chart.position(ChartPoint::Ascendant).is_none());
    }

    #[test]
    fn nakshatra_from_moon() {
        // 125 deg -> Magha (index 9)
        let chart = StaticChart::from_longitudes([(Graha::Chandra, 125.0)]);
        assert_eq!(chart.nakshatra_index(&birth()), Ok(9));
    }

    #[test]
    fn nakshatra_without_moon_is_error() {
        let chart = StaticChart::new();
        assert_eq!(
            chart.nakshatra_index(&birth()),
            Err(VedicError::MissingBody(ChartPoint::Graha(Graha::Chandra)))
        );
    }

    #[test]
    fn from_named_parses_bodies() {
        let chart = StaticChart::from_named([
            ("Sun", PlanetaryPosition::from_longitude(10.0, false)),
            ("Ascendant", PlanetaryPosition::from_longitude(200.0, false)),
        ])
        .unwrap();
        assert!(chart.position(ChartPoint::Ascendant).is_some());
    }

    #[test]
    fn longitudes_round_trip_through_from_named() {
        let built = StaticChart::from_longitudes([(Graha::Surya, -1e-15), (Graha::Shani, 359.99)]);
        let named = ALL_CHART_POINTS
            .into_iter()
            .filter_map(|point| built.position(point).map(|pos| (point.name(), pos)))
            .collect::<Vec<_>>();
        let back = StaticChart::from_named(named).unwrap();
        assert_eq!(back, built);
        let sun = back.position(Graha::Surya.into()).unwrap();
        assert_eq!((sun.sign_index, sun.degree_in_sign), (0, 0.0));
    }

    #[test]
    fn from_named_rejects_unknown() {
        let vulcan = PlanetaryPosition::from_longitude(1.0, false);
        let err = StaticChart::from_named([("Vulcan", vulcan)]);
        assert_eq!(err, Err(VedicError::UnknownName("Vulcan".into())));
    }
}
