//! Longitude table rows: absolute and in-sign positions as DMS text.

use jyoti_math::{Dms, deg_to_dms};

use crate::engine::ChartEngine;
use crate::graha::{ALL_CHART_POINTS, ChartPoint};
use crate::position::PlanetaryPosition;
use crate::rashi::{Rashi, rashi_from_longitude};

/// One display row of a planetary longitude table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LongitudeRow {
    pub point: ChartPoint,
    pub rashi: Rashi,
    /// Absolute sidereal longitude in decimal degrees.
    pub longitude_deg: f64,
    pub absolute: Dms,
    /// e.g. `137°30'07"`.
    pub absolute_text: String,
    pub in_sign: Dms,
    pub in_sign_text: String,
    pub nakshatra: String,
    pub nakshatra_pada: u8,
    pub retrograde: bool,
}

/// Format one position as a table row.
pub fn longitude_row(point: ChartPoint, position: &PlanetaryPosition) -> LongitudeRow {
    let longitude_deg = position.absolute_longitude();
    let absolute = deg_to_dms(longitude_deg);
    let sign = rashi_from_longitude(longitude_deg);
    let in_sign = sign.dms;
    LongitudeRow {
        point,
        rashi: sign.rashi,
        longitude_deg,
        absolute,
        absolute_text: absolute.to_string(),
        in_sign,
        in_sign_text: in_sign.to_string(),
        nakshatra: position.nakshatra.clone(),
        nakshatra_pada: position.nakshatra_pada,
        retrograde: position.retrograde,
    }
}

/// Rows for every chart point the engine knows, in display order.
///
/// Points without a position are left out of the table.
pub fn longitude_table<E: ChartEngine + ?Sized>(engine: &E) -> Vec<LongitudeRow> {
    ALL_CHART_POINTS
        .into_iter()
        .filter_map(|point| match engine.position(point) {
            Some(pos) => Some(longitude_row(point, &pos)),
            None => {
                tracing::debug!(point = point.name(), "no position, row omitted");
                None
            }
        })
        .collect()
}
