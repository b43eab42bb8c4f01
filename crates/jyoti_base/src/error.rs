//! Error types for derived Vedic calculations.
//!
//! Domain edge cases (missing planets, unknown names, bad time zones) degrade
//! to documented fallbacks and never surface here. Errors are reserved for
//! strict name parsing and for failures of the injected chart engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_math::ParseDmsError;

use crate::graha::ChartPoint;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error reported by the chart engine.
    Engine(String),
    /// The chart engine has no position for the requested point.
    MissingBody(ChartPoint),
    /// A position field is outside its documented range.
    InvalidPosition(&'static str),
    /// A name did not match any known graha, nakshatra, tithi, yoga or karana.
    UnknownName(String),
    /// Malformed degrees-minutes-seconds text.
    Dms(ParseDmsError),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(msg) => write!(f, "chart engine error: {msg}"),
            Self::MissingBody(p) => write!(f, "no position for {}", p.name()),
            Self::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            Self::UnknownName(name) => write!(f, "unknown name: {name:?}"),
            Self::Dms(e) => write!(f, "dms error: {e}"),
        }
    }
}

impl Error for VedicError {}

impl From<ParseDmsError> for VedicError {
    fn from(e: ParseDmsError) -> Self {
        Self::Dms(e)
    }
}
