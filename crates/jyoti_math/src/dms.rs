//! Degrees-minutes-seconds (DMS) conversion.
//!
//! Seconds are rounded to the nearest whole arc-second. Rounding can push
//! seconds to 60, which is carried into minutes and, from there, into
//! degrees so that a formatted value never reads `59'60"`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    /// Whole degrees (0..=30 within a sign, 0..=360 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Whole arc-seconds (0..59).
    pub seconds: u8,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Error returned when DMS text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDmsError {
    /// No numeric components were found.
    Empty,
    /// More than three numeric components.
    TooManyParts(usize),
    /// A component was not a valid unsigned integer.
    InvalidNumber(String),
    /// Minutes or seconds were 60 or more, or a decimal angle had no DMS form.
    OutOfRange(&'static str),
}

impl Display for ParseDmsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty DMS value"),
            Self::TooManyParts(n) => write!(f, "expected at most 3 DMS parts, found {n}"),
            Self::InvalidNumber(s) => write!(f, "invalid DMS component: {s:?}"),
            Self::OutOfRange(part) => write!(f, "{part} out of range"),
        }
    }
}

impl Error for ParseDmsError {}

/// Largest angle a [`Dms`] can hold: `65535°59'59"`.
pub const MAX_DMS: Dms = Dms {
    degrees: u16::MAX,
    minutes: 59,
    seconds: 59,
};

/// Split a finite magnitude no larger than [`MAX_DMS`]. `None` when the
/// seconds carry would overflow the degree field.
fn split_dms(d: f64) -> Option<Dms> {
    let mut degrees = d.floor() as u16;
    let min_frac = (d - degrees as f64) * 60.0;
    let mut minutes = min_frac.floor() as u8;
    let mut seconds = ((min_frac - minutes as f64) * 60.0).round() as u8;
    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees = degrees.checked_add(1)?;
    }
    Some(Dms {
        degrees,
        minutes,
        seconds,
    })
}

/// Convert decimal degrees to DMS.
///
/// `deg = floor(v)`, `min = floor((v - deg) * 60)`, `sec = round(rest * 60)`,
/// with 60-second and 60-minute carries. Negative input uses its absolute value.
///
/// Total over `f64`: NaN maps to `0°00'00"` and magnitudes past [`MAX_DMS`]
/// (infinity included) saturate to it. Use [`try_deg_to_dms`] to reject them.
pub fn deg_to_dms(deg: f64) -> Dms {
    if deg.is_nan() {
        return Dms {
            degrees: 0,
            minutes: 0,
            seconds: 0,
        };
    }
    let d = deg.abs().min(dms_to_deg(&MAX_DMS));
    split_dms(d).unwrap_or(MAX_DMS)
}

/// Convert decimal degrees to DMS, rejecting values with no DMS form.
///
/// Fails with [`ParseDmsError::OutOfRange`] for NaN, infinities and
/// magnitudes that would round past [`MAX_DMS`].
pub fn try_deg_to_dms(deg: f64) -> Result<Dms, ParseDmsError> {
    let d = deg.abs();
    if !d.is_finite() || d > dms_to_deg(&MAX_DMS) {
        return Err(ParseDmsError::OutOfRange("degrees"));
    }
    split_dms(d).ok_or(ParseDmsError::OutOfRange("degrees"))
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds as f64 / 3600.0
}

impl FromStr for Dms {
    type Err = ParseDmsError;

    /// Accepts `137°30'07"`, `137 30 7` or `137:30:07`; trailing parts may be omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| matches!(c, '°' | '\'' | '"' | ':') || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            return Err(ParseDmsError::Empty);
        }
        if parts.len() > 3 {
            return Err(ParseDmsError::TooManyParts(parts.len()));
        }

        let num = |p: &str| -> Result<u16, ParseDmsError> {
            p.parse::<u16>()
                .map_err(|_| ParseDmsError::InvalidNumber(p.to_string()))
        };
        let degrees = num(parts[0])?;
        let minutes = parts.get(1).map(|p| num(*p)).transpose()?.unwrap_or(0);
        let seconds = parts.get(2).map(|p| num(*p)).transpose()?.unwrap_or(0);
        if minutes >= 60 {
            return Err(ParseDmsError::OutOfRange("minutes"));
        }
        if seconds >= 60 {
            return Err(ParseDmsError::OutOfRange("seconds"));
        }
        Ok(Dms {
            degrees,
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }
}

/// Parse DMS text straight to decimal degrees.
pub fn parse_dms(s: &str) -> Result<f64, ParseDmsError> {
    s.parse::<Dms>().map(|d| dms_to_deg(&d))
}
