//! Numeric primitives shared by the derived Vedic calculations.
//!
//! This crate provides:
//! - Angle normalization and circular (shortest-arc) distance
//! - Degrees-minutes-seconds conversion with carry, formatting and parsing
//! - 12-hour clock formatting of fractional hours
//!
//! Everything here is a pure function of its arguments.

pub mod angle;
pub mod clock;
pub mod dms;

pub use angle::{angular_distance, normalize_360, round_to};
pub use clock::{format_hour_12, hour_of_day};
pub use dms::{Dms, MAX_DMS, ParseDmsError, deg_to_dms, dms_to_deg, parse_dms, try_deg_to_dms};
