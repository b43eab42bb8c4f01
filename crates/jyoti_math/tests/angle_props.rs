//! Property tests for angle and DMS primitives.

use jyoti_math::{Dms, angular_distance, deg_to_dms, dms_to_deg, normalize_360, parse_dms};
use proptest::prelude::*;

proptest! {
    #[test]
    fn distance_is_bounded_and_symmetric(a in -720.0f64..720.0, b in -720.0f64..720.0) {
        let d = angular_distance(a, b);
        prop_assert!((0.0..=180.0).contains(&d), "distance {d}");
        prop_assert!((d - angular_distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn normalize_stays_in_circle(a in -1.0e6f64..1.0e6) {
        let n = normalize_360(a);
        prop_assert!((0.0..360.0).contains(&n), "normalized {n}");
    }

    #[test]
    fn dms_round_trip_within_one_arcsecond(v in 0.0f64..360.0) {
        let text = deg_to_dms(v).to_string();
        let back = parse_dms(&text).unwrap();
        prop_assert!((back - v).abs() <= 1.0 / 3600.0, "{v} -> {text} -> {back}");
    }

    #[test]
    fn dms_fields_stay_in_range(v in 0.0f64..360.0) {
        let d = deg_to_dms(v);
        prop_assert!(d.minutes < 60);
        prop_assert!(d.seconds < 60);
    }
}

#[test]
fn reference_longitude_round_trip() {
    let v = 137.501_944_4;
    let text = deg_to_dms(v).to_string();
    assert_eq!(text, "137°30'07\"");
    let parsed: Dms = text.parse().unwrap();
    assert!((dms_to_deg(&parsed) - v).abs() < 1.0 / 3600.0);
}
