//! Sunrise, Rahu Kaal family and Abhijit Muhurta for concrete dates and places.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use jyoti_base::{
    KaalKind, SolarLocation, abhijit_muhurta, kaal_for_location, rahu_kaal_fixed,
    rahu_kaal_for_location, solar_times,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn equator_wednesday_rahu_kaal_after_noon() {
    // 2024-03-20 is a Wednesday: part 4 of a 6:00-18:00 day.
    let now = at(2024, 3, 20, 12, 30);
    assert_eq!(now.weekday(), Weekday::Wed);
    let w = rahu_kaal_for_location(now, &SolarLocation::latitude_only(0.0));
    assert!((w.start_hour - 12.0).abs() < 1e-9);
    assert!((w.end_hour - 13.5).abs() < 1e-9);
    assert!(w.is_active);
}

#[test]
fn saturday_gulika_starts_at_sunrise() {
    let now = at(2024, 3, 23, 7, 0);
    let loc = SolarLocation::latitude_only(0.0);
    let w = kaal_for_location(KaalKind::Gulika, now, &loc);
    let sunrise = solar_times(now.date(), &loc).sunrise_hour;
    assert!((w.start_hour - sunrise).abs() < 1e-9);
    assert!(w.is_active);
}

#[test]
fn yamaganda_thursday_is_first_part() {
    let now = at(2024, 3, 21, 15, 0);
    let w = kaal_for_location(KaalKind::Yamaganda, now, &SolarLocation::latitude_only(0.0));
    assert_eq!(w.start, "6:00 AM");
    assert_eq!(w.end, "7:30 AM");
    assert!(!w.is_active);
}

#[test]
fn fixed_sunday_table() {
    let w = rahu_kaal_fixed(at(2024, 3, 24, 17, 0));
    assert_eq!(w.start, "4:30 PM");
    assert_eq!(w.end, "6:00 PM");
    assert!(w.is_active);

    let w = rahu_kaal_fixed(at(2024, 3, 24, 18, 0));
    assert!(!w.is_active);
}

#[test]
fn abhijit_at_equator_without_zone() {
    let w = abhijit_muhurta(at(2024, 3, 20, 12, 0), &SolarLocation::latitude_only(0.0));
    assert_eq!(w.start, "11:36 AM");
    assert_eq!(w.end, "12:24 PM");
    assert!(w.is_active);
}

#[test]
fn abhijit_centered_on_kolkata_solar_noon() {
    // 88.36 E against the 82.5 E IST meridian: noon about 23.4 minutes early.
    let kolkata = SolarLocation::new(22.57, 88.36, "Asia/Kolkata");
    let w = abhijit_muhurta(at(2024, 3, 20, 11, 0), &kolkata);
    let center = (w.start_hour + w.end_hour) / 2.0;
    assert!((center - (12.0 - 5.86 * 4.0 / 60.0)).abs() < 1e-6);
    assert!((w.duration_hours() - 0.8).abs() < 1e-9);
    assert!(!w.is_active);
}

#[test]
fn delhi_june_day_is_longer_than_december() {
    let delhi = SolarLocation::new(28.61, 77.21, "Asia/Kolkata");
    let june = solar_times(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), &delhi);
    let december = solar_times(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(), &delhi);
    assert!(june.day_length_hours() > 13.5);
    assert!(december.day_length_hours() < 10.7);
    assert!((june.solar_noon_hour - december.solar_noon_hour).abs() < 1e-9);
}

#[test]
fn unknown_zone_keeps_noon_at_twelve() {
    let loc = SolarLocation::new(28.61, 77.21, "Mars/Olympus_Mons");
    let t = solar_times(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(), &loc);
    assert_eq!(t.solar_noon_hour, 12.0);
}
