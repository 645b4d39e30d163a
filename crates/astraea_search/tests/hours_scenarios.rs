//! Integration tests for the planetary hour divider over a synthetic
//! provider with fixed-UT sunrise and sunset.

mod common;

use astraea_core::{Body, Instant, Observer};
use astraea_search::{HourTables, SearchError, planetary_hours_for_date};
use common::{EPOCH_JD, SyntheticProvider};

fn greenwich() -> Observer {
    Observer::new(0.0, 0.0, 0.0)
}

/// Equatorial Sunday: 06:00 rise, 18:00 set, every hour exactly 3600 s.
#[test]
fn equal_hours_on_the_equator() {
    let provider = SyntheticProvider::equatorial();
    let date = Instant::from_jd_utc(EPOCH_JD);
    let now = Instant::from_jd_utc(EPOCH_JD + 6.5 / 24.0);
    let result =
        planetary_hours_for_date(&provider, &greenwich(), date, now, &HourTables::default())
            .expect("division should succeed");

    assert_eq!(result.day_ruler, Body::Sun);
    assert!((result.sunrise.jd_utc() - (EPOCH_JD + 0.25)).abs() < 1e-9);
    assert!((result.sunset.jd_utc() - (EPOCH_JD + 0.75)).abs() < 1e-9);
    assert!((result.next_sunrise.jd_utc() - (EPOCH_JD + 1.25)).abs() < 1e-9);
    for hour in &result.hours {
        assert!((hour.length_seconds() - 3600.0).abs() < 1e-6);
    }

    let current = result.current_hour.expect("06:30 falls in hour 1");
    assert_eq!(current.index, 1);
    assert_eq!(current.ruler, Body::Sun);
    let next = result.next_hour.expect("hour 2 follows");
    assert_eq!(next.index, 2);
    assert_eq!(next.ruler, Body::Venus);
}

/// A 14-hour day still partitions [sunrise, next sunrise) exactly.
#[test]
fn uneven_day_partitions_exactly() {
    let mut provider = SyntheticProvider::equatorial();
    provider.sunrise_hour_utc = 5.0;
    provider.sunset_hour_utc = 19.0;
    let date = Instant::from_jd_utc(EPOCH_JD);
    let result = planetary_hours_for_date(
        &provider,
        &greenwich(),
        date,
        Instant::from_jd_utc(EPOCH_JD + 0.3),
        &HourTables::default(),
    )
    .expect("division should succeed");

    assert!((result.hours[0].length_seconds() - 4200.0).abs() < 1e-6);
    assert!((result.hours[12].length_seconds() - 3000.0).abs() < 1e-6);
    assert_eq!(result.hours[0].start, result.sunrise);
    assert_eq!(result.hours[11].end, result.sunset);
    assert_eq!(result.hours[12].start, result.sunset);
    assert_eq!(result.hours[23].end, result.next_sunrise);
    for pair in result.hours.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }

    let total: f64 = result.hours.iter().map(|h| h.length_seconds()).sum();
    assert!((total - 86_400.0).abs() < 1e-5);
}

/// The day ruler depends only on the civil weekday, not the observer.
#[test]
fn day_ruler_is_location_independent() {
    let provider = SyntheticProvider::equatorial();
    // 2024-03-07, a Thursday.
    let date = Instant::from_jd_utc(EPOCH_JD + 4.0);
    let now = Instant::from_jd_utc(EPOCH_JD + 4.5);
    for longitude in [0.0, 90.0, -90.0] {
        let observer = Observer::new(10.0, longitude, 0.0);
        let result =
            planetary_hours_for_date(&provider, &observer, date, now, &HourTables::default())
                .expect("division should succeed");
        assert_eq!(result.day_ruler, Body::Jupiter, "longitude {longitude}");
        assert_eq!(result.hours[0].ruler, Body::Jupiter);
    }
}

#[test]
fn polar_night_is_an_error() {
    let provider = SyntheticProvider::equatorial().with_polar_night();
    let date = Instant::from_jd_utc(EPOCH_JD);
    let err = planetary_hours_for_date(
        &provider,
        &Observer::new(78.0, 15.0, 0.0),
        date,
        date,
        &HourTables::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::NoSunriseOrSunset));
}

#[test]
fn now_outside_division_has_no_current_hour() {
    let provider = SyntheticProvider::equatorial();
    let date = Instant::from_jd_utc(EPOCH_JD);
    // Two days past the division.
    let now = Instant::from_jd_utc(EPOCH_JD + 2.0);
    let result =
        planetary_hours_for_date(&provider, &greenwich(), date, now, &HourTables::default())
            .expect("division should succeed");
    assert!(result.current_hour.is_none());
    assert!(result.next_hour.is_none());
}

#[test]
fn invalid_observer_rejected() {
    let provider = SyntheticProvider::equatorial();
    let date = Instant::from_jd_utc(EPOCH_JD);
    let err = planetary_hours_for_date(
        &provider,
        &Observer::new(95.0, 0.0, 0.0),
        date,
        date,
        &HourTables::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidObserver(_)));
}
