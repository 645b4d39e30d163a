//! Sunrise/sunset solving for one solar day.
//!
//! Uses the provider's rise/set search primitive: sunrise is searched
//! forward from approximate local midnight, sunset forward from
//! approximate local noon, each with a bounded 2-day window. The solver
//! also retrieves the following day's sunrise, which the hour divider
//! needs for the night-hour length.
//!
//! Polar day/night is a hard, non-retryable failure for callers that need
//! a 24-hour division — it is never silently defaulted to a fixed hour
//! length.

use astraea_core::{Body, EphemerisProvider, Instant, Observer, RiseSetDirection};

use crate::error::SearchError;

/// Bounded search window handed to the provider, in days.
pub const RISE_SET_WINDOW_DAYS: f64 = 2.0;

/// Julian Date of the UTC midnight starting the civil day containing `date`.
fn utc_midnight_jd(date: Instant) -> f64 {
    (date.jd_utc() - 0.5).floor() + 0.5
}

/// Approximate local midnight for the civil day containing `date`.
///
/// `JD_local = JD_0h_utc − longitude/360`: the Sun crosses the observer's
/// anti-meridian about `longitude/360` days earlier per degree east.
pub fn approximate_local_midnight(date: Instant, longitude_deg: f64) -> Instant {
    Instant::from_jd_utc(utc_midnight_jd(date) - longitude_deg / 360.0)
}

/// Approximate local noon for the civil day containing `date`.
pub fn approximate_local_noon(date: Instant, longitude_deg: f64) -> Instant {
    approximate_local_midnight(date, longitude_deg).add_days(0.5)
}

/// Solar day boundaries for one observer and date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: Instant,
    pub sunset: Instant,
    /// Sunrise of the following day; closes the night arc.
    pub next_sunrise: Instant,
}

impl SunTimes {
    /// Daylight length in seconds.
    pub fn day_length_seconds(&self) -> f64 {
        self.sunset.seconds_since(self.sunrise)
    }

    /// Night length in seconds (sunset to next sunrise).
    pub fn night_length_seconds(&self) -> f64 {
        self.next_sunrise.seconds_since(self.sunset)
    }
}

/// Locate sunrise, sunset, and the following day's sunrise.
///
/// Fails with [`SearchError::NoSunriseOrSunset`] when the provider finds
/// no crossing in the window, or when the crossings it returns are not in
/// rise < set < next-rise order (a degenerate polar sequence).
pub fn solve_sun_times<P: EphemerisProvider + ?Sized>(
    provider: &P,
    observer: &Observer,
    date: Instant,
) -> Result<SunTimes, SearchError> {
    observer.validate().map_err(SearchError::InvalidObserver)?;

    let midnight = approximate_local_midnight(date, observer.longitude_deg);
    let noon = approximate_local_noon(date, observer.longitude_deg);

    let sunrise = provider
        .search_rise_set(
            Body::Sun,
            observer,
            RiseSetDirection::Rising,
            midnight,
            RISE_SET_WINDOW_DAYS,
        )?
        .ok_or(SearchError::NoSunriseOrSunset)?;

    let sunset = provider
        .search_rise_set(
            Body::Sun,
            observer,
            RiseSetDirection::Setting,
            noon,
            RISE_SET_WINDOW_DAYS,
        )?
        .ok_or(SearchError::NoSunriseOrSunset)?;

    let next_sunrise = provider
        .search_rise_set(
            Body::Sun,
            observer,
            RiseSetDirection::Rising,
            midnight.add_days(1.0),
            RISE_SET_WINDOW_DAYS,
        )?
        .ok_or(SearchError::NoSunriseOrSunset)?;

    if sunset <= sunrise || next_sunrise <= sunset {
        return Err(SearchError::NoSunriseOrSunset);
    }

    Ok(SunTimes {
        sunrise,
        sunset,
        next_sunrise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_midnight_greenwich() {
        let date = Instant::from_jd_utc(2_460_000.75);
        let m = approximate_local_midnight(date, 0.0);
        assert!((m.jd_utc() - 2_460_000.5).abs() < 1e-10);
    }

    #[test]
    fn local_noon_east_90() {
        // 90 deg east: local noon is 6 hours earlier in UT.
        let date = Instant::from_jd_utc(2_460_000.5);
        let noon = approximate_local_noon(date, 90.0);
        assert!((noon.jd_utc() - (2_460_000.5 + 0.25)).abs() < 1e-10);
    }

    #[test]
    fn local_noon_west_90() {
        // 90 deg west: local noon is 6 hours later in UT.
        let date = Instant::from_jd_utc(2_460_000.5);
        let noon = approximate_local_noon(date, -90.0);
        assert!((noon.jd_utc() - (2_460_000.5 + 0.75)).abs() < 1e-10);
    }

    #[test]
    fn sun_times_lengths() {
        let times = SunTimes {
            sunrise: Instant::from_jd_utc(2_460_000.75),
            sunset: Instant::from_jd_utc(2_460_001.25),
            next_sunrise: Instant::from_jd_utc(2_460_001.75),
        };
        assert!((times.day_length_seconds() - 12.0 * 3600.0).abs() < 1e-6);
        assert!((times.night_length_seconds() - 12.0 * 3600.0).abs() < 1e-6);
    }
}
