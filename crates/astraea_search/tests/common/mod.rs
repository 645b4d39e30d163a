//! Shared synthetic ephemeris provider for integration tests.
//!
//! Longitude follows `base·t + amp·sin(2πt/period)` days past the epoch,
//! so the finite-difference daily motion is `base + K·cos(ω(t + 0.5))`
//! with `K = 2·amp·sin(ω/2)`, and the motion zero crossings have closed
//! forms the station tests compare against.

#![allow(dead_code)]

use std::f64::consts::TAU;

use astraea_core::{
    Body, EphemerisError, EphemerisProvider, Instant, Observer, RiseSetDirection,
};

/// 2024-03-03 00:00 UTC, a Sunday.
pub const EPOCH_JD: f64 = 2_460_372.5;

#[derive(Debug, Clone, Copy)]
pub struct SyntheticProvider {
    /// Mean eastward drift, degrees per day.
    pub base_rate_deg_per_day: f64,
    /// Amplitude of the oscillating term, degrees.
    pub amplitude_deg: f64,
    /// Period of the oscillating term, days.
    pub period_days: f64,
    /// Fixed UT hour of sunrise, every day, everywhere.
    pub sunrise_hour_utc: f64,
    /// Fixed UT hour of sunset.
    pub sunset_hour_utc: f64,
    /// When set, rise/set searches find nothing.
    pub polar_night: bool,
}

impl SyntheticProvider {
    /// Mercury-like oscillator: stations roughly 31 and 84 days past the
    /// epoch, about 52 days retrograde in between. The amplitude keeps the
    /// motion slope near the zero crossings steep enough that the
    /// refiner's convergence band spans well under an hour.
    pub fn mercury_like() -> Self {
        Self {
            base_rate_deg_per_day: 1.0,
            amplitude_deg: 120.0,
            period_days: 116.0,
            sunrise_hour_utc: 6.0,
            sunset_hour_utc: 18.0,
            polar_night: false,
        }
    }

    /// Equatorial idealization: 06:00/18:00 UT sun, steady 1°/day motion.
    pub fn equatorial() -> Self {
        Self {
            base_rate_deg_per_day: 1.0,
            amplitude_deg: 0.0,
            period_days: 116.0,
            sunrise_hour_utc: 6.0,
            sunset_hour_utc: 18.0,
            polar_night: false,
        }
    }

    pub fn with_polar_night(mut self) -> Self {
        self.polar_night = true;
        self
    }

    /// Days past the epoch at which the finite-difference daily motion
    /// crosses zero: `(retrograde begin, retrograde end)`.
    pub fn motion_zero_days(&self) -> (f64, f64) {
        let omega = TAU / self.period_days;
        let k = 2.0 * self.amplitude_deg * (omega / 2.0).sin();
        let theta = (-self.base_rate_deg_per_day / k).acos();
        (theta / omega - 0.5, (TAU - theta) / omega - 0.5)
    }
}

impl EphemerisProvider for SyntheticProvider {
    fn longitude(&self, _body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let t = instant.jd_utc() - EPOCH_JD;
        Ok(self.base_rate_deg_per_day * t
            + self.amplitude_deg * (TAU * t / self.period_days).sin())
    }

    fn search_rise_set(
        &self,
        _body: Body,
        _observer: &Observer,
        direction: RiseSetDirection,
        search_start: Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        if self.polar_night {
            return Ok(None);
        }
        let hour = match direction {
            RiseSetDirection::Rising => self.sunrise_hour_utc,
            RiseSetDirection::Setting => self.sunset_hour_utc,
        };
        let midnight = (search_start.jd_utc() - 0.5).floor() + 0.5;
        let mut candidate = midnight + hour / 24.0;
        while candidate < search_start.jd_utc() {
            candidate += 1.0;
        }
        if candidate - search_start.jd_utc() <= window_days {
            Ok(Some(Instant::from_jd_utc(candidate)))
        } else {
            Ok(None)
        }
    }
}
