//! The ephemeris capability consumed by the engine.
//!
//! The engine never links a concrete ephemeris. Everything it needs from
//! one — geocentric ecliptic longitudes and Sun rise/set search — comes
//! through [`EphemerisProvider`], so production code can plug in a real
//! backend while tests substitute a deterministic synthetic one.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::time::Instant;
use crate::{Body, Observer};

/// Search direction for horizon-crossing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetDirection {
    /// The body's ascent above the horizon.
    Rising,
    /// The body's descent below the horizon.
    Setting,
}

/// Failure of the underlying ephemeris source.
///
/// Propagated to callers unchanged: the engine is deterministic, so
/// retrying identical inputs inside it would yield identical failures.
/// Retry policy belongs to the provider or the caller.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider could not produce data (missing kernel, network, ...).
    Unavailable(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Source of celestial positions as a function of time.
///
/// Implementations must be deterministic: the same `(body, instant)` pair
/// always yields the same longitude. That property is what lets the
/// engine memoize queries and skip internal retries.
pub trait EphemerisProvider {
    /// Geocentric ecliptic longitude of `body` in degrees.
    ///
    /// Values outside [0, 360) are accepted and normalized by callers.
    fn longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError>;

    /// Next horizon crossing of `body` for `observer`, searching forward
    /// from `search_start` over at most `window_days`.
    ///
    /// Returns `Ok(None)` when no crossing occurs in the window (polar
    /// day/night) — that is a result, not an error.
    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: RiseSetDirection,
        search_start: Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError>;
}
