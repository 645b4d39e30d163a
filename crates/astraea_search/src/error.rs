//! Error types for the timing and aspect engines.

use std::error::Error;
use std::fmt::{Display, Formatter};

use astraea_core::EphemerisError;

/// Errors surfaced by the search engines.
///
/// Empty results (no station in the window, no aspect within orb) are
/// ordinary return values, never errors. Everything here is fatal to the
/// call that produced it and is surfaced immediately with no internal
/// recovery: the computations are deterministic, so retrying identical
/// inputs would fail identically.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The Sun never crosses the horizon in the bounded search window
    /// (polar day/night, or the provider returned an unusable sequence).
    NoSunriseOrSunset,
    /// Observer coordinates out of range. Rejected before any ephemeris call.
    InvalidObserver(&'static str),
    /// A configuration struct failed validation.
    InvalidConfig(&'static str),
    /// The underlying ephemeris provider failed; propagated unchanged.
    Ephemeris(EphemerisError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSunriseOrSunset => {
                write!(f, "no sunrise or sunset found within the search window")
            }
            Self::InvalidObserver(msg) => write!(f, "invalid observer: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Ephemeris(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
