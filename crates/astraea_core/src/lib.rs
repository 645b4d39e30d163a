//! Core types for the astraea timing engine.
//!
//! This crate holds the leaf vocabulary shared by the timing and aspect
//! engines: celestial [`Body`] identifiers, the civil-time [`Instant`],
//! the geographic [`Observer`], ecliptic angle utilities, and the
//! [`EphemerisProvider`] capability that supplies raw longitudes and
//! rise/set search. Nothing here performs astronomy itself — concrete
//! ephemeris backends live behind the provider trait.

pub mod angle;
pub mod provider;
pub mod sampler;
pub mod time;

pub use angle::{ZodiacSign, circular_separation_deg, normalize_deg, wrap_to_pm180};
pub use provider::{EphemerisError, EphemerisProvider, RiseSetDirection};
pub use sampler::LongitudeSampler;
pub use time::{Instant, Weekday};

/// Celestial bodies and synthetic chart points known to the engine.
///
/// The ten physical bodies are geocentric ecliptic targets an ephemeris
/// provider can resolve directly. `Vertex` is a synthetic chart point: it
/// has no provider-independent longitude and participates only where a
/// caller supplies its longitude explicitly (e.g. the aspect matcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Vertex,
}

impl Body {
    /// All variants, physical bodies first.
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Vertex,
    ];

    /// Whether this body can have retrograde stations.
    ///
    /// Sun and Moon always move eastward geocentrically; Vertex is not a
    /// moving body at all. Everything else visibly reverses from Earth.
    pub const fn supports_stations(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon | Self::Vertex)
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::Vertex => "vertex",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic observer on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl Observer {
    /// Create a new observer. Range checks happen in [`Observer::validate`],
    /// which callers run before any ephemeris query.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Validate coordinate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be within [-90, 90] degrees");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be within [-180, 180] degrees");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude must be finite");
        }
        Ok(())
    }
}
