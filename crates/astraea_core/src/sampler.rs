//! Memoizing longitude sampler.
//!
//! The station scanner evaluates the same `(body, instant)` longitude
//! repeatedly — each daily motion sample shares an endpoint with its
//! neighbor, and the refiner re-queries inside the scanned bracket. The
//! sampler is a read-through cache over the provider so those queries are
//! paid once per call.
//!
//! The cache is interior-mutable and scoped to the sampler instance; a
//! sampler is meant to live for one engine call. Independent calls on
//! independent threads each build their own.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::angle::{normalize_deg, wrap_to_pm180};
use crate::provider::{EphemerisError, EphemerisProvider};
use crate::time::Instant;
use crate::Body;

/// Read-through longitude cache with finite-difference daily motion.
pub struct LongitudeSampler<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
    cache: RefCell<HashMap<(Body, u64), f64>>,
}

impl<'a, P: EphemerisProvider + ?Sized> LongitudeSampler<'a, P> {
    /// Wrap a provider with an empty cache.
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Geocentric ecliptic longitude, normalized to [0, 360), memoized
    /// per `(body, instant)`.
    pub fn longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let key = (body, instant.jd_utc().to_bits());
        if let Some(&lon) = self.cache.borrow().get(&key) {
            return Ok(lon);
        }
        let lon = normalize_deg(self.provider.longitude(body, instant)?);
        self.cache.borrow_mut().insert(key, lon);
        Ok(lon)
    }

    /// Apparent daily motion in degrees per day at `instant`.
    ///
    /// Defined as the one-day forward difference
    /// `longitude(t + 1d) − longitude(t)`, wrapped to (-180, +180] so a
    /// crossing of the 0°/360° seam reads as small motion rather than a
    /// near-full-circle jump. Negative values mean retrograde motion.
    pub fn daily_motion_deg(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let lon0 = self.longitude(body, instant)?;
        let lon1 = self.longitude(body, instant.add_days(1.0))?;
        Ok(wrap_to_pm180(lon1 - lon0))
    }

    /// Number of distinct provider queries answered so far.
    pub fn cached_queries(&self) -> usize {
        self.cache.borrow().len()
    }
}
