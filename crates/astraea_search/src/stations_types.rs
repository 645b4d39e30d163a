//! Types for retrograde station search.

use astraea_core::{Body, Instant, ZodiacSign};

/// Which way the apparent motion flips at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationType {
    /// Daily motion crosses from positive to negative: retrograde begins.
    RetrogradeBegin,
    /// Daily motion crosses from negative to positive: retrograde ends.
    RetrogradeEnd,
}

/// A refined station: the instant a body's apparent motion reverses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeStation {
    pub body: Body,
    /// Station instant, refined to sub-hour precision.
    pub instant: Instant,
    pub station_type: StationType,
    /// Ecliptic longitude at the station, degrees [0, 360).
    pub longitude_deg: f64,
    /// Zodiac sign containing the station longitude.
    pub sign: ZodiacSign,
}

/// A complete retrograde arc between a begin and an end station.
///
/// Daily motion is negative for every instant strictly between `start`
/// and `end`, and non-negative just outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradePeriod {
    pub body: Body,
    pub start: Instant,
    pub end: Instant,
    pub start_longitude_deg: f64,
    pub end_longitude_deg: f64,
}

impl RetrogradePeriod {
    /// Length of the retrograde arc in days.
    pub fn length_days(&self) -> f64 {
        self.end.days_since(self.start)
    }
}

/// Tunables for the station scanner and refiner.
///
/// The reference values (120-day window, 0.02°/day noise threshold) suit
/// Mercury; slower bodies station over weeks with peak daily motion not
/// far above the Mercury threshold, so [`StationScanConfig::for_body`]
/// widens the window and lowers the threshold for them. All fields may be
/// overridden; they are validated at the start of every search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationScanConfig {
    /// Full scan window in days, centered on the query date.
    pub window_days: f64,
    /// Minimum |daily motion| on both sides of a sign change (°/day) for
    /// the change to count as a station candidate rather than noise.
    pub noise_threshold_deg_per_day: f64,
    /// Half-width of the bisection bracket around a candidate, in hours.
    pub refine_bracket_hours: f64,
    /// Bisection iteration cap. After the cap the bracket midpoint is
    /// returned as a bounded approximation — never an error.
    pub max_refine_iterations: u32,
    /// |daily motion| below which the refiner declares convergence (°/day).
    pub convergence_deg_per_day: f64,
}

impl Default for StationScanConfig {
    /// The reference Mercury tuning.
    fn default() -> Self {
        Self {
            window_days: 120.0,
            noise_threshold_deg_per_day: 0.02,
            refine_bracket_hours: 12.0,
            max_refine_iterations: 10,
            convergence_deg_per_day: 0.01,
        }
    }
}

impl StationScanConfig {
    /// Per-body defaults.
    ///
    /// Windows grow with the synodic rhythm of the body; thresholds
    /// shrink where peak daily motion approaches the Mercury noise floor
    /// (Neptune never exceeds ~0.03°/day, so 0.02 would mask its
    /// stations). Bodies that never station get the reference tuning and
    /// are rejected by the body check instead.
    pub fn for_body(body: Body) -> Self {
        let (window_days, noise_threshold_deg_per_day) = match body {
            Body::Mercury => (120.0, 0.02),
            Body::Venus => (200.0, 0.02),
            Body::Mars => (280.0, 0.02),
            Body::Jupiter => (450.0, 0.01),
            Body::Saturn => (450.0, 0.008),
            Body::Uranus => (500.0, 0.006),
            Body::Neptune | Body::Pluto => (500.0, 0.004),
            Body::Sun | Body::Moon | Body::Vertex => (120.0, 0.02),
        };
        Self {
            window_days,
            noise_threshold_deg_per_day,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err("window_days must be positive");
        }
        if !self.noise_threshold_deg_per_day.is_finite()
            || self.noise_threshold_deg_per_day <= 0.0
        {
            return Err("noise_threshold_deg_per_day must be positive");
        }
        if !self.refine_bracket_hours.is_finite() || self.refine_bracket_hours <= 0.0 {
            return Err("refine_bracket_hours must be positive");
        }
        if self.max_refine_iterations == 0 {
            return Err("max_refine_iterations must be > 0");
        }
        if !self.convergence_deg_per_day.is_finite() || self.convergence_deg_per_day <= 0.0 {
            return Err("convergence_deg_per_day must be positive");
        }
        Ok(())
    }
}
