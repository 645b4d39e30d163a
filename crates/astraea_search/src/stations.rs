//! Retrograde station scanner and refiner.
//!
//! Stations are zero crossings of a body's apparent daily motion. The
//! scanner samples motion at one-day steps across the search window and
//! flags a candidate wherever the sign flips with magnitude above the
//! noise threshold on both sides; the refiner then bisects a ±12-hour
//! bracket around the candidate down to sub-hour precision.
//!
//! The refiner is a pure root-finder with no failure mode: after the
//! iteration cap it returns the bracket midpoint, a bounded approximation
//! already precise to well under an hour.

use astraea_core::{
    Body, EphemerisProvider, Instant, LongitudeSampler, ZodiacSign,
};

use crate::error::SearchError;
use crate::stations_types::{
    RetrogradePeriod, RetrogradeStation, StationScanConfig, StationType,
};

/// Reject bodies that never reverse apparent direction.
fn validate_station_body(body: Body) -> Result<(), SearchError> {
    if body.supports_stations() {
        Ok(())
    } else {
        Err(SearchError::InvalidConfig(
            "body has no retrograde stations",
        ))
    }
}

/// Bisect a motion zero crossing around `approx`.
///
/// `entering_retrograde` records the direction the scanner detected:
/// for a begin station motion falls through zero, so positive motion at
/// the midpoint means the crossing lies later in the bracket; for an end
/// station the logic mirrors. Converges early once |motion| drops below
/// the configured tolerance.
pub fn refine_station<P: EphemerisProvider + ?Sized>(
    sampler: &LongitudeSampler<'_, P>,
    body: Body,
    approx: Instant,
    entering_retrograde: bool,
    config: &StationScanConfig,
) -> Result<Instant, SearchError> {
    let half_days = config.refine_bracket_hours / 24.0;
    let mut lo = approx.add_days(-half_days);
    let mut hi = approx.add_days(half_days);

    for _ in 0..config.max_refine_iterations {
        let mid = Instant::from_jd_utc(0.5 * (lo.jd_utc() + hi.jd_utc()));
        let motion = sampler.daily_motion_deg(body, mid)?;
        if motion.abs() < config.convergence_deg_per_day {
            return Ok(mid);
        }
        let crossing_is_later = if entering_retrograde {
            motion > 0.0
        } else {
            motion < 0.0
        };
        if crossing_is_later {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(Instant::from_jd_utc(0.5 * (lo.jd_utc() + hi.jd_utc())))
}

/// Scan for stations across `[center − window/2, center + window/2)`
/// using an existing sampler.
///
/// Returns refined stations in chronological order. An empty result means
/// the body holds one direction throughout the window — a normal outcome,
/// not an error.
pub fn scan_stations<P: EphemerisProvider + ?Sized>(
    sampler: &LongitudeSampler<'_, P>,
    body: Body,
    center: Instant,
    config: &StationScanConfig,
) -> Result<Vec<RetrogradeStation>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_station_body(body)?;

    let start = center.add_days(-config.window_days / 2.0);
    let steps = config.window_days.ceil() as usize;
    let threshold = config.noise_threshold_deg_per_day;

    let mut stations = Vec::new();
    let mut t_prev = start;
    let mut m_prev = sampler.daily_motion_deg(body, t_prev)?;

    for i in 1..steps {
        let t_curr = start.add_days(i as f64);
        let m_curr = sampler.daily_motion_deg(body, t_curr)?;

        let entering = m_prev > threshold && m_curr < -threshold;
        let leaving = m_prev < -threshold && m_curr > threshold;
        if entering || leaving {
            let approx = t_prev.add_days(0.5);
            let instant = refine_station(sampler, body, approx, entering, config)?;
            let longitude_deg = sampler.longitude(body, instant)?;
            stations.push(RetrogradeStation {
                body,
                instant,
                station_type: if entering {
                    StationType::RetrogradeBegin
                } else {
                    StationType::RetrogradeEnd
                },
                longitude_deg,
                sign: ZodiacSign::from_longitude(longitude_deg),
            });
        }

        t_prev = t_curr;
        m_prev = m_curr;
    }

    Ok(stations)
}

/// Scan for stations with a fresh per-call longitude cache.
pub fn search_stations<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    center: Instant,
    config: &StationScanConfig,
) -> Result<Vec<RetrogradeStation>, SearchError> {
    let sampler = LongitudeSampler::new(provider);
    scan_stations(&sampler, body, center, config)
}

/// The retrograde period containing `date`, if one falls entirely within
/// the scan window.
///
/// `Some` only when the last station at or before `date` is a
/// RetrogradeBegin and a matching RetrogradeEnd follows inside the
/// window. A period whose begin station precedes the window start is
/// reported as `None` rather than fabricating a start; widen
/// `window_days` to reach further back.
pub fn current_retrograde_period<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    date: Instant,
    config: &StationScanConfig,
) -> Result<Option<RetrogradePeriod>, SearchError> {
    let sampler = LongitudeSampler::new(provider);
    let stations = scan_stations(&sampler, body, date, config)?;

    let last_before = stations.iter().filter(|s| s.instant <= date).next_back();
    let Some(begin) = last_before else {
        return Ok(None);
    };
    if begin.station_type != StationType::RetrogradeBegin {
        return Ok(None);
    }

    let end = stations
        .iter()
        .find(|s| s.instant > date && s.station_type == StationType::RetrogradeEnd);

    Ok(end.map(|end| RetrogradePeriod {
        body,
        start: begin.instant,
        end: end.instant,
        start_longitude_deg: begin.longitude_deg,
        end_longitude_deg: end.longitude_deg,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_rejected() {
        assert!(validate_station_body(Body::Sun).is_err());
    }

    #[test]
    fn moon_rejected() {
        assert!(validate_station_body(Body::Moon).is_err());
    }

    #[test]
    fn vertex_rejected() {
        assert!(validate_station_body(Body::Vertex).is_err());
    }

    #[test]
    fn mercury_allowed() {
        assert!(validate_station_body(Body::Mercury).is_ok());
    }

    #[test]
    fn saturn_allowed() {
        assert!(validate_station_body(Body::Saturn).is_ok());
    }
}
