//! Planetary hour division.
//!
//! The solar day from sunrise to the next sunrise is divided into 24
//! unequal hours: 12 day hours spanning sunrise→sunset and 12 night hours
//! spanning sunset→next-sunrise. The ruler of hour 1 is the weekday's day
//! ruler; each later hour advances one step through the Chaldean cycle,
//! wrapping modulo 7.
//!
//! Hour boundaries are computed by offsetting from sunrise (day hours) or
//! sunset (night hours) in absolute time — never by multiplying a single
//! global hour length, since day and night hour lengths differ, and never
//! in wall-clock local time, which would tear across a DST transition.

use astraea_core::{EphemerisProvider, Instant, Observer, Weekday};

use crate::error::SearchError;
use crate::hours_types::{DAY_HOURS, HOURS_PER_DAY, HourTables, PlanetaryHour, PlanetaryHoursResult};
use crate::riseset::{SunTimes, solve_sun_times};

/// Divide a solar day into 24 planetary hours from pre-computed sun times.
///
/// Pure arithmetic — no ephemeris queries. `weekday` selects the day
/// ruler; `now` drives the current/next hour lookup. The 24 hours
/// partition [sunrise, next sunrise) exactly: the 12th hour ends on the
/// sunset instant and the 24th on the next-sunrise instant.
pub fn divide_from_sun_times(
    times: &SunTimes,
    weekday: Weekday,
    now: Instant,
    tables: &HourTables,
) -> Result<PlanetaryHoursResult, SearchError> {
    tables.validate().map_err(SearchError::InvalidConfig)?;
    if times.sunset <= times.sunrise {
        return Err(SearchError::InvalidConfig("sunset must follow sunrise"));
    }
    if times.next_sunrise <= times.sunset {
        return Err(SearchError::InvalidConfig(
            "next sunrise must follow sunset",
        ));
    }

    let day_ruler = tables.day_ruler(weekday);
    let start_index = tables
        .chaldean_index(day_ruler)
        .ok_or(SearchError::InvalidConfig(
            "every day ruler must appear in the Chaldean order",
        ))?;

    let day_hour_days = times.sunset.days_since(times.sunrise) / DAY_HOURS as f64;
    let night_hour_days =
        times.next_sunrise.days_since(times.sunset) / (HOURS_PER_DAY - DAY_HOURS) as f64;

    let mut hours: [PlanetaryHour; HOURS_PER_DAY] = std::array::from_fn(|i| {
        let ruler = tables.chaldean_order[(start_index + i) % tables.chaldean_order.len()];
        let is_day_hour = i < DAY_HOURS;
        let (anchor, length_days, offset) = if is_day_hour {
            (times.sunrise, day_hour_days, i)
        } else {
            (times.sunset, night_hour_days, i - DAY_HOURS)
        };
        PlanetaryHour {
            index: (i + 1) as u8,
            ruler,
            start: anchor.add_days(offset as f64 * length_days),
            end: anchor.add_days((offset + 1) as f64 * length_days),
            is_day_hour,
        }
    });

    // Pin the arc boundaries so the partition closes exactly despite
    // floating-point accumulation in the offsets.
    hours[DAY_HOURS - 1].end = times.sunset;
    hours[HOURS_PER_DAY - 1].end = times.next_sunrise;

    let current_hour = hours.iter().copied().find(|h| h.contains(now));
    let next_hour = current_hour.and_then(|cur| {
        let next_index = cur.index as usize;
        hours.get(next_index).copied()
    });

    Ok(PlanetaryHoursResult {
        hours,
        sunrise: times.sunrise,
        sunset: times.sunset,
        next_sunrise: times.next_sunrise,
        day_ruler,
        current_hour,
        next_hour,
    })
}

/// Compute the full planetary-hour division for an observer and date.
///
/// Solves sunrise/sunset/next-sunrise through the provider, then divides.
/// The weekday is taken from the civil day containing `date`.
pub fn planetary_hours_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    observer: &Observer,
    date: Instant,
    now: Instant,
    tables: &HourTables,
) -> Result<PlanetaryHoursResult, SearchError> {
    let times = solve_sun_times(provider, observer, date)?;
    divide_from_sun_times(&times, date.weekday(), now, tables)
}
