//! Types for the planetary hour divider.

use astraea_core::{Body, Instant, Weekday};

/// Hours in one full division (sunrise to next sunrise).
pub const HOURS_PER_DAY: usize = 24;

/// Day hours (sunrise to sunset); the rest are night hours.
pub const DAY_HOURS: usize = 12;

/// Ruler tables for the hour division.
///
/// Explicit configuration rather than module globals so the divider stays
/// referentially transparent and testable with alternate tables. The
/// default carries the traditional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourTables {
    /// Ruler of each weekday, indexed Sunday (0) through Saturday (6).
    pub day_rulers: [Body; 7],
    /// The fixed 7-body Chaldean cycle assigning rulers to successive hours.
    pub chaldean_order: [Body; 7],
}

impl Default for HourTables {
    fn default() -> Self {
        Self {
            day_rulers: [
                Body::Sun,
                Body::Moon,
                Body::Mars,
                Body::Mercury,
                Body::Jupiter,
                Body::Venus,
                Body::Saturn,
            ],
            chaldean_order: [
                Body::Sun,
                Body::Venus,
                Body::Mercury,
                Body::Moon,
                Body::Saturn,
                Body::Jupiter,
                Body::Mars,
            ],
        }
    }
}

impl HourTables {
    /// Ruler of the given weekday.
    pub fn day_ruler(&self, weekday: Weekday) -> Body {
        self.day_rulers[weekday.index()]
    }

    /// Position of `body` within the Chaldean cycle.
    pub fn chaldean_index(&self, body: Body) -> Option<usize> {
        self.chaldean_order.iter().position(|&b| b == body)
    }

    /// Validate that every day ruler can anchor the Chaldean cycle.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        for ruler in self.day_rulers {
            if self.chaldean_index(ruler).is_none() {
                return Err("every day ruler must appear in the Chaldean order");
            }
        }
        Ok(())
    }
}

/// One of the 24 unequal hours of a solar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryHour {
    /// Hour number, 1–24. Hours 1–12 are day hours.
    pub index: u8,
    /// Ruling body from the Chaldean cycle.
    pub ruler: Body,
    /// Inclusive start of the hour.
    pub start: Instant,
    /// Exclusive end of the hour.
    pub end: Instant,
    /// Whether this hour lies between sunrise and sunset.
    pub is_day_hour: bool,
}

impl PlanetaryHour {
    /// Whether `instant` falls within this hour's [start, end).
    pub fn contains(&self, instant: Instant) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Hour length in seconds.
    pub fn length_seconds(&self) -> f64 {
        self.end.seconds_since(self.start)
    }
}

/// A full 24-hour division with lookup results.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryHoursResult {
    /// The 24 hours partitioning [sunrise, next sunrise), in order.
    pub hours: [PlanetaryHour; HOURS_PER_DAY],
    pub sunrise: Instant,
    pub sunset: Instant,
    pub next_sunrise: Instant,
    /// Ruler of hour 1, determined solely by the weekday.
    pub day_ruler: Body,
    /// The hour whose [start, end) contains `now`, if `now` falls inside
    /// this division at all.
    pub current_hour: Option<PlanetaryHour>,
    /// The hour after `current_hour`. `None` for the 24th hour — the next
    /// hour belongs to the next day's division.
    pub next_hour: Option<PlanetaryHour>,
}
