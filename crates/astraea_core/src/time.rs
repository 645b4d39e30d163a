//! Civil-time instants on the Julian Date scale.
//!
//! The engine does all interval arithmetic in absolute time (fractional
//! days on the UTC Julian Date scale) so divisions that straddle a DST
//! transition stay gap-free. Calendar conversion uses the standard
//! Gregorian algorithms (Fliegel & Van Flandern / Meeus form).

use std::fmt::{Display, Formatter};

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian `(year, month, day)` where
/// `day` carries the fractional time of day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day)
}

/// Day of the week, indexed 0–6 from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Index 0 (Sunday) through 6 (Saturday).
    pub const fn index(self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Weekday from index 0–6.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Weekday of the civil day containing the given Julian Date.
    ///
    /// JD 0.0 fell on a Monday; the +1.5 offset aligns day boundaries to
    /// civil midnight and shifts the cycle so 0 maps to Sunday.
    pub fn from_jd(jd: f64) -> Self {
        let idx = ((jd + 1.5).floor() as i64).rem_euclid(7) as usize;
        Self::from_index(idx).unwrap_or(Self::Sunday)
    }
}

/// An immutable point in civil (UTC) time.
///
/// Stored as a UTC Julian Date; one unit is one day. Instants are plain
/// values: comparisons, day offsets, and weekday lookup never touch the
/// ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_utc: f64,
}

impl Instant {
    /// Instant from a raw UTC Julian Date.
    pub const fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    /// Instant from Gregorian calendar components (UTC).
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let day_frac =
            day as f64 + (hour as f64 + (minute as f64 + second / 60.0) / 60.0) / 24.0;
        Self {
            jd_utc: calendar_to_jd(year, month, day_frac),
        }
    }

    /// The underlying UTC Julian Date.
    pub const fn jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// This instant offset by a (possibly fractional, possibly negative)
    /// number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    /// This instant offset by a number of seconds.
    pub fn add_seconds(self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd_utc - earlier.jd_utc
    }

    /// Signed number of seconds from `earlier` to `self`.
    pub fn seconds_since(self, earlier: Instant) -> f64 {
        self.days_since(earlier) * SECONDS_PER_DAY
    }

    /// Weekday of the civil day containing this instant.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jd(self.jd_utc)
    }

    /// Gregorian calendar components `(year, month, day, hour, minute, second)`.
    pub fn calendar(self) -> (i32, u32, u32, u32, u32, f64) {
        let (year, month, day_frac) = jd_to_calendar(self.jd_utc);
        let day = day_frac.floor();
        let mut rem = (day_frac - day) * 24.0;
        let hour = rem.floor();
        rem = (rem - hour) * 60.0;
        let minute = rem.floor();
        let second = (rem - minute) * 60.0;
        (year, month, day as u32, hour as u32, minute as u32, second)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (year, month, day, hour, minute, second) = self.calendar();
        // Truncate to milliseconds so rounding never displays ":60".
        let ms = (second * 1000.0).floor() / 1000.0;
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{ms:06.3}Z"
        )
    }
}
