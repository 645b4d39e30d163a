//! Ecliptic angle arithmetic and zodiac signs.
//!
//! All longitudes in the engine are geocentric ecliptic degrees. The three
//! helpers here are the only places circular wraparound is handled; every
//! consumer works with their normalized output.

/// Normalize an angle to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Wrap an angle difference to (-180, +180].
///
/// Used for signed daily motion: a raw difference of +359.9° is really
/// -0.1° of apparent motion.
pub fn wrap_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Unsigned circular separation between two longitudes, folded to [0, 180].
pub fn circular_separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let d = (normalize_deg(a_deg) - normalize_deg(b_deg)).abs();
    d.min(360.0 - d)
}

/// The twelve fixed 30° segments of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in ecliptic order from 0° Aries.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing the given ecliptic longitude.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let idx = (normalize_deg(longitude_deg) / 30.0) as usize % 12;
        Self::ALL[idx]
    }

    /// Index 0 (Aries) through 11 (Pisces).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Longitude of this sign's 0° cusp.
    pub fn cusp_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// Capitalized display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert!((normalize_deg(370.0) - 10.0).abs() < 1e-12);
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert_eq!(normalize_deg(360.0), 0.0);
    }

    #[test]
    fn pm180_wrap() {
        assert!((wrap_to_pm180(359.9) + 0.1).abs() < 1e-9);
        assert!((wrap_to_pm180(-359.9) - 0.1).abs() < 1e-9);
        assert_eq!(wrap_to_pm180(180.0), 180.0);
        assert_eq!(wrap_to_pm180(-180.0), 180.0);
    }

    #[test]
    fn separation_folds_to_half_circle() {
        assert!((circular_separation_deg(10.0, 100.0) - 90.0).abs() < 1e-12);
        assert!((circular_separation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((circular_separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert_eq!(circular_separation_deg(42.0, 42.0), 0.0);
    }

    #[test]
    fn separation_is_symmetric() {
        let d1 = circular_separation_deg(123.4, 321.0);
        let d2 = circular_separation_deg(321.0, 123.4);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.999), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-5.0), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_index_and_cusp() {
        assert_eq!(ZodiacSign::Capricorn.index(), 9);
        assert!((ZodiacSign::Capricorn.cusp_deg() - 270.0).abs() < 1e-12);
    }
}
