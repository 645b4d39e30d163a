//! Types for the angular aspect matcher.

use astraea_core::{Body, normalize_deg};

/// The classical aspect shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// Canonical separation angle in degrees.
    pub const fn canonical_angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the aspect table: a shape, its angle, and its allowed orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDef {
    pub kind: AspectKind,
    /// Exact separation in degrees, within [0, 180].
    pub angle_deg: f64,
    /// Maximum deviation from the exact angle for a match, degrees.
    pub orb_deg: f64,
}

/// The aspect/orb table the matcher runs against.
///
/// Policy constants, not derived values: the default carries the
/// traditional six aspects with their conventional orbs. The table is
/// explicit configuration so tests (or stricter callers) can substitute
/// alternate orbs.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectTable {
    pub entries: Vec<AspectDef>,
}

impl Default for AspectTable {
    fn default() -> Self {
        let orbs = [
            (AspectKind::Conjunction, 8.0),
            (AspectKind::Sextile, 6.0),
            (AspectKind::Square, 8.0),
            (AspectKind::Trine, 8.0),
            (AspectKind::Quincunx, 3.0),
            (AspectKind::Opposition, 8.0),
        ];
        Self {
            entries: orbs
                .into_iter()
                .map(|(kind, orb_deg)| AspectDef {
                    kind,
                    angle_deg: kind.canonical_angle_deg(),
                    orb_deg,
                })
                .collect(),
        }
    }
}

impl AspectTable {
    /// Validate entry ranges.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        for entry in &self.entries {
            if !entry.angle_deg.is_finite() || !(0.0..=180.0).contains(&entry.angle_deg) {
                return Err("aspect angle must be within [0, 180] degrees");
            }
            if !entry.orb_deg.is_finite() || entry.orb_deg < 0.0 {
                return Err("aspect orb must be non-negative");
            }
        }
        Ok(())
    }
}

/// The chart-specific angular reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartAngle {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
    Vertex,
}

impl ChartAngle {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
            Self::Descendant => "Descendant",
            Self::ImumCoeli => "Imum Coeli",
            Self::Vertex => "Vertex",
        }
    }
}

impl std::fmt::Display for ChartAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed angular point with its ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularPoint {
    pub angle: ChartAngle,
    /// Normalized to [0, 360) on construction.
    pub longitude_deg: f64,
}

impl AngularPoint {
    /// New point with the longitude normalized to [0, 360).
    pub fn new(angle: ChartAngle, longitude_deg: f64) -> Self {
        Self {
            angle,
            longitude_deg: normalize_deg(longitude_deg),
        }
    }

    /// The Descendant opposite a given Ascendant.
    pub fn descendant_of(ascendant_deg: f64) -> Self {
        Self::new(ChartAngle::Descendant, ascendant_deg + 180.0)
    }

    /// The Imum Coeli opposite a given Midheaven.
    pub fn imum_coeli_of(midheaven_deg: f64) -> Self {
        Self::new(ChartAngle::ImumCoeli, midheaven_deg + 180.0)
    }
}

/// The four primary chart axes derived from the Ascendant and Midheaven.
pub fn chart_axes(ascendant_deg: f64, midheaven_deg: f64) -> [AngularPoint; 4] {
    [
        AngularPoint::new(ChartAngle::Ascendant, ascendant_deg),
        AngularPoint::new(ChartAngle::Midheaven, midheaven_deg),
        AngularPoint::descendant_of(ascendant_deg),
        AngularPoint::imum_coeli_of(midheaven_deg),
    ]
}

/// A matched (body, chart angle, aspect) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularAspect {
    pub body: Body,
    pub angle: ChartAngle,
    pub kind: AspectKind,
    /// Deviation from the exact aspect angle, degrees, always >= 0.
    /// The matcher's sort key: tightest aspects first.
    pub orb_deg: f64,
}
