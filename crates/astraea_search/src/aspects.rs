//! Angular aspect matcher.
//!
//! Compares body longitudes against fixed chart angles using circular
//! separation folded to [0, 180], so 350° and 10° sit 20° apart and a
//! 170°/190° pair reads as a near-opposition. A pair matches an aspect
//! when its separation deviates from the aspect's exact angle by no more
//! than the configured orb.

use astraea_core::{Body, circular_separation_deg};

use crate::aspects_types::{AngularAspect, AngularPoint, AspectTable};
use crate::error::SearchError;

/// Match every body against every angular point under `table`.
///
/// A single pair can satisfy several table entries; each match is
/// reported separately. Results are sorted by orb ascending (tightest
/// first); equal orbs keep the body-major, point-minor input order.
pub fn match_aspects(
    body_longitudes: &[(Body, f64)],
    points: &[AngularPoint],
    table: &AspectTable,
) -> Result<Vec<AngularAspect>, SearchError> {
    table.validate().map_err(SearchError::InvalidConfig)?;

    let mut matches = Vec::new();
    for &(body, body_lon) in body_longitudes {
        for point in points {
            let separation = circular_separation_deg(body_lon, point.longitude_deg);
            for entry in &table.entries {
                let orb = (separation - entry.angle_deg).abs();
                if orb <= entry.orb_deg {
                    matches.push(AngularAspect {
                        body,
                        angle: point.angle,
                        kind: entry.kind,
                        orb_deg: orb,
                    });
                }
            }
        }
    }

    matches.sort_by(|a, b| a.orb_deg.total_cmp(&b.orb_deg));
    Ok(matches)
}
