//! Procedural emblem mask.
//!
//! Classifies points of the unit square into the two tones of the nested
//! circle-and-dot emblem rendered on the scene's back wall. The radii,
//! centers and rule order encode one fixed pattern; they are not parameters.

use crate::geometry::Point2f;
use crate::lumo::*;

/// Tone of the emblem at a point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Region {
    /// The light tone, also everything outside the emblem disc.
    Light,

    /// The dark tone.
    Dark,
}

/// Returns true when `p` lies inside or on the circle at `c` with radius `r`.
///
/// * `p` - The point.
/// * `c` - The circle center.
/// * `r` - The circle radius.
pub fn inside(p: &Point2f, c: &Point2f, r: Float) -> bool {
    p.distance_squared(*c) <= r * r
}

/// Classifies a point of the unit square into its emblem tone.
///
/// The rules run in a fixed priority order and the first match wins: the
/// outer rim, then the small dots, then the large lobes, then the half-plane
/// split. The final rule pair is total, so every point classifies.
///
/// * `p` - The point.
pub fn classify(p: &Point2f) -> Region {
    use Region::{Dark, Light};

    let rules = [
        (!inside(p, &Point2f::new(0.50, 0.50), 0.5), Light),
        (!inside(p, &Point2f::new(0.50, 0.50), 0.495), Dark),
        (inside(p, &Point2f::new(0.50, 0.25), 0.08), Dark),
        (inside(p, &Point2f::new(0.50, 0.75), 0.08), Light),
        (inside(p, &Point2f::new(0.50, 0.25), 0.25), Light),
        (inside(p, &Point2f::new(0.50, 0.75), 0.25), Dark),
        (p.x < 0.5, Dark),
    ];

    rules
        .iter()
        .find_map(|&(hit, region)| if hit { Some(region) } else { None })
        .unwrap_or(Light)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
