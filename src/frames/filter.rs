use super::types::{FilterBounds, StabilityPoint};

/// Keeps the points of one frame that fall inside `bounds`, preserving
/// order. Pure; inverted bounds yield an empty result.
#[must_use]
pub fn apply_bounds(bounds: &FilterBounds, points: &[StabilityPoint]) -> Vec<StabilityPoint> {
    points
        .iter()
        .copied()
        .filter(|point| bounds.contains(point))
        .collect()
}
