use crate::types::BlockVector;
use glam::{I64Vec3, IVec3};
use serde::{Deserialize, Serialize};

/// A bounded cuboid volume: inclusive minimum and maximum corners.
///
/// Invariant: `min <= max` component-wise, upheld by construction — `new`
/// accepts any two opposing corners and normalizes them per component.
///
/// `Region` is a plain value. Components that hold one and expose it to a
/// caller return an owned copy, so a caller can never alias a buffer's
/// internal bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    min: BlockVector,
    max: BlockVector,
}

impl Region {
    pub fn new(a: BlockVector, b: BlockVector) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive lower corner.
    pub fn minimum_point(&self) -> BlockVector {
        self.min
    }

    /// Inclusive upper corner.
    pub fn maximum_point(&self) -> BlockVector {
        self.max
    }

    pub fn contains(&self, position: BlockVector) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }

    /// Size along each axis: `max - min + (1, 1, 1)`. Every component is
    /// at least 1 by the corner invariant. Computed in `i64` so an axis
    /// spanning more than `i32::MAX` cells reports exactly instead of
    /// overflowing.
    pub fn dimensions(&self) -> I64Vec3 {
        I64Vec3::new(
            self.max.x as i64 - self.min.x as i64 + 1,
            self.max.y as i64 - self.min.y as i64 + 1,
            self.max.z as i64 - self.min.z as i64 + 1,
        )
    }

    /// Number of cells in the region. Computed in wide arithmetic so the
    /// result is exact even for spans a dense buffer could never hold.
    pub fn volume(&self) -> u128 {
        let d = self.dimensions();
        d.x as u128 * d.y as u128 * d.z as u128
    }

    /// Iterate every contained cell, x outermost, z innermost.
    pub fn iter(&self) -> impl Iterator<Item = BlockVector> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y)
                .flat_map(move |y| (min.z..=max.z).map(move |z| IVec3::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let region = Region::new(IVec3::new(5, -2, 9), IVec3::new(-1, 4, 3));
        assert_eq!(region.minimum_point(), IVec3::new(-1, -2, 3));
        assert_eq!(region.maximum_point(), IVec3::new(5, 4, 9));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let region = Region::new(IVec3::new(0, 0, 0), IVec3::new(2, 2, 2));
        assert!(region.contains(IVec3::new(0, 0, 0)));
        assert!(region.contains(IVec3::new(2, 2, 2)));
        assert!(region.contains(IVec3::new(1, 2, 0)));
        assert!(!region.contains(IVec3::new(3, 0, 0)));
        assert!(!region.contains(IVec3::new(0, -1, 0)));
    }

    #[test]
    fn test_dimensions_and_volume() {
        let region = Region::new(IVec3::new(-1, 0, 2), IVec3::new(1, 0, 4));
        assert_eq!(region.dimensions(), I64Vec3::new(3, 1, 3));
        assert_eq!(region.volume(), 9);

        let single = Region::new(IVec3::new(7, 7, 7), IVec3::new(7, 7, 7));
        assert_eq!(single.dimensions(), I64Vec3::ONE);
        assert_eq!(single.volume(), 1);
    }

    #[test]
    fn test_full_range_span_reports_exact_dimensions() {
        // Spans wider than i32 must not overflow component arithmetic.
        let region = Region::new(IVec3::splat(i32::MIN), IVec3::splat(i32::MAX));
        assert_eq!(region.dimensions(), I64Vec3::splat(1 << 32));
        assert_eq!(region.volume(), 1u128 << 96);
    }

    #[test]
    fn test_iter_covers_every_cell_once() {
        let region = Region::new(IVec3::new(0, 0, 0), IVec3::new(1, 2, 1));
        let cells: Vec<_> = region.iter().collect();
        assert_eq!(cells.len() as u128, region.volume());
        assert_eq!(cells.first(), Some(&IVec3::new(0, 0, 0)));
        assert_eq!(cells.last(), Some(&IVec3::new(1, 2, 1)));
        for cell in &cells {
            assert!(region.contains(*cell));
        }
    }

    #[test]
    fn test_clone_is_independent_value() {
        let region = Region::new(IVec3::ZERO, IVec3::new(3, 3, 3));
        let copy = region.clone();
        assert_eq!(region, copy);
        drop(copy);
        assert_eq!(region.maximum_point(), IVec3::new(3, 3, 3));
    }
}
