use glam::{DVec3, IVec3};

/// Integer cell address in world space. One unit = one block.
pub type BlockVector = IVec3;

/// Map a continuous position to the cell that contains it.
///
/// Floor semantics, so negative coordinates truncate toward negative
/// infinity: (-0.5, 0.0, 2.9) lives in cell (-1, 0, 2).
pub fn containing_cell(position: DVec3) -> BlockVector {
    IVec3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_cell_positive() {
        assert_eq!(
            containing_cell(DVec3::new(1.2, 0.0, 2.9)),
            IVec3::new(1, 0, 2)
        );
    }

    #[test]
    fn test_containing_cell_negative_floors() {
        assert_eq!(
            containing_cell(DVec3::new(-0.5, -1.0, -2.1)),
            IVec3::new(-1, -1, -3)
        );
    }
}
