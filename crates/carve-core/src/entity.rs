use crate::types::{containing_cell, BlockVector};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A continuous position plus facing, as captured for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    /// Location at `position` facing the default direction.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// The block cell containing this location.
    pub fn block_position(&self) -> BlockVector {
        containing_cell(self.position)
    }
}

/// Captured entity state: a type tag plus an optional structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub kind: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl EntityState {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn test_block_position_floors() {
        let loc = Location::at(DVec3::new(3.7, -0.2, 10.0));
        assert_eq!(loc.block_position(), IVec3::new(3, -1, 10));
    }
}
