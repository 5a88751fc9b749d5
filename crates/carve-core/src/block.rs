use serde::{Deserialize, Serialize};

/// Newtype for block type identifiers. 0 = air/empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    /// The universal empty value.
    pub const AIR: BlockId = BlockId(0);
}

/// A block value: type id, sub-type metadata, and optional structured extra
/// data (container contents and the like).
///
/// `Clone` is deep, including `extra`. Storage and callers never share an
/// instance: every read hands out a fresh copy and every write is stored by
/// value, so mutating one side can never reach the other.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(default)]
    pub data: u8,
    #[serde(default)]
    pub extra: Option<serde_json::Value>,
}

impl Block {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            data: 0,
            extra: None,
        }
    }

    pub fn with_data(id: BlockId, data: u8) -> Self {
        Self {
            id,
            data,
            extra: None,
        }
    }

    /// The empty cell value returned for unset or out-of-domain reads.
    pub fn air() -> Self {
        Self::new(BlockId::AIR)
    }

    pub fn is_air(&self) -> bool {
        self.id == BlockId::AIR
    }
}
