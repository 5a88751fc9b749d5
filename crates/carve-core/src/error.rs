use glam::I64Vec3;
use thiserror::Error;

/// Errors raised through the extent contract.
///
/// Out-of-domain addresses are never errors — reads fall back to air and
/// writes report `false`. `Err` is reserved for malformed payloads and
/// contract misuse.
#[derive(Debug, Error)]
pub enum ExtentError {
    #[error("region has degenerate dimensions {dimensions:?}")]
    DegenerateRegion { dimensions: I64Vec3 },

    #[error("buffer volume of {volume} cells exceeds addressable memory")]
    VolumeTooLarge { volume: u128 },

    #[error("invalid block data for id {id}: {reason}")]
    InvalidBlock { id: u16, reason: String },

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
