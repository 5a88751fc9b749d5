pub mod entity;
pub mod operation;

pub use entity::Entity;
pub use operation::{complete, resume_budgeted, Operation, Progress};

use carve_core::{Block, BlockVector, EntityState, ExtentError, Location};

/// The uniform block-addressable read/write/commit contract.
///
/// Everything that holds blocks — a live world, a clipboard, a decorator
/// stage wrapped around either — exposes this one trait. Decorators compose
/// by owning another `Extent` (the trait is object safe, so `Box<dyn Extent>`
/// and `&mut dyn Extent` both work) and forwarding calls down the stack.
pub trait Extent {
    /// Read the block at `position`.
    ///
    /// Total over all positions: anywhere this extent does not cover reads
    /// back as air, never as an error.
    fn block(&self, position: BlockVector) -> Block;

    /// Read a block when the caller may not need full fidelity.
    ///
    /// Implementations may skip expensive extra-data lookups here, but the
    /// fields both reads guarantee must agree with [`Extent::block`].
    fn lazy_block(&self, position: BlockVector) -> Block {
        self.block(position)
    }

    /// Store `block` at `position`.
    ///
    /// `Ok(true)` if the position was inside the writable domain, `Ok(false)`
    /// for a silent out-of-domain no-op. `Err` is reserved for malformed
    /// payloads on validating backends; an address miss is never an error.
    fn set_block(&mut self, position: BlockVector, block: Block) -> Result<bool, ExtentError>;

    /// Snapshot of the entities this extent holds.
    ///
    /// Never a live view: mutating the returned vector does not touch the
    /// extent. The handles themselves stay usable after the snapshot is
    /// dropped.
    fn entities(&self) -> Vec<Box<dyn Entity>>;

    /// Capture a new entity, if this extent stores entities at all.
    fn create_entity(&mut self, location: Location, state: EntityState) -> Option<Box<dyn Entity>> {
        let _ = (location, state);
        None
    }

    /// Finish any staged work.
    ///
    /// `None` means nothing is pending. `Some(op)` hands the caller a unit of
    /// deferred work to drive (see [`operation`]); an extent never blocks the
    /// calling thread on its own finalization.
    fn commit(&mut self) -> Option<Box<dyn Operation>> {
        None
    }
}
