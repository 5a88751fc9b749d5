pub mod entity;

pub use entity::ClipboardEntity;

use std::cell::RefCell;
use std::rc::Rc;

use carve_core::{Block, BlockVector, EntityState, ExtentError, Location, Region};
use carve_extent::{Entity, Extent, Operation};
use glam::{I64Vec3, IVec3};

use entity::EntityRecord;

/// Cell count above which construction logs the dense-allocation warning.
const DENSE_WARN_CELLS: u128 = 1 << 24;

/// A bounded, dense, in-memory snapshot of blocks and entities.
///
/// Storage cost is proportional to region volume regardless of occupancy:
/// every cell is allocated, written or not. Built for single-writer,
/// single-session use — the entity list is `Rc`-backed, so a clipboard is
/// `!Send` and cannot wander across threads by accident.
pub struct Clipboard {
    region: Region,
    /// Paste anchor. Independent of the region and never validated against it.
    offset: BlockVector,
    /// Dense cell storage in x-major order; `None` means never written, which
    /// reads back as air. The length is the only record of the allocation
    /// size — dimensions are always derived from the region.
    blocks: Vec<Option<Block>>,
    entities: Rc<RefCell<Vec<EntityRecord>>>,
    next_entity_id: u64,
}

impl Clipboard {
    /// Create a clipboard sized to `region`.
    ///
    /// The region is taken by value, so the buffer's bounds are an
    /// independent copy of whatever the caller holds. Fails up front if the
    /// dimensions are degenerate or the dense volume cannot be addressed;
    /// a constructed clipboard never fails lazily on first use.
    pub fn new(region: Region) -> Result<Self, ExtentError> {
        let dims = region.dimensions();
        // Normalized regions cannot produce these, but the contract requires
        // the check at construction rather than on first access.
        if dims.x < 1 || dims.y < 1 || dims.z < 1 {
            return Err(ExtentError::DegenerateRegion { dimensions: dims });
        }

        let volume = region.volume();
        let cells =
            usize::try_from(volume).map_err(|_| ExtentError::VolumeTooLarge { volume })?;

        if volume >= DENSE_WARN_CELLS {
            log::warn!(
                "allocating dense clipboard of {} cells ({}x{}x{}); cost is per-cell regardless of occupancy",
                volume,
                dims.x,
                dims.y,
                dims.z
            );
        } else {
            log::debug!(
                "allocating dense clipboard of {} cells ({}x{}x{})",
                volume,
                dims.x,
                dims.y,
                dims.z
            );
        }

        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(cells)
            .map_err(|_| ExtentError::VolumeTooLarge { volume })?;
        blocks.resize(cells, None);

        Ok(Self {
            region,
            offset: IVec3::ZERO,
            blocks,
            entities: Rc::new(RefCell::new(Vec::new())),
            next_entity_id: 0,
        })
    }

    /// The bounding region, as an independent copy. Two calls return equal
    /// values that share no storage with the buffer's internal bounds.
    pub fn region(&self) -> Region {
        self.region.clone()
    }

    /// Size along each axis, derived from the region. Minimum (1, 1, 1).
    pub fn dimensions(&self) -> I64Vec3 {
        self.region.dimensions()
    }

    /// The paste anchor.
    pub fn offset(&self) -> BlockVector {
        self.offset
    }

    /// Set the paste anchor. Deliberately unchecked against the region: the
    /// anchor steers later paste placement, it is not a cell address.
    pub fn set_offset(&mut self, offset: BlockVector) {
        self.offset = offset;
    }

    /// Flat index of a contained position. Callers check containment first.
    fn index(&self, position: BlockVector) -> usize {
        let local = position - self.region.minimum_point();
        let dims = self.region.dimensions();
        (local.x as usize * dims.y as usize + local.y as usize) * dims.z as usize
            + local.z as usize
    }
}

impl Extent for Clipboard {
    fn block(&self, position: BlockVector) -> Block {
        if self.region.contains(position) {
            if let Some(block) = &self.blocks[self.index(position)] {
                return block.clone();
            }
        }
        Block::air()
    }

    fn set_block(&mut self, position: BlockVector, block: Block) -> Result<bool, ExtentError> {
        if self.region.contains(position) {
            let index = self.index(position);
            // Stored by value: the caller keeps no handle into the buffer.
            self.blocks[index] = Some(block);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn entities(&self) -> Vec<Box<dyn Entity>> {
        self.entities
            .borrow()
            .iter()
            .map(|record| {
                Box::new(ClipboardEntity::new(record, Rc::downgrade(&self.entities)))
                    as Box<dyn Entity>
            })
            .collect()
    }

    fn create_entity(&mut self, location: Location, state: EntityState) -> Option<Box<dyn Entity>> {
        let record = EntityRecord {
            id: self.next_entity_id,
            location,
            state,
        };
        self.next_entity_id += 1;
        let handle = ClipboardEntity::new(&record, Rc::downgrade(&self.entities));
        self.entities.borrow_mut().push(record);
        Some(Box::new(handle))
    }

    /// A clipboard is a terminal in-memory sink: writes land immediately,
    /// so there is never deferred work to hand back.
    fn commit(&mut self) -> Option<Box<dyn Operation>> {
        None
    }
}
