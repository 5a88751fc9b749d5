use std::cell::RefCell;
use std::rc::Weak;

use carve_core::{EntityState, ExtentError, Location};
use carve_extent::Entity;

/// What the clipboard actually owns per captured entity.
#[derive(Debug, Clone)]
pub(crate) struct EntityRecord {
    pub id: u64,
    pub location: Location,
    pub state: EntityState,
}

/// Handle to an entity captured in a [`crate::Clipboard`].
///
/// Carries its own copy of the captured location and state plus a weak
/// back-reference to the owning list, used solely for self-removal. The
/// clipboard owns the records: dropping handles never drops entities, and a
/// handle that outlives its clipboard degrades to a `remove()` that reports
/// `false`.
#[derive(Debug, Clone)]
pub struct ClipboardEntity {
    id: u64,
    location: Location,
    state: EntityState,
    owner: Weak<RefCell<Vec<EntityRecord>>>,
}

impl ClipboardEntity {
    pub(crate) fn new(record: &EntityRecord, owner: Weak<RefCell<Vec<EntityRecord>>>) -> Self {
        Self {
            id: record.id,
            location: record.location,
            state: record.state.clone(),
            owner,
        }
    }
}

impl Entity for ClipboardEntity {
    fn location(&self) -> Location {
        self.location
    }

    /// Clipboard entities are static captures, so the state is always here.
    fn state(&self) -> Result<EntityState, ExtentError> {
        Ok(self.state.clone())
    }

    fn remove(&self) -> bool {
        let Some(owner) = self.owner.upgrade() else {
            return false;
        };
        let mut records = owner.borrow_mut();
        let before = records.len();
        records.retain(|record| record.id != self.id);
        records.len() != before
    }
}
