use carve_core::{EntityState, ExtentError, Location};

/// A handle to an entity held by some extent.
///
/// The extent owns the entity list; a handle only knows its own identity and
/// how to ask for its removal. That keeps the relationship a back-reference,
/// not a cycle: dropping every handle never drops an entity, and removal goes
/// through the owner.
pub trait Entity {
    /// Where the entity was captured.
    fn location(&self) -> Location;

    /// The captured state, if this entity carries static state.
    ///
    /// Extents that only know live entities fail fast with
    /// [`ExtentError::Unsupported`] instead of inventing a snapshot.
    fn state(&self) -> Result<EntityState, ExtentError>;

    /// Detach this entity from its owner.
    ///
    /// `true` if the entity was still attached. Removing twice, or removing
    /// after the owner itself is gone, is a safe no-op reporting `false`.
    fn remove(&self) -> bool;
}
