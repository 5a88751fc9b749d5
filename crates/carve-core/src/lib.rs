pub mod block;
pub mod entity;
pub mod error;
pub mod region;
pub mod types;

pub use block::{Block, BlockId};
pub use entity::{EntityState, Location};
pub use error::ExtentError;
pub use region::Region;
pub use types::{containing_cell, BlockVector};
