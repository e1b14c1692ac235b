pub mod error;
pub mod octree;

pub use common::shapes;
pub use error::{OctreeError, OctreeResult};
