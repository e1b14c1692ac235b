//! Concurrent bounded-depth octree of movable point entities.
//!
//! The upper `pregen_levels` of the tree are built once at construction and
//! never change, so they are traversed without locking. Everything below is
//! created on demand behind one mutex per octant, and every leaf guards its
//! entity table with its own mutex. A mutation never holds more than one node
//! lock at a time while descending, and the reverse index (`owner_map`) is
//! always locked before a leaf, never after.
//!
//! Finds do not take the reverse index lock, and each leaf is read under its
//! own lock only. A move is atomic with respect to other mutations but not to
//! finds: a find running next to a `set` that moves an entity between leaves
//! may miss the entity, or report it twice when the old leaf is scanned before
//! the detach and the new leaf after the attach.
//!
//! Entities placed outside the root cube are routed to the nearest boundary
//! child. Their placement is unspecified and callers are expected to keep
//! positions inside the bounds given at construction.

use crate::error::{OctreeError, OctreeResult};
use common::shapes::{Cube, Point, Sphere};
use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, trace};

mod api;
mod config;
mod find;
mod node;
mod update;

pub use config::Config;
pub use find::{CancelToken, FindStream};
use node::{Child, Leaf, Octant};

/// Identifier stored in the tree. Any hashable value that can be shared
/// across the find workers qualifies.
pub trait EntityId: Eq + Hash + Clone + Send + Sync + 'static {}

impl<T> EntityId for T where T: Eq + Hash + Clone + Send + Sync + 'static {}

pub(crate) type OwnerMap<E> = FxHashMap<E, Arc<Leaf<E>>>;

pub struct Octree<E: EntityId> {
    root: Arc<Octant<E>>,
    total_levels: u8,
    pregen_levels: u8,
    owner_map: Mutex<OwnerMap<E>>,
    find_pool: rayon::ThreadPool,
}
