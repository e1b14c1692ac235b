use super::EntityId;
use common::shapes::{Cube, Point, Sphere};
use fxhash::FxHashMap;
use parking_lot::Mutex;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::trace;

#[derive(Clone)]
pub(crate) enum Child<E: EntityId> {
    Octant(Arc<Octant<E>>),
    Leaf(Arc<Leaf<E>>),
}

impl<E: EntityId> Child<E> {
    pub(crate) fn cube(&self) -> &Cube {
        match self {
            Child::Octant(octant) => &octant.cube,
            Child::Leaf(leaf) => &leaf.cube,
        }
    }
}

pub(crate) type ChildTargets<E> = SmallVec<[Child<E>; 8]>;

pub(crate) enum Children<E: EntityId> {
    // Pre-generated, every slot filled, never written again.
    Fixed(Box<[Child<E>; Cube::CHILD_COUNT]>),
    // Slots fill in on first use and are only written with the lock held.
    Lazy(Mutex<[Option<Child<E>>; Cube::CHILD_COUNT]>),
}

pub(crate) struct Octant<E: EntityId> {
    pub(crate) cube: Cube,
    pub(crate) level: u8,
    children: Children<E>,
}

impl<E: EntityId> Octant<E> {
    pub(crate) fn pregenerated(cube: Cube, level: u8, total_levels: u8, pregen_levels: u8) -> Self {
        let children = std::array::from_fn(|index| {
            let child_cube = cube.child(index);
            if level == total_levels {
                Child::Leaf(Arc::new(Leaf::new(child_cube)))
            } else if level < pregen_levels {
                Child::Octant(Arc::new(Octant::pregenerated(
                    child_cube,
                    level + 1,
                    total_levels,
                    pregen_levels,
                )))
            } else {
                Child::Octant(Arc::new(Octant::lazy(child_cube, level + 1)))
            }
        });
        Self {
            cube,
            level,
            children: Children::Fixed(Box::new(children)),
        }
    }

    pub(crate) fn lazy(cube: Cube, level: u8) -> Self {
        Self {
            cube,
            level,
            children: Children::Lazy(Mutex::new(Default::default())),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        matches!(self.children, Children::Lazy(_))
    }

    /// Returns the child at `index`, installing a new one if the slot is empty.
    /// The node lock, if any, is released before returning.
    pub(crate) fn child_or_create(&self, index: usize, total_levels: u8) -> Child<E> {
        match &self.children {
            Children::Fixed(children) => children[index].clone(),
            Children::Lazy(slots) => {
                let mut slots = slots.lock();
                slots[index]
                    .get_or_insert_with(|| self.create_child(index, total_levels))
                    .clone()
            }
        }
    }

    fn create_child(&self, index: usize, total_levels: u8) -> Child<E> {
        let cube = self.cube.child(index);
        trace!(level = self.level + 1, index, "creating node");
        if self.level == total_levels {
            Child::Leaf(Arc::new(Leaf::new(cube)))
        } else {
            Child::Octant(Arc::new(Octant::lazy(cube, self.level + 1)))
        }
    }

    /// Collects the existing children whose cube can hold a point strictly
    /// inside `sphere`. The node lock is held only while the slots are read.
    pub(crate) fn intersecting_children(&self, sphere: &Sphere) -> ChildTargets<E> {
        let mut targets = ChildTargets::new();
        let mut collect = |child: &Child<E>| {
            if child.cube().intersects_sphere(sphere) {
                targets.push(child.clone());
            }
        };
        match &self.children {
            Children::Fixed(children) => children.iter().for_each(&mut collect),
            Children::Lazy(slots) => slots.lock().iter().flatten().for_each(&mut collect),
        }
        targets
    }

    #[cfg(test)]
    pub(crate) fn child(&self, index: usize) -> Option<Child<E>> {
        match &self.children {
            Children::Fixed(children) => Some(children[index].clone()),
            Children::Lazy(slots) => slots.lock()[index].clone(),
        }
    }
}

pub(crate) struct Leaf<E: EntityId> {
    pub(crate) cube: Cube,
    entities: Mutex<FxHashMap<E, Point>>,
}

impl<E: EntityId> Leaf<E> {
    pub(crate) fn new(cube: Cube) -> Self {
        Self {
            cube,
            entities: Mutex::new(FxHashMap::default()),
        }
    }

    pub(crate) fn position(&self, entity: &E) -> Option<Point> {
        self.entities.lock().get(entity).copied()
    }

    pub(crate) fn insert(&self, entity: E, position: Point) {
        self.entities.lock().insert(entity, position);
    }

    pub(crate) fn remove(&self, entity: &E) -> Option<Point> {
        self.entities.lock().remove(entity)
    }

    /// Calls `f` for every entity strictly inside `sphere` while holding the
    /// leaf lock. Stops early once `f` returns false.
    pub(crate) fn for_each_within<F>(&self, sphere: &Sphere, mut f: F)
    where
        F: FnMut(&E) -> bool,
    {
        let entities = self.entities.lock();
        for (entity, position) in entities.iter() {
            if sphere.contains_point(position) && !f(entity) {
                break;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entities.lock().len()
    }
}
