use super::*;

impl<E: EntityId> Octree<E> {
    /// Walks from the root to the leaf owning `position`, creating missing
    /// octants and the leaf on the way. Each node lock is dropped before the
    /// next one is taken.
    pub(crate) fn locate_or_create_leaf(&self, position: &Point) -> Arc<Leaf<E>> {
        let mut octant = Arc::clone(&self.root);
        loop {
            let index = octant.cube.child_index(position);
            match octant.child_or_create(index, self.total_levels) {
                Child::Leaf(leaf) => return leaf,
                Child::Octant(child) => octant = child,
            }
        }
    }

    // Caller holds the owner map lock.
    pub(crate) fn detach(owner_map: &mut OwnerMap<E>, entity: &E) -> Option<Point> {
        let leaf = owner_map.remove(entity)?;
        leaf.remove(entity)
    }

    // Caller holds the owner map lock.
    pub(crate) fn attach(
        owner_map: &mut OwnerMap<E>,
        leaf: Arc<Leaf<E>>,
        entity: E,
        position: Point,
    ) {
        leaf.insert(entity.clone(), position);
        owner_map.insert(entity, leaf);
    }
}
