use super::*;

impl<E: EntityId> Octree<E> {
    /// Builds a tree centered on `(x, y, z)` reaching `size` out from the
    /// center along every axis.
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        size: f64,
        total_levels: u8,
        pregen_levels: u8,
    ) -> OctreeResult<Self> {
        Self::new_with_config(
            Point::new(x, y, z),
            size,
            Config {
                total_levels,
                pregen_levels,
                ..Config::default()
            },
        )
    }

    pub fn new_with_config(center: Point, size: f64, config: Config) -> OctreeResult<Self> {
        if config.pregen_levels > config.total_levels {
            return Err(OctreeError::PregenExceedsTotal {
                pregen_levels: config.pregen_levels,
                total_levels: config.total_levels,
            });
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(OctreeError::InvalidSize { size });
        }
        if !center.is_finite() {
            return Err(OctreeError::InvalidPosition {
                x: center.x,
                y: center.y,
                z: center.z,
            });
        }

        let find_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.find_threads)
            .thread_name(|index| format!("octree-find-{}", index))
            .build()
            .map_err(|err| OctreeError::ThreadPool {
                message: err.to_string(),
            })?;

        let root = Octant::pregenerated(
            Cube::new(center, size),
            0,
            config.total_levels,
            config.pregen_levels,
        );
        debug!(
            ?center,
            size,
            total_levels = config.total_levels,
            pregen_levels = config.pregen_levels,
            find_threads = find_pool.current_num_threads(),
            "octree created"
        );

        Ok(Octree {
            root: Arc::new(root),
            total_levels: config.total_levels,
            pregen_levels: config.pregen_levels,
            owner_map: Mutex::new(OwnerMap::default()),
            find_pool,
        })
    }

    /// Adds `entity` at `(x, y, z)` or moves it there if it is already stored.
    pub fn set(&self, entity: E, x: f64, y: f64, z: f64) -> OctreeResult<()> {
        let position = Point::new(x, y, z);
        if !position.is_finite() {
            return Err(OctreeError::InvalidPosition { x, y, z });
        }

        // Resolved before taking the owner map lock so descents of unrelated
        // sets run in parallel.
        let leaf = self.locate_or_create_leaf(&position);

        let mut owner_map = self.owner_map.lock();
        match Self::detach(&mut owner_map, &entity) {
            Some(previous) => trace!(?previous, ?position, "relocating entity"),
            None => trace!(?position, "inserting entity"),
        }
        Self::attach(&mut owner_map, leaf, entity, position);
        Ok(())
    }

    /// Removes `entity`, failing with [`OctreeError::NotFound`] if it is not
    /// stored. A failed removal changes nothing.
    pub fn remove(&self, entity: &E) -> OctreeResult<()> {
        let mut owner_map = self.owner_map.lock();
        match Self::detach(&mut owner_map, entity) {
            Some(position) => {
                trace!(?position, "removed entity");
                Ok(())
            }
            None => Err(OctreeError::NotFound),
        }
    }

    pub fn get_position(&self, entity: &E) -> Option<Point> {
        let owner_map = self.owner_map.lock();
        let leaf = owner_map.get(entity)?;
        leaf.position(entity)
    }

    pub fn contains(&self, entity: &E) -> bool {
        self.owner_map.lock().contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.owner_map.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Streams every entity strictly closer than `radius` to `(x, y, z)`.
    ///
    /// The query runs on the tree's find workers and is not isolated from
    /// concurrent mutations: an entity moved by a `set` while the query runs
    /// may be missing from the stream or appear in it twice. A radius that is
    /// not greater than zero matches nothing.
    pub fn find_stream(&self, x: f64, y: f64, z: f64, radius: f64) -> FindStream<E> {
        if !(radius > 0.0) {
            return FindStream::empty();
        }
        let sphere = Sphere::new(Point::new(x, y, z), radius);
        find::spawn_search(&self.find_pool, Arc::clone(&self.root), sphere)
    }

    /// Collects [`Octree::find_stream`]. Under concurrent moves the result can
    /// miss an entity or hold it twice, so deduplicate if that matters.
    pub fn find_all(&self, x: f64, y: f64, z: f64, radius: f64) -> Vec<E> {
        self.find_stream(x, y, z, radius).collect()
    }

    pub fn bounds(&self) -> Cube {
        self.root.cube
    }

    pub fn center(&self) -> Point {
        self.root.cube.center
    }

    pub fn size(&self) -> f64 {
        self.root.cube.half
    }

    pub fn total_levels(&self) -> u8 {
        self.total_levels
    }

    pub fn pregen_levels(&self) -> u8 {
        self.pregen_levels
    }
}
