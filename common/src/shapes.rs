use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// Axis-aligned cube stored as a center and a half-extent.
///
/// Children are addressed by a 3-bit code where bit 0 is set when a point lies
/// below the center on X, bit 1 on Y and bit 2 on Z. A set bit places the child
/// on the negative side of that axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cube {
    pub center: Point,
    pub half: f64,
}

impl Cube {
    pub const CHILD_COUNT: usize = 8;

    pub fn new(center: Point, half: f64) -> Self {
        Self { center, half }
    }

    pub fn min(&self) -> Point {
        Point::new(
            self.center.x - self.half,
            self.center.y - self.half,
            self.center.z - self.half,
        )
    }

    pub fn max(&self) -> Point {
        Point::new(
            self.center.x + self.half,
            self.center.y + self.half,
            self.center.z + self.half,
        )
    }

    pub fn child_index(&self, point: &Point) -> usize {
        let mut index = 0;
        if point.x < self.center.x {
            index |= 1;
        }
        if point.y < self.center.y {
            index |= 2;
        }
        if point.z < self.center.z {
            index |= 4;
        }
        index
    }

    pub fn child(&self, index: usize) -> Cube {
        let half = self.half / 2.0;
        let offset = |bit: usize| if index & bit != 0 { -half } else { half };
        Cube {
            center: Point::new(
                self.center.x + offset(1),
                self.center.y + offset(2),
                self.center.z + offset(4),
            ),
            half,
        }
    }

    // Squared distance from the point to the closest point of the cube, zero inside.
    pub fn distance_sq_to_point(&self, point: &Point) -> f64 {
        let min = self.min();
        let max = self.max();
        let axis = |p: f64, lo: f64, hi: f64| {
            if p < lo {
                lo - p
            } else if p > hi {
                p - hi
            } else {
                0.0
            }
        };
        let dx = axis(point.x, min.x, max.x);
        let dy = axis(point.y, min.y, max.y);
        let dz = axis(point.z, min.z, max.z);
        dx * dx + dy * dy + dz * dz
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.distance_sq_to_point(&sphere.center) < sphere.radius_sq
    }

    pub fn get_random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        let min = self.min();
        let max = self.max();
        Point::new(
            _safe_randf64(rng, min.x, max.x),
            _safe_randf64(rng, min.y, max.y),
            _safe_randf64(rng, min.z, max.z),
        )
    }
}

/// Query sphere. Only the squared radius is kept since every test against it
/// compares squared distances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius_sq: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius_sq: radius * radius,
        }
    }

    // Strict: a point exactly on the surface is outside.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.center.distance_sq(point) < self.radius_sq
    }
}

fn _safe_randf64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}
