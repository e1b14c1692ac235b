use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_cube_min_max() {
    let cube = Cube::new(Point::new(2.0, 3.0, 4.0), 1.0);
    assert_eq!(cube.min(), Point::new(1.0, 2.0, 3.0));
    assert_eq!(cube.max(), Point::new(3.0, 4.0, 5.0));
}

#[test]
fn test_child_index_bits() {
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 100.0);
    assert_eq!(cube.child_index(&Point::new(1.0, 1.0, 1.0)), 0);
    assert_eq!(cube.child_index(&Point::new(-1.0, 1.0, 1.0)), 1);
    assert_eq!(cube.child_index(&Point::new(1.0, -1.0, 1.0)), 2);
    assert_eq!(cube.child_index(&Point::new(1.0, 1.0, -1.0)), 4);
    assert_eq!(cube.child_index(&Point::new(-1.0, -1.0, -1.0)), 7);
    // The center itself belongs to the all-positive child
    assert_eq!(cube.child_index(&Point::new(0.0, 0.0, 0.0)), 0);
}

#[test]
fn test_child_cubes() {
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 100.0);
    assert_eq!(cube.child(0), Cube::new(Point::new(50.0, 50.0, 50.0), 50.0));
    assert_eq!(cube.child(7), Cube::new(Point::new(-50.0, -50.0, -50.0), 50.0));
    assert_eq!(cube.child(5), Cube::new(Point::new(-50.0, 50.0, -50.0), 50.0));
}

#[test]
fn test_child_contains_routed_point() {
    let mut rng = StdRng::seed_from_u64(7);
    let cube = Cube::new(Point::new(10.0, -20.0, 5.0), 64.0);
    for _ in 0..1000 {
        let point = cube.get_random_point_inside(&mut rng);
        let child = cube.child(cube.child_index(&point));
        assert!(child.contains_point(&point), "{:?} not in {:?}", point, child);
    }
}

#[test]
fn test_distance_sq_to_point() {
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 1.0);
    assert_eq!(cube.distance_sq_to_point(&Point::new(0.5, 0.5, 0.5)), 0.0);
    assert_eq!(cube.distance_sq_to_point(&Point::new(3.0, 0.0, 0.0)), 4.0);
    assert_eq!(cube.distance_sq_to_point(&Point::new(0.0, -3.0, 0.0)), 4.0);
    assert_eq!(cube.distance_sq_to_point(&Point::new(0.0, 0.0, 4.0)), 9.0);
    assert_eq!(cube.distance_sq_to_point(&Point::new(2.0, 2.0, 2.0)), 3.0);
}

#[test]
fn test_sphere_cube_intersection_on_z() {
    // Only the Z axis separates the sphere from the cube
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 1.0);
    assert!(!cube.intersects_sphere(&Sphere::new(Point::new(0.0, 0.0, 5.0), 3.0)));
    assert!(cube.intersects_sphere(&Sphere::new(Point::new(0.0, 0.0, 5.0), 4.5)));
    assert!(!cube.intersects_sphere(&Sphere::new(Point::new(0.0, 0.0, -5.0), 3.0)));
}

#[test]
fn test_sphere_boundary_is_excluded() {
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 1.0);
    let touching = Sphere::new(Point::new(3.0, 0.0, 0.0), 2.0);
    assert!(!cube.intersects_sphere(&touching));
    assert!(!touching.contains_point(&Point::new(1.0, 0.0, 0.0)));
    assert!(touching.contains_point(&Point::new(1.5, 0.0, 0.0)));
}

#[test]
fn test_random_point_inside() {
    let mut rng = StdRng::seed_from_u64(42);
    let cube = Cube::new(Point::new(0.0, 0.0, 0.0), 10.0);
    for _ in 0..100 {
        let point = cube.get_random_point_inside(&mut rng);
        assert!(cube.contains_point(&point));
    }
}

#[test]
fn test_degenerate_cube_random_point() {
    let mut rng = StdRng::seed_from_u64(1);
    let cube = Cube::new(Point::new(1.0, 2.0, 3.0), 0.0);
    assert_eq!(cube.get_random_point_inside(&mut rng), Point::new(1.0, 2.0, 3.0));
}
