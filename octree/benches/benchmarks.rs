use criterion::{black_box, criterion_group, criterion_main, Criterion};
use octree::octree::Octree;
use octree::shapes::{Cube, Point};
use rand::prelude::*;

fn new_tree() -> Octree<u32> {
    Octree::new(0.0, 0.0, 0.0, 100.0, 6, 2).unwrap()
}

fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    let bounds = Cube::new(Point::new(0.0, 0.0, 0.0), 100.0);
    (0..count)
        .map(|_| bounds.get_random_point_inside(rng))
        .collect()
}

fn set_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let octree = new_tree();
    let bounds = octree.bounds();

    c.bench_function("octree_set", |b| {
        b.iter(|| {
            let point = bounds.get_random_point_inside(&mut rng);
            octree
                .set(black_box(rng.gen()), point.x, point.y, point.z)
                .unwrap();
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let octree = new_tree();
    let points = random_points(&mut rng, 1000);
    for (id, point) in points.iter().enumerate() {
        octree.set(id as u32, point.x, point.y, point.z).unwrap();
    }

    c.bench_function("octree_remove", |b| {
        b.iter(|| {
            let id = rng.gen_range(0..points.len()) as u32;
            let _ = octree.remove(black_box(&id));
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let octree = new_tree();
    let points = random_points(&mut rng, 1000);
    for (id, point) in points.iter().enumerate() {
        octree.set(id as u32, point.x, point.y, point.z).unwrap();
    }
    let targets = random_points(&mut rng, 1000);

    c.bench_function("octree_relocate", |b| {
        b.iter(|| {
            for (id, point) in targets.iter().enumerate() {
                octree
                    .set(black_box(id as u32), point.x, point.y, point.z)
                    .unwrap();
            }
        })
    });
}

fn find_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let octree = new_tree();
    let points = random_points(&mut rng, 10_000);
    for (id, point) in points.iter().enumerate() {
        octree.set(id as u32, point.x, point.y, point.z).unwrap();
    }

    c.bench_function("octree_find_small", |b| {
        b.iter(|| octree.find_all(black_box(40.0), 40.0, 40.0, 5.0))
    });
    c.bench_function("octree_find_large", |b| {
        b.iter(|| octree.find_all(black_box(0.0), 0.0, 0.0, 60.0))
    });
}

criterion_group!(
    octree_benchmarks,
    set_benchmark,
    remove_benchmark,
    relocate_benchmark,
    find_benchmark
);
criterion_main!(octree_benchmarks);
