//! Update engine benchmarks
//!
//! Run with: cargo bench --bench update_step

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use swarm_seek_core::prelude::*;

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let grid = Grid::new(200, 200).unwrap();
    let goal = grid.center();

    for particles in [20usize, 200, 2000] {
        let mut rng = StdRng::seed_from_u64(particles as u64);
        let swarm = Swarm::random(&grid, particles, &mut rng).unwrap();
        let mut source = RngCoefficients::new(rng);

        group.throughput(Throughput::Elements(particles as u64));
        group.bench_with_input(BenchmarkId::from_parameter(particles), &swarm, |b, swarm| {
            let mut swarm = swarm.clone();
            b.iter(|| {
                update(&mut swarm, &grid, goal, &mut source);
                black_box(swarm.global_best_fitness());
            });
        });
    }

    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let goal = Position::new(25, 10);
    c.bench_function("fitness", |b| {
        b.iter(|| black_box(fitness(black_box(&Position::new(3, 17)), &goal)));
    });
}

criterion_group!(benches, bench_update, bench_fitness);
criterion_main!(benches);
