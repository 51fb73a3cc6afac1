use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use knapsack_optimizer::{
    problem::{
        capacity::Capacity,
        generator::{GeneratorParams, InstanceGenerator},
        instance_store::InstanceStore,
    },
    solver::{
        construction::construct_initial_candidate,
        evaluation::EvaluationMode,
        hill_climbing::HillClimbing,
        solver_params::{SolverParams, Threads},
    },
};
use rand::{SeedableRng, rngs::SmallRng};

fn neighborhood_scan_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let instance = InstanceGenerator::new(GeneratorParams::default())
        .unwrap()
        .generate(&mut rng);
    let capacity = Capacity::new(1000).unwrap();
    let candidate = construct_initial_candidate(instance.len(), capacity, 50, &mut rng);

    for (name, evaluation, threads) in [
        ("scan full", EvaluationMode::Full, Threads::Single),
        ("scan incremental", EvaluationMode::Incremental, Threads::Single),
        ("scan full (parallel)", EvaluationMode::Full, Threads::Auto),
    ] {
        let solver =
            HillClimbing::new(&instance, capacity, SolverParams { evaluation, threads }).unwrap();

        c.bench_function(name, |b| {
            b.iter(|| solver.find_best_neighbor(black_box(&candidate)).unwrap())
        });
    }
}

fn solve_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let instance = InstanceGenerator::new(GeneratorParams::default())
        .unwrap()
        .generate(&mut rng);
    let capacity = Capacity::new(1000).unwrap();
    let candidate = construct_initial_candidate(instance.len(), capacity, 50, &mut rng);
    let solver = HillClimbing::new(&instance, capacity, SolverParams::default()).unwrap();

    c.bench_function("find solution (incremental)", |b| {
        b.iter(|| solver.find_solution(black_box(candidate.clone())).unwrap())
    });
}

criterion_group!(benches, neighborhood_scan_benchmark, solve_benchmark);
criterion_main!(benches);
