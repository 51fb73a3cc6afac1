#![allow(dead_code)]

pub mod position_rng;

use std::path::PathBuf;

use knapsack_optimizer::{
    error::StoreError,
    problem::{
        capacity::Capacity,
        generator::{GeneratorParams, InstanceGenerator},
        instance_store::InstanceStore,
        item::ItemIdx,
        knapsack_instance::KnapsackInstance,
    },
    solver::candidate::Candidate,
};
use rand::{SeedableRng, rngs::SmallRng};

pub fn instance(values: Vec<u64>, weights: Vec<u64>) -> KnapsackInstance {
    KnapsackInstance::new(values, weights).unwrap()
}

pub fn example_instance() -> KnapsackInstance {
    instance(vec![10, 20, 15, 7], vec![5, 10, 8, 3])
}

pub fn random_instance(seed: u64, items: usize) -> KnapsackInstance {
    let generator = InstanceGenerator::new(GeneratorParams {
        items,
        ..GeneratorParams::default()
    })
    .unwrap();

    generator.generate(&mut SmallRng::seed_from_u64(seed))
}

pub fn candidate(bits: &str) -> Candidate {
    bits.parse().unwrap()
}

pub fn capacity(capacity: u64) -> Capacity {
    Capacity::new(capacity).unwrap()
}

pub fn fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir.join("tests/fixtures").join(fixture)
}

/// Store without any validation, for items a `KnapsackInstance` would refuse.
pub struct RawStore {
    items: Vec<(u64, u64)>,
}

impl RawStore {
    pub fn new(items: Vec<(u64, u64)>) -> Self {
        RawStore { items }
    }
}

impl InstanceStore for RawStore {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn value_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        Ok(self.items[index.get()].0)
    }

    fn weight_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        Ok(self.items[index.get()].1)
    }
}
