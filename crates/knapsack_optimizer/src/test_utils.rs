use crate::{problem::knapsack_instance::KnapsackInstance, solver::candidate::Candidate};

pub fn instance(values: Vec<u64>, weights: Vec<u64>) -> KnapsackInstance {
    KnapsackInstance::new(values, weights).unwrap()
}

/// values [10, 20, 15, 7], weights [5, 10, 8, 3]
pub fn example_instance() -> KnapsackInstance {
    instance(vec![10, 20, 15, 7], vec![5, 10, 8, 3])
}

pub fn candidate(bits: &str) -> Candidate {
    bits.parse().unwrap()
}
