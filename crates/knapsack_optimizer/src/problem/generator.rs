use rand::Rng;
use tracing::debug;

use crate::{
    error::InstanceError,
    problem::{item::Item, knapsack_instance::KnapsackInstance},
};

pub const DEFAULT_ITEMS: usize = 200;
pub const DEFAULT_MAX_VALUE: u64 = 20;
pub const DEFAULT_MAX_WEIGHT: u64 = 50;

#[derive(Clone, Debug)]
pub struct GeneratorParams {
    pub items: usize,
    pub max_value: u64,
    pub max_weight: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS,
            max_value: DEFAULT_MAX_VALUE,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

/// Draws random instances with values uniform in `[1, max_value]` and
/// weights uniform in `[1, max_weight]`.
#[derive(Clone, Debug)]
pub struct InstanceGenerator {
    params: GeneratorParams,
}

impl InstanceGenerator {
    pub fn new(params: GeneratorParams) -> Result<Self, InstanceError> {
        if params.max_value == 0 {
            return Err(InstanceError::InvalidBound { field: "values" });
        }

        if params.max_weight == 0 {
            return Err(InstanceError::InvalidBound { field: "weights" });
        }

        Ok(InstanceGenerator { params })
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> KnapsackInstance {
        let values = (0..self.params.items)
            .map(|_| rng.random_range(1..=self.params.max_value))
            .collect::<Vec<_>>();
        let weights = (0..self.params.items)
            .map(|_| rng.random_range(1..=self.params.max_weight))
            .collect::<Vec<_>>();

        debug!(
            "Generated {} items (max value {}, max weight {})",
            self.params.items, self.params.max_value, self.params.max_weight
        );

        let items = values
            .into_iter()
            .zip(weights)
            .map(|(value, weight)| Item::new(value, weight))
            .collect();

        KnapsackInstance::from_parsed_items(items)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::problem::instance_store::InstanceStore;

    use super::*;

    #[test]
    fn test_generate_within_bounds() {
        let generator = InstanceGenerator::new(GeneratorParams {
            items: 500,
            max_value: 20,
            max_weight: 50,
        })
        .unwrap();
        let instance = generator.generate(&mut SmallRng::seed_from_u64(7));

        assert_eq!(instance.len(), 500);
        assert!(instance.values().all(|value| (1..=20).contains(&value)));
        assert!(instance.weights().all(|weight| (1..=50).contains(&weight)));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let generator = InstanceGenerator::new(GeneratorParams::default()).unwrap();

        let first = generator.generate(&mut SmallRng::seed_from_u64(42));
        let second = generator.generate(&mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(first.len(), DEFAULT_ITEMS);
    }

    #[test]
    fn test_generate_rejects_zero_bounds() {
        assert!(matches!(
            InstanceGenerator::new(GeneratorParams {
                max_value: 0,
                ..GeneratorParams::default()
            }),
            Err(InstanceError::InvalidBound { field: "values" })
        ));
        assert!(matches!(
            InstanceGenerator::new(GeneratorParams {
                max_weight: 0,
                ..GeneratorParams::default()
            }),
            Err(InstanceError::InvalidBound { field: "weights" })
        ));
    }
}
