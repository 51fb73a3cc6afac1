use clap::Args;
use knapsack_optimizer::problem::{
    generator::{
        DEFAULT_ITEMS, DEFAULT_MAX_VALUE, DEFAULT_MAX_WEIGHT, GeneratorParams, InstanceGenerator,
    },
    line_file_store::LineFileStore,
};
use tracing::info;

use crate::{StoreArgs, seeded_rng};

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of items in the catalogue
    #[arg(long, default_value_t = DEFAULT_ITEMS)]
    pub items: usize,

    /// Values are drawn uniformly in [1, max-value]
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_VALUE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_value: u64,

    /// Weights are drawn uniformly in [1, max-weight]
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_WEIGHT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_weight: u64,

    /// Seed for reproducible instances
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(store: &StoreArgs, args: &GenerateArgs) -> Result<(), anyhow::Error> {
    let generator = InstanceGenerator::new(GeneratorParams {
        items: args.items,
        max_value: args.max_value,
        max_weight: args.max_weight,
    })?;

    let instance = generator.generate(&mut seeded_rng(args.seed));
    LineFileStore::write(&store.dir, &instance)?;

    info!(
        "Generated {} items into {:?} (values up to {}, weights up to {})",
        args.items, store.dir, args.max_value, args.max_weight
    );

    Ok(())
}
