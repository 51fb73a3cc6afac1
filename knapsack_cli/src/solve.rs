use std::io::{BufRead, Write};

use anyhow::{Context, anyhow};
use clap::Args;
use knapsack_optimizer::{
    problem::{
        capacity::Capacity,
        generator::{DEFAULT_ITEMS, DEFAULT_MAX_VALUE, DEFAULT_MAX_WEIGHT},
        instance_store::InstanceStore,
        line_file_store::{LineFileStore, StoreMode},
    },
    solver::{
        construction::construct_initial_candidate,
        evaluation::EvaluationMode,
        hill_climbing::HillClimbing,
        solver_params::{SolverParams, Threads},
    },
};
use tracing::info;

use crate::{
    StoreArgs,
    generate::{self, GenerateArgs},
    parsers,
    report::SolutionReport,
    seeded_rng,
};

#[derive(Args, Clone, Debug)]
pub struct SolveArgs {
    /// Knapsack capacity; prompted on stdin when missing
    #[arg(short, long, env = "KNAPSACK_CAPACITY")]
    pub capacity: Option<Capacity>,

    /// Upper bound of item weights, sizes the random seed candidate
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_WEIGHT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_weight: u64,

    /// Parse the store once instead of re-reading a line per lookup
    #[arg(long)]
    pub cached: bool,

    /// Recompute every neighbor from scratch instead of by delta
    #[arg(long)]
    pub full_evaluation: bool,

    /// Threads evaluating neighbors: "auto" or a number (default: 1)
    #[arg(short, long, default_value = "1", value_parser = parsers::parse_threads)]
    pub threads: Threads,

    /// Seed for the random seed candidate
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
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

    #[command(flatten)]
    pub solve: SolveArgs,
}

pub fn run(store_args: &StoreArgs, args: &SolveArgs) -> Result<(), anyhow::Error> {
    let mode = if args.cached {
        StoreMode::Cached
    } else {
        StoreMode::Uncached
    };
    let store = LineFileStore::open(&store_args.dir, mode)?;

    let capacity = match args.capacity {
        Some(capacity) => capacity,
        None => prompt_capacity(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let mut rng = seeded_rng(args.seed);
    let initial = construct_initial_candidate(store.len(), capacity, args.max_weight, &mut rng);

    let params = SolverParams {
        evaluation: if args.full_evaluation {
            EvaluationMode::Full
        } else {
            EvaluationMode::Incremental
        },
        threads: args.threads.clone(),
    };
    let solver = HillClimbing::new(&store, capacity, params)?;

    info!(
        "Solving {} items with capacity {} ({:?} evaluation, {} threads)",
        store.len(),
        capacity,
        solver.params().evaluation,
        solver.params().threads.number_of_threads()
    );

    let outcome = solver
        .find_solution(initial)
        .with_context(|| format!("Search over {:?} failed", store_args.dir))?;
    let report = SolutionReport::new(store.len(), capacity, &outcome);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print(&mut std::io::stdout())?;
    }

    Ok(())
}

pub fn run_generated(store_args: &StoreArgs, args: &RunArgs) -> Result<(), anyhow::Error> {
    generate::run(
        store_args,
        &GenerateArgs {
            items: args.items,
            max_value: args.max_value,
            max_weight: args.solve.max_weight,
            seed: args.solve.seed,
        },
    )?;

    run(store_args, &args.solve)
}

pub fn prompt_capacity<R, W>(input: &mut R, output: &mut W) -> Result<Capacity, anyhow::Error>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Enter total capacity of the knapsack: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("No capacity given"));
    }

    Ok(line.parse::<Capacity>()?)
}
