use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mimalloc::MiMalloc;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    generate::GenerateArgs,
    solve::{RunArgs, SolveArgs},
};

mod generate;
mod parsers;
mod report;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(
    author,
    version,
    about = "Steepest-ascent hill climbing for the 0/1 knapsack problem",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random instance into a store directory
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Climb from a random seed candidate over the instance in a store directory
    #[command(visible_alias = "s")]
    Solve {
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Generate a fresh instance, then solve it
    Run {
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        args: RunArgs,
    },
}

#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Directory holding values.txt and weights.txt
    #[arg(long, env = "KNAPSACK_STORE_DIR", default_value = ".")]
    pub dir: PathBuf,
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate { store, args } => generate::run(&store, &args)?,
        Commands::Solve { store, args } => solve::run(&store, &args)?,
        Commands::Run { store, args } => solve::run_generated(&store, &args)?,
    }

    Ok(())
}
