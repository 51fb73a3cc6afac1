use crate::solver::evaluation::EvaluationMode;

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub evaluation: EvaluationMode,
    /// Threads used to evaluate the neighbors of one scan.
    pub threads: Threads,
}

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            evaluation: EvaluationMode::Incremental,
            threads: Threads::Single,
        }
    }
}
