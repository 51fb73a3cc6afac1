use jiff::Timestamp;
use rayon::{
    ThreadPool, ThreadPoolBuilder,
    iter::{IntoParallelIterator, ParallelIterator},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    acceptor::{accept_neighbor::AcceptNeighbor, steepest_ascent_acceptor::SteepestAscentAcceptor},
    error::SolverError,
    problem::{capacity::Capacity, instance_store::InstanceStore, item::ItemIdx},
    solver::{
        candidate::Candidate,
        evaluation::{Evaluation, EvaluationMode},
        neighborhood::Neighborhood,
        search_outcome::{EvaluatedCandidate, SearchOutcome, SearchState},
        solver_params::{SolverParams, Threads},
    },
};

/// Steepest-ascent hill climbing over one-bit-flip neighborhoods.
///
/// Every scan visits all N neighbors of the current candidate in index order
/// and keeps the best one under [`SteepestAscentAcceptor`]; the search moves
/// there and repeats until a scan keeps the current candidate.
pub struct HillClimbing<'a, S>
where
    S: InstanceStore + ?Sized,
{
    store: &'a S,
    capacity: Capacity,
    params: SolverParams,
    acceptor: SteepestAscentAcceptor,
    pool: Option<ThreadPool>,
}

/// Best neighbor found so far in a scan. `index` is `None` while the current
/// candidate itself is still the best.
struct BestNeighbor {
    index: Option<ItemIdx>,
    evaluation: Evaluation,
}

impl BestNeighbor {
    fn new(current: Evaluation) -> Self {
        BestNeighbor {
            index: None,
            evaluation: current,
        }
    }

    fn offer<A>(
        &mut self,
        acceptor: &A,
        capacity: Capacity,
        index: ItemIdx,
        evaluation: Evaluation,
    ) where
        A: AcceptNeighbor,
    {
        if acceptor.accept(&self.evaluation, &evaluation, capacity) {
            self.index = Some(index);
            self.evaluation = evaluation;
        }
    }
}

impl<'a, S> HillClimbing<'a, S>
where
    S: InstanceStore + ?Sized,
{
    pub fn new(
        store: &'a S,
        capacity: Capacity,
        params: SolverParams,
    ) -> Result<Self, SolverError> {
        let pool = match &params.threads {
            Threads::Single => None,
            threads => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads.number_of_threads())
                    .build()?,
            ),
        };

        Ok(HillClimbing {
            store,
            capacity,
            params,
            acceptor: SteepestAscentAcceptor,
            pool,
        })
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Panics if `candidate` does not cover exactly the items of the store.
    pub fn evaluate(&self, candidate: Candidate) -> Result<EvaluatedCandidate, SolverError> {
        assert_eq!(
            candidate.len(),
            self.store.len(),
            "candidate length must match the number of items"
        );

        let evaluation = Evaluation::of(&candidate, self.store)?;
        Ok(EvaluatedCandidate {
            candidate,
            evaluation,
        })
    }

    /// One full neighborhood scan. Returns `candidate` itself when no
    /// neighbor is accepted.
    pub fn find_best_neighbor(
        &self,
        candidate: &Candidate,
    ) -> Result<EvaluatedCandidate, SolverError> {
        let current = self.evaluate(candidate.clone())?;
        self.best_neighbor_of(&current)
    }

    #[instrument(
        skip_all,
        level = "debug",
        fields(items = self.store.len(), capacity = %self.capacity)
    )]
    pub fn find_solution(&self, initial: Candidate) -> Result<SearchOutcome, SolverError> {
        let started_at = Timestamp::now();
        let initial = self.evaluate(initial)?;

        let mut current = initial.clone();
        let mut state = if self.store.is_empty() {
            SearchState::Converged
        } else {
            SearchState::Searching
        };
        let mut scans = 0;
        let mut moves = 0;

        // Every move strictly improves (value, -weight), so no candidate is
        // visited twice and the number of distinct bit vectors bounds the loop.
        let max_scans = max_scans(self.store.len());
        while state == SearchState::Searching && scans < max_scans {
            let best = self.best_neighbor_of(&current)?;
            scans += 1;

            if best.candidate == current.candidate {
                state = SearchState::Converged;
            } else {
                moves += 1;
                debug!(
                    scan = scans,
                    value = best.value(),
                    weight = best.weight(),
                    "moved to best neighbor"
                );
                current = best;
            }
        }

        let elapsed = Timestamp::now().duration_since(started_at);
        match state {
            SearchState::Converged => info!(
                "Converged after {} scans and {} moves: value {}, weight {} (capacity {})",
                scans,
                moves,
                current.value(),
                current.weight(),
                self.capacity
            ),
            SearchState::Searching => warn!("Stopped after {} scans without converging", scans),
        }

        Ok(SearchOutcome {
            initial,
            solution: current,
            state,
            scans,
            moves,
            started_at,
            elapsed,
        })
    }

    fn best_neighbor_of(
        &self,
        current: &EvaluatedCandidate,
    ) -> Result<EvaluatedCandidate, SolverError> {
        let mut best = BestNeighbor::new(current.evaluation);
        let mode = self.params.evaluation;

        match &self.pool {
            Some(pool) => {
                // Evaluations run in parallel; selection stays sequential in
                // index order so ties resolve exactly as in a single-threaded scan.
                let store = self.store;
                let evaluations = pool.install(|| {
                    (0..current.candidate.len())
                        .into_par_iter()
                        .map(|index| {
                            mode.evaluate_neighbor(
                                store,
                                &current.candidate,
                                &current.evaluation,
                                ItemIdx::new(index),
                            )
                        })
                        .collect::<Result<Vec<_>, _>>()
                })?;

                for (index, evaluation) in evaluations.into_iter().enumerate() {
                    best.offer(
                        &self.acceptor,
                        self.capacity,
                        ItemIdx::new(index),
                        evaluation,
                    );
                }
            }
            None => match mode {
                EvaluationMode::Full => {
                    for (index, neighbor) in Neighborhood::new(&current.candidate) {
                        let evaluation = Evaluation::of(&neighbor, self.store)?;
                        best.offer(&self.acceptor, self.capacity, index, evaluation);
                    }
                }
                EvaluationMode::Incremental => {
                    for index in (0..current.candidate.len()).map(ItemIdx::new) {
                        let evaluation = mode.evaluate_neighbor(
                            self.store,
                            &current.candidate,
                            &current.evaluation,
                            index,
                        )?;
                        best.offer(&self.acceptor, self.capacity, index, evaluation);
                    }
                }
            },
        }

        Ok(match best.index {
            Some(index) => EvaluatedCandidate {
                candidate: current.candidate.flipped(index),
                evaluation: best.evaluation,
            },
            None => current.clone(),
        })
    }
}

fn max_scans(len: usize) -> usize {
    u32::try_from(len)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .unwrap_or(usize::MAX)
}
