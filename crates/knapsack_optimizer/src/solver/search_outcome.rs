use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::solver::{candidate::Candidate, evaluation::Evaluation};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SearchState {
    /// Some neighbor is still accepted by the improvement rule.
    Searching,
    /// Local optimum. Terminal.
    Converged,
}

/// A candidate together with its derived value and weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedCandidate {
    pub candidate: Candidate,
    pub evaluation: Evaluation,
}

impl EvaluatedCandidate {
    pub fn value(&self) -> u64 {
        self.evaluation.value
    }

    pub fn weight(&self) -> u64 {
        self.evaluation.weight
    }
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub initial: EvaluatedCandidate,
    pub solution: EvaluatedCandidate,
    pub state: SearchState,
    /// Full neighborhood scans performed, including the one that found no improvement.
    pub scans: usize,
    /// Accepted moves.
    pub moves: usize,
    pub started_at: Timestamp,
    pub elapsed: SignedDuration,
}
