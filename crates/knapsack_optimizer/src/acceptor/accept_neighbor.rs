use crate::{problem::capacity::Capacity, solver::evaluation::Evaluation};

pub trait AcceptNeighbor {
    /// Whether `neighbor` replaces `best`, the best evaluation found so far in the scan.
    fn accept(&self, best: &Evaluation, neighbor: &Evaluation, capacity: Capacity) -> bool;
}
