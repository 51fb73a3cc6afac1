use crate::{problem::capacity::Capacity, solver::evaluation::Evaluation};

use super::accept_neighbor::AcceptNeighbor;

/// Accepts a strictly more valuable neighbor that fits the capacity, or an
/// equally valuable one that is strictly lighter.
///
/// The lighter-tie rule does not look at the capacity. An infeasible best can
/// therefore be replaced by a lighter, still infeasible, neighbor.
#[derive(Debug, Default, Clone, Copy)]
pub struct SteepestAscentAcceptor;

impl AcceptNeighbor for SteepestAscentAcceptor {
    fn accept(&self, best: &Evaluation, neighbor: &Evaluation, capacity: Capacity) -> bool {
        if neighbor.value > best.value && neighbor.is_admissible(capacity) {
            return true;
        }

        neighbor.value == best.value && neighbor.weight < best.weight
    }
}
