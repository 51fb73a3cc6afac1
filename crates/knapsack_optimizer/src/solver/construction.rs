use rand::Rng;
use tracing::debug;

use crate::{
    problem::{capacity::Capacity, item::ItemIdx},
    solver::candidate::Candidate,
};

/// Random seed candidate: starting from all items excluded, flips
/// `capacity / max_weight` uniformly drawn positions. Positions are drawn with
/// replacement, so a position drawn twice ends up excluded again.
///
/// The result is not checked against the capacity.
pub fn construct_initial_candidate<R>(
    items: usize,
    capacity: Capacity,
    max_weight: u64,
    rng: &mut R,
) -> Candidate
where
    R: Rng + ?Sized,
{
    let mut candidate = Candidate::empty(items);
    if items == 0 {
        return candidate;
    }

    let flips = capacity.get().checked_div(max_weight).unwrap_or(0);
    for _ in 0..flips {
        candidate.flip(ItemIdx::new(rng.random_range(0..items)));
    }

    debug!(
        "Constructed initial candidate with {} flips, {} items included",
        flips,
        candidate.included_count()
    );

    candidate
}
