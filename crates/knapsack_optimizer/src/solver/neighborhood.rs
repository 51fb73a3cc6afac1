use crate::{problem::item::ItemIdx, solver::candidate::Candidate};

/// One-bit-flip neighborhood of a candidate, visited in increasing index order.
///
/// Yields exactly `candidate.len()` neighbors, each an independent copy.
pub struct Neighborhood<'a> {
    candidate: &'a Candidate,
    next: usize,
}

impl<'a> Neighborhood<'a> {
    pub fn new(candidate: &'a Candidate) -> Self {
        Neighborhood { candidate, next: 0 }
    }
}

impl Iterator for Neighborhood<'_> {
    type Item = (ItemIdx, Candidate);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.candidate.len() {
            return None;
        }

        let index = ItemIdx::new(self.next);
        self.next += 1;

        Some((index, self.candidate.flipped(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.candidate.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Neighborhood<'_> {}
