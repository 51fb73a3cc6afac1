use rand::RngCore;

/// Replays a fixed sequence of item positions through `random_range(0..items)`.
///
/// Each position `p` is stored as the 32.32 fixed-point fraction
/// `ceil(p * 2^32 / items) << 32`. Widening-multiply range sampling maps that
/// fraction back to `p`, whether the range is sampled from `next_u32` (the
/// high half) or from `next_u64`. Positions cycle once exhausted.
pub struct PositionRng {
    fractions: Vec<u64>,
    next: usize,
}

impl PositionRng {
    /// Panics if `positions` is empty or a position is not below `items`.
    pub fn new(items: usize, positions: &[usize]) -> Self {
        assert!(!positions.is_empty(), "at least one position is needed");
        assert!(items <= 1 << 31, "too many items for exact replay");

        let fractions = positions
            .iter()
            .map(|&position| {
                assert!(position < items, "position {position} out of range");
                let numerator = (position as u64) << 32;
                numerator.div_ceil(items as u64) << 32
            })
            .collect();

        PositionRng { fractions, next: 0 }
    }
}

impl RngCore for PositionRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.fractions[self.next];
        self.next = (self.next + 1) % self.fractions.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
