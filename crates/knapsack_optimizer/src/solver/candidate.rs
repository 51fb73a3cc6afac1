use std::str::FromStr;

use fixedbitset::FixedBitSet;

use crate::{error::ParseCandidateError, problem::item::ItemIdx};

/// Inclusion/exclusion vector over the whole catalogue: bit `i` set means
/// item `i` is packed.
///
/// Candidates are values. Producing a neighbor goes through [`Candidate::flipped`],
/// which returns a fresh copy and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    bits: FixedBitSet,
}

impl Candidate {
    /// All items excluded.
    pub fn empty(len: usize) -> Self {
        Candidate {
            bits: FixedBitSet::with_capacity(len),
        }
    }

    pub fn from_included<I>(len: usize, included: I) -> Self
    where
        I: IntoIterator<Item = ItemIdx>,
    {
        let mut candidate = Candidate::empty(len);
        for index in included {
            candidate.bits.insert(index.get());
        }

        candidate
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    pub fn contains(&self, index: ItemIdx) -> bool {
        self.bits.contains(index.get())
    }

    /// Binary complement at `index`, in place. Panics when `index` is out of range.
    pub fn flip(&mut self, index: ItemIdx) {
        self.bits.toggle(index.get());
    }

    pub fn flipped(&self, index: ItemIdx) -> Candidate {
        let mut neighbor = self.clone();
        neighbor.flip(index);
        neighbor
    }

    pub fn included(&self) -> impl Iterator<Item = ItemIdx> + '_ {
        self.bits.ones().map(ItemIdx::new)
    }

    pub fn included_count(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn hamming_distance(&self, other: &Candidate) -> usize {
        self.bits.symmetric_difference(&other.bits).count()
    }

    pub fn to_bit_string(&self) -> String {
        (0..self.len())
            .map(|index| if self.bits.contains(index) { '1' } else { '0' })
            .collect()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl FromStr for Candidate {
    type Err = ParseCandidateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut candidate = Candidate::empty(input.chars().count());
        for (position, bit) in input.chars().enumerate() {
            match bit {
                '0' => {}
                '1' => candidate.bits.insert(position),
                found => return Err(ParseCandidateError { position, found }),
            }
        }

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_leaves_original_untouched() {
        let candidate: Candidate = "0100".parse().unwrap();
        let neighbor = candidate.flipped(ItemIdx::new(3));

        assert_eq!(candidate.to_string(), "0100");
        assert_eq!(neighbor.to_string(), "0101");
        assert_eq!(candidate.hamming_distance(&neighbor), 1);
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut candidate = Candidate::empty(5);
        candidate.flip(ItemIdx::new(2));
        assert!(candidate.contains(ItemIdx::new(2)));

        candidate.flip(ItemIdx::new(2));
        assert_eq!(candidate, Candidate::empty(5));
    }

    #[test]
    fn test_included() {
        let candidate = Candidate::from_included(6, [ItemIdx::new(1), ItemIdx::new(4)]);

        assert_eq!(candidate.to_string(), "010010");
        assert_eq!(candidate.included_count(), 2);
        assert_eq!(
            candidate.included().collect::<Vec<_>>(),
            vec![ItemIdx::new(1), ItemIdx::new(4)]
        );
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!(
            "01x1".parse::<Candidate>(),
            Err(ParseCandidateError {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_empty_candidate() {
        let candidate: Candidate = "".parse().unwrap();

        assert!(candidate.is_empty());
        assert_eq!(candidate.to_string(), "");
    }
}
