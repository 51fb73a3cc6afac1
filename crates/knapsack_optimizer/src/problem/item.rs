use serde::Serialize;

/// Stable position of an item in the catalogue, in `[0, N)`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemIdx(usize);

impl std::fmt::Display for ItemIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ItemIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIdx {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    value: u64,
    weight: u64,
}

impl Item {
    pub const fn new(value: u64, weight: u64) -> Self {
        Item { value, weight }
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn weight(&self) -> u64 {
        self.weight
    }
}
