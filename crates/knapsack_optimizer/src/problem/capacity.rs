use std::str::FromStr;

use serde::Serialize;

use crate::error::CapacityError;

/// Knapsack capacity, a positive integer fixed for the whole run.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Capacity(u64);

impl Capacity {
    pub fn new(capacity: u64) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::NonPositive(0));
        }

        Ok(Capacity(capacity))
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Capacity {
    type Err = CapacityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CapacityError::Empty);
        }

        let invalid = |source| CapacityError::Invalid {
            input: input.to_string(),
            source,
        };

        if input.starts_with('-') {
            let parsed: i64 = input.parse().map_err(invalid)?;
            return Err(CapacityError::NonPositive(parsed));
        }

        let parsed: u64 = input.parse().map_err(invalid)?;
        Capacity::new(parsed)
    }
}
