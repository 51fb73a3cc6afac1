use serde::Serialize;

use crate::{
    error::StoreError,
    problem::{capacity::Capacity, instance_store::InstanceStore, item::{Item, ItemIdx}},
    solver::candidate::Candidate,
};

/// Derived quality of a candidate: summed value and weight of its packed items.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub value: u64,
    pub weight: u64,
}

impl Evaluation {
    /// Full O(N) scan over the packed items.
    pub fn of<S>(candidate: &Candidate, store: &S) -> Result<Self, StoreError>
    where
        S: InstanceStore + ?Sized,
    {
        candidate
            .included()
            .try_fold(
                Evaluation::default(),
                |sum, index| -> Result<Evaluation, StoreError> {
                    Ok(Evaluation {
                        value: sum.value + store.value_of(index)?,
                        weight: sum.weight + store.weight_of(index)?,
                    })
                },
            )
    }

    pub fn is_admissible(&self, capacity: Capacity) -> bool {
        self.weight <= capacity.get()
    }

    /// Evaluation after flipping `item`, given whether it is currently packed.
    pub fn flip(&self, included: bool, item: Item) -> Self {
        if included {
            Evaluation {
                value: self.value - item.value(),
                weight: self.weight - item.weight(),
            }
        } else {
            Evaluation {
                value: self.value + item.value(),
                weight: self.weight + item.weight(),
            }
        }
    }
}

/// How neighbor evaluations are computed during a scan. Both modes give the
/// same numbers; `Incremental` reads one item per neighbor instead of all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    Full,
    #[default]
    Incremental,
}

impl EvaluationMode {
    pub fn evaluate_neighbor<S>(
        &self,
        store: &S,
        current: &Candidate,
        current_evaluation: &Evaluation,
        index: ItemIdx,
    ) -> Result<Evaluation, StoreError>
    where
        S: InstanceStore + ?Sized,
    {
        match self {
            EvaluationMode::Full => Evaluation::of(&current.flipped(index), store),
            EvaluationMode::Incremental => {
                let item = store.item(index)?;
                Ok(current_evaluation.flip(current.contains(index), item))
            }
        }
    }
}
