use serde::Serialize;

use crate::{
    error::{InstanceError, StoreError},
    problem::{
        instance_store::{InstanceStore, assert_in_range},
        item::{Item, ItemIdx},
    },
};

/// In-memory item catalogue.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct KnapsackInstance {
    items: Vec<Item>,
}

impl KnapsackInstance {
    pub fn new(values: Vec<u64>, weights: Vec<u64>) -> Result<Self, InstanceError> {
        if values.len() != weights.len() {
            return Err(InstanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        let items = values
            .into_iter()
            .zip(weights)
            .map(|(value, weight)| Item::new(value, weight))
            .collect();

        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Item>) -> Result<Self, InstanceError> {
        if let Some(index) = items
            .iter()
            .position(|item| item.value() == 0 || item.weight() == 0)
        {
            return Err(InstanceError::NonPositiveItem { index });
        }

        Ok(KnapsackInstance { items })
    }

    /// Skips validation for items built from positive records or bounded draws.
    pub(crate) fn from_parsed_items(items: Vec<Item>) -> Self {
        debug_assert!(items.iter().all(|item| item.value() > 0 && item.weight() > 0));
        KnapsackInstance { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(Item::value)
    }

    pub fn weights(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(Item::weight)
    }

    fn item_at(&self, index: ItemIdx) -> &Item {
        assert_in_range(index, self.items.len());
        &self.items[index.get()]
    }
}

impl InstanceStore for KnapsackInstance {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn value_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        Ok(self.item_at(index).value())
    }

    fn weight_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        Ok(self.item_at(index).weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance() {
        let instance = KnapsackInstance::new(vec![10, 20], vec![5, 10]).unwrap();

        assert_eq!(instance.len(), 2);
        assert_eq!(instance.value_of(ItemIdx::new(1)).unwrap(), 20);
        assert_eq!(instance.weight_of(ItemIdx::new(0)).unwrap(), 5);
        assert_eq!(instance.item(ItemIdx::new(1)).unwrap(), Item::new(20, 10));
    }

    #[test]
    fn test_new_instance_rejects_mismatch() {
        assert_eq!(
            KnapsackInstance::new(vec![10, 20], vec![5]),
            Err(InstanceError::LengthMismatch {
                values: 2,
                weights: 1
            })
        );
    }

    #[test]
    fn test_new_instance_rejects_zero() {
        assert_eq!(
            KnapsackInstance::new(vec![10, 20, 3], vec![5, 0, 1]),
            Err(InstanceError::NonPositiveItem { index: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let instance = KnapsackInstance::new(vec![10], vec![5]).unwrap();
        let _ = instance.value_of(ItemIdx::new(1));
    }
}
