use crate::{
    error::StoreError,
    problem::item::{Item, ItemIdx},
};

/// Read-only, index-addressable access to the item catalogue.
///
/// Implementations must return the same value and weight for an index for
/// as long as a search runs. Asking for an index outside `[0, len())` is a
/// programming error and panics.
pub trait InstanceStore: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value_of(&self, index: ItemIdx) -> Result<u64, StoreError>;

    fn weight_of(&self, index: ItemIdx) -> Result<u64, StoreError>;

    fn item(&self, index: ItemIdx) -> Result<Item, StoreError> {
        Ok(Item::new(self.value_of(index)?, self.weight_of(index)?))
    }
}

pub(crate) fn assert_in_range(index: ItemIdx, len: usize) {
    assert!(
        index.get() < len,
        "item index {index} out of range for a store of {len} items"
    );
}
