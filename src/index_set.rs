use crate::error::Result;

/// A mutable set of indices in `0..capacity()`. Out-of-range indices fail
/// with `Error::OutOfRange` and leave the set unchanged.
pub trait IndexSet {
    fn capacity(&self) -> usize;

    fn contains(&self, index: usize) -> Result<bool>;

    fn insert(&mut self, index: usize) -> Result<()>;

    fn remove(&mut self, index: usize) -> Result<()>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
