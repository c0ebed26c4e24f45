use crate::error::{Error, Result};
use crate::index_set::IndexSet;
use crate::types::Slot;

// Behaves like `[bool; capacity]` but clears in O(1). `dense` packs the
// members in `[0, len)`; `position[v]` is only trusted when it names a live
// slot that points back at `v`, so entries left stale by `clear` are inert.
#[derive(Clone)]
pub struct NumSet<S: Slot = u32> {
    dense: Box<[S]>,
    position: Box<[S]>,
    len: usize,
}

impl<S: Slot> NumSet<S> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > S::MAX_CAPACITY {
            return Err(Error::CapacityTooLarge {
                capacity,
                max: S::MAX_CAPACITY,
            });
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        NumSet {
            dense: vec![S::default(); capacity].into_boxed_slice(),
            position: vec![S::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.is_member(index))
    }

    pub fn insert(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if !self.is_member(index) {
            self.dense[self.len] = S::from_index(index);
            self.position[index] = S::from_index(self.len);
            self.len += 1;
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if self.is_member(index) {
            let pos = self.position[index];
            let last = self.len - 1;
            let moved = self.dense[last];
            // Self-assignment when `index` is the last member.
            self.dense[pos.index()] = moved;
            self.position[moved.index()] = pos;
            self.len = last;
        }
        Ok(())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(Error::OutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    #[inline]
    fn is_member(&self, index: usize) -> bool {
        let pos = self.position[index].index();
        pos < self.len && self.dense[pos].index() == index
    }
}

impl NumSet<usize> {
    // Every `usize` capacity fits in `usize` slots.
    pub fn new_native(capacity: usize) -> Self {
        Self::allocate(capacity)
    }
}

impl<S: Slot> std::fmt::Debug for NumSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumSet")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish()
    }
}

impl<S: Slot> IndexSet for NumSet<S> {
    fn capacity(&self) -> usize {
        NumSet::capacity(self)
    }

    fn contains(&self, index: usize) -> Result<bool> {
        NumSet::contains(self, index)
    }

    fn insert(&mut self, index: usize) -> Result<()> {
        NumSet::insert(self, index)
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        NumSet::remove(self, index)
    }

    fn clear(&mut self) {
        NumSet::clear(self)
    }

    fn len(&self) -> usize {
        NumSet::len(self)
    }
}
