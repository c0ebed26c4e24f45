use crate::error::{Error, Result};
use crate::index_set::IndexSet;

/// Plain `[bool; capacity]` set. Clearing costs O(capacity).
#[derive(Clone, Debug)]
pub struct BoolSet {
    marked: Box<[bool]>,
    len: usize,
}

impl BoolSet {
    pub fn new(capacity: usize) -> Self {
        BoolSet {
            marked: vec![false; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.marked.len() {
            return Err(Error::OutOfRange {
                index,
                capacity: self.marked.len(),
            });
        }
        Ok(())
    }
}

impl IndexSet for BoolSet {
    fn capacity(&self) -> usize {
        self.marked.len()
    }

    fn contains(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.marked[index])
    }

    fn insert(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if !self.marked[index] {
            self.marked[index] = true;
            self.len += 1;
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if self.marked[index] {
            self.marked[index] = false;
            self.len -= 1;
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.marked.fill(false);
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_unmarks_everything() {
        let mut set = BoolSet::new(8);
        for i in [0, 3, 7] {
            set.insert(i).unwrap();
        }
        set.insert(3).unwrap();
        assert_eq!(set.len(), 3);

        set.clear();
        assert!(set.is_empty());
        assert!((0..8).all(|i| !set.contains(i).unwrap()));
    }

    #[test]
    fn test_out_of_range() {
        let mut set = BoolSet::new(4);
        assert_eq!(
            set.remove(4),
            Err(Error::OutOfRange {
                index: 4,
                capacity: 4
            })
        );
        assert!(set.is_empty());
    }
}
