use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `0..num`, in the given order
pub struct SequentialKeys {
    position: u64,
    num: u64,
    order: SequentialOrder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(num: u64, order: SequentialOrder) -> SequentialKeys {
        SequentialKeys {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }

        let r = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.num - self.position) as usize;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
