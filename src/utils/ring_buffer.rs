//! An optionally bounded ring buffer with O(1) push operations.

use std::collections::VecDeque;
use std::collections::vec_deque;

// ============================================================================
// RingBuffer
// ============================================================================

/// A FIFO log. When bounded and full, each push evicts the oldest element.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    data: VecDeque<T>,
    /// `None` grows without limit
    capacity: Option<usize>,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer, bounded when `capacity` is set.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            data: VecDeque::new(),
            capacity: capacity.map(|c| c.max(1)),
        }
    }

    /// Adds an element to the back of the buffer. O(1).
    pub fn push(&mut self, item: T) {
        if self.capacity == Some(self.data.len()) {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns the element at the given logical index (0 = oldest).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut buf = RingBuffer::new(Some(3));
        buf.push(1);
        buf.push(2);

        assert_eq!(buf.len(), 2);
        assert_eq!(buf.get(0), Some(&1));
        assert_eq!(buf.last(), Some(&2));
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut buf = RingBuffer::new(Some(3));
        for i in 1..=5 {
            buf.push(i);
        }

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_clear() {
        let mut buf = RingBuffer::new(Some(2));
        buf.push("a");
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), Some(2));
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut buf = RingBuffer::new(Some(0));
        buf.push(1);
        buf.push(2);
        assert_eq!(buf.capacity(), Some(1));
        assert_eq!(buf.last(), Some(&2));
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut buf = RingBuffer::new(None);
        for i in 0..5000 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 5000);
        assert_eq!(buf.get(0), Some(&0));
        assert_eq!(buf.capacity(), None);
    }
}
