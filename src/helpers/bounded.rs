//! Bounded deque for toast buffering
//!
//! Fixed-capacity deque that evicts the oldest item when full (FIFO eviction).

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a deque holding at most `cap` items. With 0, pushes are no-ops.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a new value, evicting the oldest if at capacity
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Items from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Keep only the items matching `keep`, preserving order
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.buf.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_deque_eviction() {
        let mut deque = BoundedDeque::new(3);
        for n in 1..=4 {
            deque.push(n);
        }
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_bounded_deque_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
    }

    #[test]
    fn test_bounded_deque_retain() {
        let mut deque = BoundedDeque::new(5);
        for n in 1..=5 {
            deque.push(n);
        }
        deque.retain(|n| n % 2 == 1);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 5);
    }
}
