//! Queue, stack and priority queue containers.
//!
//! A FIFO queue and a LIFO stack differ only in which end of the sequence
//! elements leave from. Rather than two types, [`Sequence`] stores its
//! elements in a `VecDeque` and takes a [`RemovalEnd`] at construction:
//!
//! ```rust,ignore
//! let mut queue = Sequence::queue_with(["1st", "2nd", "3rd"]);
//! assert_eq!(queue.dequeue(), Some("1st"));
//!
//! let mut stack = Sequence::stack_with(["1st", "2nd", "3rd"]);
//! assert_eq!(stack.dequeue(), Some("3rd"));
//! ```
//!
//! Elements are always added at the back, so the policy alone decides the
//! discipline. [`PriorityQueue`] orders by an explicit priority instead and
//! falls back to insertion order among equal priorities.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// The end of the sequence `dequeue` removes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalEnd {
    /// First in, first out
    Front,
    /// Last in, first out
    Back,
}

/// A double-ended sequence with a fixed removal policy
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    elements: VecDeque<T>,
    end: RemovalEnd,
}

impl<T> Sequence<T> {
    pub fn new(end: RemovalEnd) -> Self {
        Self {
            elements: VecDeque::new(),
            end,
        }
    }

    /// Creates a sequence holding `elements` in iteration order
    pub fn with_elements(end: RemovalEnd, elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            end,
        }
    }

    /// Empty FIFO sequence
    pub fn queue() -> Self {
        Self::new(RemovalEnd::Front)
    }

    /// Empty LIFO sequence
    pub fn stack() -> Self {
        Self::new(RemovalEnd::Back)
    }

    pub fn queue_with(elements: impl IntoIterator<Item = T>) -> Self {
        Self::with_elements(RemovalEnd::Front, elements)
    }

    pub fn stack_with(elements: impl IntoIterator<Item = T>) -> Self {
        Self::with_elements(RemovalEnd::Back, elements)
    }

    pub fn removal_end(&self) -> RemovalEnd {
        self.end
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        match self.end {
            RemovalEnd::Front => self.elements.pop_front(),
            RemovalEnd::Back => self.elements.pop_back(),
        }
    }

    /// The element the next `dequeue` would return
    pub fn peek(&self) -> Option<&T> {
        match self.end {
            RemovalEnd::Front => self.elements.front(),
            RemovalEnd::Back => self.elements.back(),
        }
    }

    /// Dequeues elements until the sequence is empty
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { sequence: self }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

/// Iterator returned by [`Sequence::drain`]
pub struct Drain<'a, T> {
    sequence: &'a mut Sequence<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.sequence.len();
        (len, Some(len))
    }
}

#[derive(Debug)]
struct Prioritized<T> {
    priority: i64,
    order: u64,
    value: T,
}

impl<T> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.order == other.order
    }
}

impl<T> Eq for Prioritized<T> {}

impl<T> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Prioritized<T> {
    // Max-heap: higher priority first, then the earlier insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Highest-priority-first queue, FIFO among equal priorities
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Prioritized<T>>,
    counter: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn enqueue_with_priority(&mut self, priority: i64, value: T) {
        let order = self.counter;
        self.counter += 1;
        self.heap.push(Prioritized {
            priority,
            order,
            value,
        });
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Sequence::queue_with(["1st", "2nd"]);
        queue.enqueue("3rd");
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&"1st"));
        assert_eq!(queue.dequeue(), Some("1st"));
        assert_eq!(queue.dequeue(), Some("2nd"));
        assert_eq!(queue.dequeue(), Some("3rd"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Sequence::stack_with(["1st", "2nd"]);
        stack.enqueue("3rd");
        assert_eq!(stack.removal_end(), RemovalEnd::Back);
        assert_eq!(stack.peek(), Some(&"3rd"));
        assert_eq!(stack.dequeue(), Some("3rd"));
        assert_eq!(stack.dequeue(), Some("2nd"));
        assert_eq!(stack.dequeue(), Some("1st"));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_constructors() {
        let mut queue = Sequence::queue();
        let mut stack = Sequence::stack();
        assert_eq!(queue.removal_end(), RemovalEnd::Front);
        assert_eq!(stack.removal_end(), RemovalEnd::Back);
        for item in ["a", "b"] {
            queue.enqueue(item);
            stack.enqueue(item);
        }
        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(Sequence::<u8>::stack().dequeue(), None);
    }

    #[test]
    fn test_drain_empties_sequence() {
        let mut queue = Sequence::queue();
        queue.extend(1..=4);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![1, 2, 3, 4]);
        assert!(queue.is_empty());

        let mut stack = Sequence::stack_with(1..=4);
        assert_eq!(stack.drain().size_hint(), (4, Some(4)));
        let drained: Vec<_> = stack.drain().collect();
        assert_eq!(drained, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_priority_queue_order() {
        let mut messages = PriorityQueue::new();
        messages.enqueue_with_priority(1, "wiper fluid low");
        messages.enqueue_with_priority(3, "brake pressure low");
        messages.enqueue_with_priority(2, "tire pressure low");
        messages.enqueue_with_priority(3, "engine overheating");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages.dequeue(), Some("brake pressure low"));
        assert_eq!(messages.dequeue(), Some("engine overheating"));
        assert_eq!(messages.dequeue(), Some("tire pressure low"));
        assert_eq!(messages.dequeue(), Some("wiper fluid low"));
        assert!(messages.is_empty());
    }
}
