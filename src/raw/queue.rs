use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

/// A first-in, first-out queue.
///
/// Range collection and level-order traversal enqueue into one of these and
/// hand the finished queue to the caller as a single-pass iterator.
#[derive(Clone, Debug)]
pub(crate) struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub(crate) const fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub(crate) fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub(crate) fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Drains the queue front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
