use alloc::vec::Vec;

use super::{Iter, SearchTree};
use crate::raw::Queue;
use crate::{IntoKey, Key, Node, TreeError};

impl<V, S> SearchTree<V, S> {
    /// Returns every key in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates comparison failures; none occur among keys the tree
    /// accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Key, SearchTree};
    ///
    /// let mut tree = SearchTree::new();
    /// for key in [3, 1, 2] {
    ///     tree.put(key, ())?;
    /// }
    /// assert_eq!(tree.keys()?, [&Key::from(1), &Key::from(2), &Key::from(3)]);
    /// # Ok::<(), search_tree::TreeError>(())
    /// ```
    pub fn keys(&self) -> Result<Vec<&Key>, TreeError> {
        let Some(root) = self.root() else {
            return Ok(Vec::new());
        };
        self.collect_in_range(root.min_node().key(), root.max_node().key(), Node::key)
            .map(|queue| queue.into_iter().collect())
    }

    /// Returns the keys in `[lo, hi]` in ascending order.
    ///
    /// The bounds need not be keys of the tree. An inverted range is empty.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullKey`], [`TreeError::TypeMismatch`] or
    /// [`TreeError::ParseError`] if either bound is unusable.
    pub fn keys_in_range(&self, lo: impl IntoKey, hi: impl IntoKey) -> Result<Vec<&Key>, TreeError> {
        let lo = self.admit(lo, "keys_in_range")?;
        let hi = self.admit(hi, "keys_in_range")?;
        self.collect_in_range(&lo, &hi, Node::key)
            .map(|queue| queue.into_iter().collect())
    }

    /// Returns an iterator over every entry in ascending key order.
    ///
    /// # Errors
    ///
    /// As for [`keys`](SearchTree::keys).
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.put("b", 2)?;
    /// tree.put("a", 1)?;
    ///
    /// let values: Vec<i32> = tree.iter()?.map(|(_, value)| *value).collect();
    /// assert_eq!(values, [1, 2]);
    /// # Ok::<(), search_tree::TreeError>(())
    /// ```
    pub fn iter(&self) -> Result<Iter<'_, V>, TreeError> {
        let Some(root) = self.root() else {
            return Ok(Iter::new(Queue::new()));
        };
        self.collect_in_range(root.min_node().key(), root.max_node().key(), |node| node)
            .map(Iter::new)
    }

    /// Returns an iterator over the entries whose keys lie in `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// As for [`keys_in_range`](SearchTree::keys_in_range).
    pub fn range(&self, lo: impl IntoKey, hi: impl IntoKey) -> Result<Iter<'_, V>, TreeError> {
        let lo = self.admit(lo, "range")?;
        let hi = self.admit(hi, "range")?;
        self.collect_in_range(&lo, &hi, |node| node).map(Iter::new)
    }

    fn collect_in_range<'a, T>(
        &'a self,
        lo: &Key,
        hi: &Key,
        emit: fn(&'a Node<V>) -> T,
    ) -> Result<Queue<T>, TreeError> {
        let mut queue = Queue::new();
        self.add_to_queue(self.root(), &mut queue, lo, hi, emit)?;
        Ok(queue)
    }

    /// Visits `[lo, hi]` in order, skipping subtrees that lie wholly outside it.
    fn add_to_queue<'a, T>(
        &self,
        node: Option<&'a Node<V>>,
        queue: &mut Queue<T>,
        lo: &Key,
        hi: &Key,
        emit: fn(&'a Node<V>) -> T,
    ) -> Result<(), TreeError> {
        let mut pending = Vec::new();
        let mut current = node;
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = if self.order.compare(lo, node.key())?.is_lt() { node.left() } else { None };
            }
            let Some(node) = pending.pop() else {
                return Ok(());
            };

            let from_lo = self.order.compare(lo, node.key())?;
            let from_hi = self.order.compare(hi, node.key())?;
            if from_lo.is_le() && from_hi.is_ge() {
                queue.enqueue(emit(node));
            }
            current = if from_hi.is_gt() { node.right() } else { None };
        }
    }
}
