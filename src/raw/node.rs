use alloc::boxed::Box;

use crate::Key;

/// An owning link to a subtree; `None` is the empty subtree.
pub type Link<V> = Option<Box<Node<V>>>;

/// A binary search tree node.
///
/// A node exclusively owns its two children and caches the number of nodes in
/// the subtree rooted at it. Structures keep the cache current with
/// [`update_size`](Node::update_size) after every change below a node.
#[derive(Clone, Debug)]
pub struct Node<V> {
    key: Key,
    value: V,
    left: Link<V>,
    right: Link<V>,
    // Number of nodes in this subtree, including this one.
    size: usize,
}

impl<V> Node<V> {
    /// Creates a leaf holding `key` and `value`.
    #[must_use]
    pub fn new(key: Key, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: 1,
        }
    }

    /// Returns the size of a possibly empty subtree.
    #[must_use]
    pub fn size_of(node: Option<&Self>) -> usize {
        node.map_or(0, |node| node.size)
    }

    /// Returns the leftmost node of this subtree.
    #[must_use]
    pub fn min_node(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Returns the rightmost node of this subtree.
    #[must_use]
    pub fn max_node(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }

    /// Recomputes the cached size from the children.
    pub fn update_size(&mut self) {
        self.size = 1 + Self::size_of(self.left()) + Self::size_of(self.right());
    }

    /// Counts one more node below this one, for top-down insertion.
    pub(crate) fn grow(&mut self) {
        self.size += 1;
    }

    /// Counts one node fewer below this one, for top-down removal.
    pub(crate) fn shrink(&mut self) {
        self.size -= 1;
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the cached size of this subtree.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the owning link to the left subtree.
    #[inline]
    pub fn left_mut(&mut self) -> &mut Link<V> {
        &mut self.left
    }

    /// Returns the owning link to the right subtree.
    #[inline]
    pub fn right_mut(&mut self) -> &mut Link<V> {
        &mut self.right
    }

    /// Consumes the node and returns its entry.
    #[must_use]
    pub fn into_entry(self) -> (Key, V) {
        (self.key, self.value)
    }
}
