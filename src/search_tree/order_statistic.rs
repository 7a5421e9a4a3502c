use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::Index;

use super::SearchTree;
use crate::structure::Structure;
use crate::{IntoKey, Key, Node, Rank, TreeError};

impl<V, S: Structure<V>> SearchTree<V, S> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Errors
    ///
    /// [`TreeError::NullKey`], [`TreeError::TypeMismatch`] or
    /// [`TreeError::ParseError`] for an unusable key, and
    /// [`TreeError::KeyNotFound`] if the tree does not hold `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.put(10, "a")?;
    /// tree.put(20, "b")?;
    ///
    /// assert_eq!(tree.rank(20)?, 1);
    /// assert!(tree.rank(15).is_err());
    /// # Ok::<(), search_tree::TreeError>(())
    /// ```
    pub fn rank(&self, key: impl IntoKey) -> Result<usize, TreeError> {
        let key = self.admit(key, "rank")?;
        if !self.contains_admitted(&key)? {
            return Err(TreeError::KeyNotFound { key });
        }
        self.rank_of_key_from_node(&key, self.root())
    }

    fn rank_of_key_from_node(&self, key: &Key, node: Option<&Node<V>>) -> Result<usize, TreeError> {
        let mut current = node;
        let mut rank = 0;
        while let Some(node) = current {
            let left_size = Node::size_of(node.left());
            match self.order.compare(key, node.key())? {
                Less => current = node.left(),
                Greater => {
                    rank += 1 + left_size;
                    current = node.right();
                }
                Equal => return Ok(rank + left_size),
            }
        }
        Ok(rank)
    }
}

impl<V, S> SearchTree<V, S> {
    /// Returns the key at zero-based position `rank` in sorted order.
    ///
    /// This is the inverse of [`rank`](SearchTree::rank).
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRank`] if `rank >= size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Key, SearchTree};
    ///
    /// let mut tree = SearchTree::new();
    /// for key in ["pear", "apple", "fig"] {
    ///     tree.put(key, ())?;
    /// }
    ///
    /// assert_eq!(tree.select_key_for_rank(1)?, &Key::from("fig"));
    /// assert!(tree.select_key_for_rank(3).is_err());
    /// # Ok::<(), search_tree::TreeError>(())
    /// ```
    pub fn select_key_for_rank(&self, rank: usize) -> Result<&Key, TreeError> {
        let size = self.size();
        if rank >= size {
            return Err(TreeError::InvalidRank { rank, size });
        }
        node_at_rank_from_node(rank, self.root())
            .map(Node::key)
            .ok_or(TreeError::InvalidRank { rank, size })
    }
}

fn node_at_rank_from_node<V>(mut rank: usize, mut node: Option<&Node<V>>) -> Option<&Node<V>> {
    while let Some(current) = node {
        let left_size = Node::size_of(current.left());
        match left_size.cmp(&rank) {
            Less => {
                rank -= left_size + 1;
                node = current.right();
            }
            Greater => node = current.left(),
            Equal => return Some(current),
        }
    }
    None
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use search_tree::{Rank, SearchTree};
///
/// let mut tree = SearchTree::new();
/// tree.put(2, "b").unwrap();
/// tree.put(1, "a").unwrap();
///
/// assert_eq!(tree[Rank(1)], "b");
/// ```
impl<V, S> Index<Rank> for SearchTree<V, S> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        node_at_rank_from_node(rank.0, self.root()).map(Node::value).expect("index out of bounds")
    }
}
