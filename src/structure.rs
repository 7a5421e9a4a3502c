//! Structural hooks that shape a [`SearchTree`](crate::SearchTree).
//!
//! The tree core answers every order query (floor, ceil, rank, select,
//! ranges, traversals) by walking nodes and their cached sizes. What it does
//! not decide is where nodes go: inserting, deleting and looking up are
//! delegated to a [`Structure`], which may rebalance as it sees fit.

use crate::{Key, KeyOrder, Link, Node, TreeError};

mod unbalanced;

pub use unbalanced::Unbalanced;

/// The structural hooks a balancing strategy supplies to the tree core.
///
/// Each mutating hook receives the owning link of a subtree and rewrites it
/// in place to the new subtree root, so a strategy can rotate or rebuild
/// freely. Implementations must keep the size invariant at every node they
/// touch, `size == 1 + size(left) + size(right)`, typically by calling
/// [`Node::update_size`] on the way back up.
///
/// Keys passed to the hooks have already been checked against the tree's key
/// kind and [`KeyOrder`]. Comparisons should still go through
/// [`KeyOrder::compare`] and propagate its error rather than panic.
pub trait Structure<V> {
    /// Returns the value stored under `key` in the subtree at `node`.
    ///
    /// # Errors
    ///
    /// Propagates comparison failures from [`KeyOrder::compare`].
    fn get_from_node_at_key<'a>(
        &self,
        node: Option<&'a Node<V>>,
        key: &Key,
        order: KeyOrder,
    ) -> Result<Option<&'a V>, TreeError>;

    /// Inserts `key` with `value` below `link`, or replaces the value of an
    /// existing `key` in place. Returns the replaced value.
    ///
    /// # Errors
    ///
    /// Propagates comparison failures from [`KeyOrder::compare`].
    fn put_in_node_at_key(
        &self,
        link: &mut Link<V>,
        key: Key,
        value: V,
        order: KeyOrder,
    ) -> Result<Option<V>, TreeError>;

    /// Removes `key` from the subtree at `link`. Returns the removed value,
    /// or `None` if the key was absent.
    ///
    /// # Errors
    ///
    /// Propagates comparison failures from [`KeyOrder::compare`].
    fn remove_in_node_at_key(&self, link: &mut Link<V>, key: &Key, order: KeyOrder) -> Result<Option<V>, TreeError>;

    /// Removes the smallest entry of the subtree at `link`.
    fn remove_min_node_from(&self, link: &mut Link<V>) -> Option<(Key, V)>;

    /// Removes the largest entry of the subtree at `link`.
    fn remove_max_node_from(&self, link: &mut Link<V>) -> Option<(Key, V)>;
}
