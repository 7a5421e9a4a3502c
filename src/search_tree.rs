use core::cmp::Ordering::{Equal, Greater, Less};

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::raw::Queue;
use crate::structure::{Structure, Unbalanced};
use crate::{IntoKey, Key, KeyOrder, Link, Node, TreeError};

mod iter;
mod order_statistic;
mod range;

pub use iter::Iter;

/// An ordered map from [`Key`]s to values, built on a binary search tree.
///
/// The tree core answers order queries: [`floor`](SearchTree::floor),
/// [`ceil`](SearchTree::ceil), [`rank`](SearchTree::rank),
/// [`select_key_for_rank`](SearchTree::select_key_for_rank), ranges and
/// traversals. Every node caches the size of its subtree, which makes rank
/// and select proportional to the tree height. Where nodes go is up to the
/// [`Structure`] `S`; the default, [`Unbalanced`], is a plain BST.
///
/// Keys are numbers or strings, never both in one tree. The key of the
/// first `put` also fixes the [`KeyOrder`]: if it is a string that parses as a
/// number, every key is compared numerically from then on, so `"2"` sorts
/// before `"10"`.
///
/// # Examples
///
/// ```
/// use search_tree::SearchTree;
///
/// let mut tree = SearchTree::new();
/// for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")] {
///     tree.put(key, value)?;
/// }
///
/// assert_eq!(tree.get(4)?, Some(&"d"));
/// assert_eq!(tree.rank(4)?, 2);
/// assert_eq!(tree.floor(6)?.and_then(|key| key.as_number()), Some(5.0));
/// assert_eq!(tree.ceil(6)?.and_then(|key| key.as_number()), Some(8.0));
///
/// // A `None` value deletes the key.
/// tree.put(4, None)?;
/// assert!(!tree.contains(4)?);
/// # Ok::<(), search_tree::TreeError>(())
/// ```
///
/// Numeric strings:
///
/// ```
/// use search_tree::{Key, KeyOrder, SearchTree};
///
/// let mut tree = SearchTree::new();
/// for key in ["10", "2", "33"] {
///     tree.put(key, ())?;
/// }
///
/// assert_eq!(tree.key_order(), KeyOrder::NumericText);
/// let keys: Vec<&Key> = tree.keys()?;
/// assert_eq!(keys, [&Key::from("2"), &Key::from("10"), &Key::from("33")]);
/// # Ok::<(), search_tree::TreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SearchTree<V, S = Unbalanced> {
    root: Link<V>,
    order: KeyOrder,
    structure: S,
}

impl<V> SearchTree<V> {
    /// Creates an empty tree with the [`Unbalanced`] structure.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_structure(Unbalanced)
    }
}

impl<V, S: Default> Default for SearchTree<V, S> {
    fn default() -> Self {
        Self::with_structure(S::default())
    }
}

impl<V, S> SearchTree<V, S> {
    /// Creates an empty tree whose nodes are placed by `structure`.
    pub const fn with_structure(structure: S) -> Self {
        Self {
            root: None,
            order: KeyOrder::Undecided,
            structure,
        }
    }

    /// Returns the comparison mode, fixed by the first `put`.
    #[must_use]
    pub const fn key_order(&self) -> KeyOrder {
        self.order
    }

    #[must_use]
    pub const fn structure(&self) -> &S {
        &self.structure
    }

    /// Returns the root node, for inspecting the tree shape.
    #[must_use]
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Returns true if the tree holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        Node::size_of(self.root())
    }

    /// Removes every entry. The comparison mode stays as it was.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        trace!("tree cleared");
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn min_key(&self) -> Result<&Key, TreeError> {
        self.root()
            .map(|root| root.min_node().key())
            .ok_or(TreeError::EmptyTree { operation: "min_key" })
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn max_key(&self) -> Result<&Key, TreeError> {
        self.root()
            .map(|root| root.max_node().key())
            .ok_or(TreeError::EmptyTree { operation: "max_key" })
    }

    /// Returns the greatest key less than or equal to `key`, or `None` if
    /// every key is greater.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullKey`], [`TreeError::TypeMismatch`],
    /// [`TreeError::ParseError`] for an unusable key, and
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn floor(&self, key: impl IntoKey) -> Result<Option<&Key>, TreeError> {
        let key = self.admit(key, "floor")?;
        let root = self.root().ok_or(TreeError::EmptyTree { operation: "floor" })?;
        Ok(self.floor_from_node(Some(root), &key)?.map(Node::key))
    }

    /// Returns the least key greater than or equal to `key`, or `None` if
    /// every key is smaller.
    ///
    /// # Errors
    ///
    /// As for [`floor`](SearchTree::floor).
    pub fn ceil(&self, key: impl IntoKey) -> Result<Option<&Key>, TreeError> {
        let key = self.admit(key, "ceil")?;
        let root = self.root().ok_or(TreeError::EmptyTree { operation: "ceil" })?;
        Ok(self.ceil_from_node(Some(root), &key)?.map(Node::key))
    }

    /// Lists the keys breadth first, each level left to right.
    #[must_use]
    pub fn keys_in_level_order(&self) -> Vec<&Key> {
        let mut keys = Queue::new();
        let mut nodes = Queue::new();
        nodes.enqueue(self.root());

        while let Some(node) = nodes.dequeue() {
            let Some(node) = node else {
                continue;
            };
            keys.enqueue(node.key());
            nodes.enqueue(node.left());
            nodes.enqueue(node.right());
        }

        keys.into_iter().collect()
    }

    /// Returns the number of edges on the longest root-to-leaf path: `-1`
    /// for an empty tree, `0` for a single node.
    #[must_use]
    pub fn height(&self) -> isize {
        height_from_node(self.root())
    }

    /// Resolves a caller's key and checks it against the tree's key kind and
    /// comparison mode.
    fn admit(&self, key: impl IntoKey, operation: &'static str) -> Result<Key, TreeError> {
        let key = key.into_key().ok_or(TreeError::NullKey { operation })?;
        if let Some(root) = self.root() {
            let expected = root.key().kind();
            if key.kind() != expected {
                return Err(TreeError::TypeMismatch {
                    expected,
                    found: key.kind(),
                });
            }
        }
        self.order.admit(&key)?;
        Ok(key)
    }

    fn floor_from_node<'a>(&self, node: Option<&'a Node<V>>, key: &Key) -> Result<Option<&'a Node<V>>, TreeError> {
        let mut current = node;
        let mut floor = None;
        while let Some(node) = current {
            match self.order.compare(key, node.key())? {
                Equal => return Ok(Some(node)),
                Less => current = node.left(),
                // `node` is the floor unless its right subtree holds a closer one.
                Greater => {
                    floor = Some(node);
                    current = node.right();
                }
            }
        }
        Ok(floor)
    }

    fn ceil_from_node<'a>(&self, node: Option<&'a Node<V>>, key: &Key) -> Result<Option<&'a Node<V>>, TreeError> {
        let mut current = node;
        let mut ceil = None;
        while let Some(node) = current {
            match self.order.compare(key, node.key())? {
                Equal => return Ok(Some(node)),
                Greater => current = node.right(),
                Less => {
                    ceil = Some(node);
                    current = node.left();
                }
            }
        }
        Ok(ceil)
    }
}

impl<V, S: Structure<V>> SearchTree<V, S> {
    /// Returns true if the tree holds `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullKey`] for an absent key, [`TreeError::TypeMismatch`]
    /// or [`TreeError::ParseError`] for a key this tree cannot compare.
    pub fn contains(&self, key: impl IntoKey) -> Result<bool, TreeError> {
        let key = self.admit(key, "contains")?;
        self.contains_admitted(&key)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// As for [`contains`](SearchTree::contains).
    pub fn get(&self, key: impl IntoKey) -> Result<Option<&V>, TreeError> {
        let key = self.admit(key, "get")?;
        self.structure.get_from_node_at_key(self.root(), &key, self.order)
    }

    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// A `None` value removes `key` instead, returning the removed value. The
    /// first `put` on a fresh tree fixes its [`KeyOrder`], whatever the value.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullKey`] for an absent key, [`TreeError::TypeMismatch`]
    /// or [`TreeError::ParseError`] for a key this tree cannot compare. The
    /// tree is unchanged on error.
    pub fn put(&mut self, key: impl IntoKey, value: impl Into<Option<V>>) -> Result<Option<V>, TreeError> {
        let key = self.admit(key, "put")?;
        if !self.order.is_decided() {
            self.order = KeyOrder::for_first_key(&key);
            debug!("first key {key} fixes the comparison mode to {:?}", self.order);
        }

        let Some(value) = value.into() else {
            return self.remove_admitted(&key);
        };
        trace!("put {key}");
        self.structure.put_in_node_at_key(&mut self.root, key, value, self.order)
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    ///
    /// # Errors
    ///
    /// As for [`put`](SearchTree::put).
    pub fn remove(&mut self, key: impl IntoKey) -> Result<Option<V>, TreeError> {
        let key = self.admit(key, "remove")?;
        self.remove_admitted(&key)
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn remove_min(&mut self) -> Result<(Key, V), TreeError> {
        let entry = self
            .structure
            .remove_min_node_from(&mut self.root)
            .ok_or(TreeError::EmptyTree { operation: "remove_min" })?;
        self.trace_removal(&entry.0);
        Ok(entry)
    }

    /// Removes and returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn remove_max(&mut self) -> Result<(Key, V), TreeError> {
        let entry = self
            .structure
            .remove_max_node_from(&mut self.root)
            .ok_or(TreeError::EmptyTree { operation: "remove_max" })?;
        self.trace_removal(&entry.0);
        Ok(entry)
    }

    fn contains_admitted(&self, key: &Key) -> Result<bool, TreeError> {
        Ok(self.structure.get_from_node_at_key(self.root(), key, self.order)?.is_some())
    }

    fn remove_admitted(&mut self, key: &Key) -> Result<Option<V>, TreeError> {
        if self.root.is_none() {
            return Ok(None);
        }
        let removed = self.structure.remove_in_node_at_key(&mut self.root, key, self.order)?;
        if removed.is_some() {
            self.trace_removal(key);
        }
        Ok(removed)
    }

    fn trace_removal(&self, key: &Key) {
        trace!("removed {key}");
        if self.root.is_none() {
            trace!("tree is now empty");
        }
    }
}

impl<V, S> Drop for SearchTree<V, S> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

/// Drops a subtree one node at a time, so a degenerate tree of any depth
/// does not exhaust the stack through nested `Box` drops.
fn dismantle<V>(root: Link<V>) {
    let mut pending: Vec<Box<Node<V>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left_mut().take());
        pending.extend(node.right_mut().take());
    }
}

/// Counts levels breadth first.
fn height_from_node<V>(node: Option<&Node<V>>) -> isize {
    let mut height = -1;
    let mut level: Vec<&Node<V>> = node.into_iter().collect();
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    height
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn scenario() -> SearchTree<&'static str> {
        let mut tree = SearchTree::new();
        for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")] {
            tree.put(key, value).unwrap();
        }
        tree
    }

    fn numbers(keys: &[&Key]) -> Vec<f64> {
        keys.iter().map(|key| key.as_number().unwrap()).collect()
    }

    #[test]
    fn empty_tree() {
        let tree: SearchTree<i32> = SearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.key_order(), KeyOrder::Undecided);
        assert!(tree.keys_in_level_order().is_empty());
        assert_eq!(tree.min_key(), Err(TreeError::EmptyTree { operation: "min_key" }));
        assert_eq!(tree.max_key(), Err(TreeError::EmptyTree { operation: "max_key" }));
        assert_eq!(tree.floor(1), Err(TreeError::EmptyTree { operation: "floor" }));
        assert_eq!(tree.ceil(1), Err(TreeError::EmptyTree { operation: "ceil" }));
        assert_eq!(tree.get(1), Ok(None));
    }

    #[test]
    fn single_node_has_height_zero() {
        let mut tree = SearchTree::new();
        tree.put("only", 1).unwrap();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.min_key(), tree.max_key());
    }

    #[test]
    fn scenario_queries() {
        let tree = scenario();
        assert_eq!(tree.size(), 5);
        assert_eq!(tree.min_key(), Ok(&Key::from(1)));
        assert_eq!(tree.max_key(), Ok(&Key::from(8)));
        assert_eq!(tree.floor(6), Ok(Some(&Key::from(5))));
        assert_eq!(tree.ceil(6), Ok(Some(&Key::from(8))));
        assert_eq!(tree.floor(0), Ok(None));
        assert_eq!(tree.ceil(9), Ok(None));
        assert_eq!(tree.floor(4), Ok(Some(&Key::from(4))));
        assert_eq!(tree.ceil(4), Ok(Some(&Key::from(4))));
        assert_eq!(numbers(&tree.keys_in_level_order()), vec![5.0, 3.0, 8.0, 1.0, 4.0]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn put_replaces_without_growing() {
        let mut tree = scenario();
        assert_eq!(tree.put(3, "C"), Ok(Some("c")));
        assert_eq!(tree.size(), 5);
        assert_eq!(tree.get(3), Ok(Some(&"C")));
    }

    #[test]
    fn put_none_removes() {
        let mut tree = scenario();
        assert_eq!(tree.put(3, None), Ok(Some("c")));
        assert_eq!(tree.contains(3), Ok(false));
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.put(42, None), Ok(None));
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn null_keys_are_rejected() {
        let mut tree = scenario();
        assert_eq!(tree.contains(None::<Key>), Err(TreeError::NullKey { operation: "contains" }));
        assert_eq!(tree.get(None::<i32>), Err(TreeError::NullKey { operation: "get" }));
        assert_eq!(tree.put(None::<i32>, "x"), Err(TreeError::NullKey { operation: "put" }));
        assert_eq!(tree.remove(None::<i32>), Err(TreeError::NullKey { operation: "remove" }));
        assert_eq!(tree.floor(None::<i32>), Err(TreeError::NullKey { operation: "floor" }));
        assert_eq!(tree.ceil(None::<i32>), Err(TreeError::NullKey { operation: "ceil" }));
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn mismatched_key_kinds_are_rejected() {
        let mut tree: SearchTree<i32> = SearchTree::new();
        tree.put("five", 5).unwrap();

        let mismatch = TreeError::TypeMismatch {
            expected: crate::KeyKind::Text,
            found: crate::KeyKind::Number,
        };
        assert_eq!(tree.put(5, 5), Err(mismatch.clone()));
        assert_eq!(tree.contains(5), Err(mismatch.clone()));
        assert_eq!(tree.floor(5), Err(mismatch));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn mode_is_decided_once_by_the_first_insertion() {
        let mut tree = SearchTree::new();
        tree.put(String::from("ten"), ()).unwrap();
        tree.put("9", ()).unwrap();
        tree.put("10", ()).unwrap();
        assert_eq!(tree.key_order(), KeyOrder::Lexicographic);
        assert_eq!(tree.min_key(), Ok(&Key::from("10")));

        let mut tree = SearchTree::new();
        tree.put("10", ()).unwrap();
        assert_eq!(tree.key_order(), KeyOrder::NumericText);
        assert_eq!(tree.put("ten", ()), Err(TreeError::ParseError { key: "ten".into() }));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn deleting_from_a_fresh_tree_decides_the_mode() {
        let mut tree: SearchTree<()> = SearchTree::new();
        assert_eq!(tree.put("ten", None), Ok(None));
        assert_eq!(tree.key_order(), KeyOrder::Lexicographic);
        assert!(tree.is_empty());

        tree.put("10", ()).unwrap();
        tree.put("9", ()).unwrap();
        assert_eq!(tree.key_order(), KeyOrder::Lexicographic);
        assert_eq!(tree.keys(), Ok(vec![&Key::from("10"), &Key::from("9")]));
    }

    #[test]
    fn remove_does_not_decide_the_mode() {
        let mut tree: SearchTree<()> = SearchTree::new();
        assert_eq!(tree.remove("ten"), Ok(None));
        assert_eq!(tree.key_order(), KeyOrder::Undecided);
    }

    #[test]
    fn signed_zeros_are_one_key() {
        let mut tree = SearchTree::new();
        tree.put("0", 1).unwrap();
        assert_eq!(tree.put("-0", 2), Ok(Some(1)));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.get(" -0 "), Ok(Some(&2)));

        let mut tree = SearchTree::new();
        tree.put(0.0, 1).unwrap();
        assert_eq!(tree.put(-0.0, 2), Ok(Some(1)));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.rank(-0.0), Ok(0));
    }

    #[test]
    fn mode_survives_emptying_the_tree() {
        let mut tree = SearchTree::new();
        tree.put("1", 1).unwrap();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.key_order(), KeyOrder::NumericText);
        assert_eq!(tree.put(1, 1), Err(TreeError::ParseError { key: "1".into() }));
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_min_and_max() {
        let mut tree = scenario();
        assert_eq!(tree.remove_min(), Ok((Key::from(1), "a")));
        assert_eq!(tree.remove_max(), Ok((Key::from(8), "h")));
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.min_key(), Ok(&Key::from(3)));
        assert_eq!(tree.max_key(), Ok(&Key::from(5)));

        let mut empty: SearchTree<()> = SearchTree::default();
        assert_eq!(empty.remove_min(), Err(TreeError::EmptyTree { operation: "remove_min" }));
        assert_eq!(empty.remove_max(), Err(TreeError::EmptyTree { operation: "remove_max" }));
    }

    #[test]
    fn removing_the_last_node_empties_the_tree() {
        let mut tree = SearchTree::new();
        tree.put(1, 'a').unwrap();
        assert_eq!(tree.remove(1), Ok(Some('a')));
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.remove(1), Ok(None));
    }

    #[test]
    fn level_order_skips_missing_children() {
        let mut tree = SearchTree::new();
        for key in [4, 2, 6, 3, 5] {
            tree.put(key, ()).unwrap();
        }
        assert_eq!(numbers(&tree.keys_in_level_order()), vec![4.0, 2.0, 6.0, 3.0, 5.0]);
    }
}
