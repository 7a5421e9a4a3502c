/// A zero-based rank into the sorted order of a tree.
///
/// Rank `r` names the key with exactly `r` smaller keys in the tree.
///
/// # Examples
///
/// ```
/// use search_tree::{Rank, SearchTree};
///
/// let mut tree = SearchTree::new();
/// tree.put("b", 20).unwrap();
/// tree.put("a", 10).unwrap();
///
/// assert_eq!(tree[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
