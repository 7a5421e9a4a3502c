use alloc::boxed::Box;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::mem;

use super::Structure;
use crate::{Key, KeyOrder, Link, Node, TreeError};

/// A plain binary search tree: no rebalancing at all.
///
/// Inserted keys become leaves; deletion uses Hibbard's method, promoting the
/// successor (the minimum of the right subtree) into the removed position.
/// The tree shape therefore depends on insertion order, and sorted input
/// degrades it to a list. Every hook walks the tree in a loop, so a list of
/// any length costs time but not stack.
///
/// # Examples
///
/// ```
/// use search_tree::{SearchTree, Unbalanced};
///
/// let mut tree = SearchTree::with_structure(Unbalanced);
/// for key in [5, 3, 8, 1, 4] {
///     tree.put(key, key * 10).unwrap();
/// }
/// assert_eq!(tree.height(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unbalanced;

impl<V> Structure<V> for Unbalanced {
    fn get_from_node_at_key<'a>(
        &self,
        node: Option<&'a Node<V>>,
        key: &Key,
        order: KeyOrder,
    ) -> Result<Option<&'a V>, TreeError> {
        let mut current = node;
        while let Some(node) = current {
            match order.compare(key, node.key())? {
                Less => current = node.left(),
                Greater => current = node.right(),
                Equal => return Ok(Some(node.value())),
            }
        }
        Ok(None)
    }

    fn put_in_node_at_key(
        &self,
        link: &mut Link<V>,
        key: Key,
        value: V,
        order: KeyOrder,
    ) -> Result<Option<V>, TreeError> {
        let mut current = &mut *link;
        while let Some(node) = current {
            match order.compare(&key, node.key())? {
                Less => current = node.left_mut(),
                Greater => current = node.right_mut(),
                Equal => return Ok(Some(mem::replace(node.value_mut(), value))),
            }
        }

        // The key is new: every node on the path gains one descendant. The
        // comparisons repeat the ones above, so none of them fails.
        let mut current = link;
        while let Some(node) = current {
            let ordering = order.compare(&key, node.key())?;
            node.grow();
            current = if ordering.is_lt() { node.left_mut() } else { node.right_mut() };
        }
        *current = Some(Box::new(Node::new(key, value)));
        Ok(None)
    }

    fn remove_in_node_at_key(&self, link: &mut Link<V>, key: &Key, order: KeyOrder) -> Result<Option<V>, TreeError> {
        if self.get_from_node_at_key(link.as_deref(), key, order)?.is_none() {
            return Ok(None);
        }

        // The key is present: every node above it loses one descendant.
        let mut current = link;
        loop {
            let Some(node) = current.as_deref() else {
                return Ok(None);
            };
            let ordering = order.compare(key, node.key())?;
            if ordering.is_eq() {
                break;
            }
            let Some(node) = current.as_deref_mut() else {
                return Ok(None);
            };
            node.shrink();
            current = if ordering.is_lt() { node.left_mut() } else { node.right_mut() };
        }
        Ok(unlink(current).map(|(_, value)| value))
    }

    fn remove_min_node_from(&self, link: &mut Link<V>) -> Option<(Key, V)> {
        detach_min(link).map(|node| node.into_entry())
    }

    fn remove_max_node_from(&self, link: &mut Link<V>) -> Option<(Key, V)> {
        detach_max(link).map(|node| node.into_entry())
    }
}

/// Removes the root of the subtree at `link`, splicing its children back in.
fn unlink<V>(link: &mut Link<V>) -> Option<(Key, V)> {
    let mut node = link.take()?;
    let left = node.left_mut().take();
    let right = node.right_mut().take();

    *link = match (left, right) {
        (left, None) => left,
        (None, right) => right,
        (left, mut right) => {
            detach_min(&mut right).map(|mut successor| {
                *successor.left_mut() = left;
                *successor.right_mut() = right;
                successor.update_size();
                successor
            })
        }
    };

    Some(node.into_entry())
}

/// Detaches the leftmost node below `link`, leaving its right subtree in its place.
fn detach_min<V>(mut link: &mut Link<V>) -> Option<Box<Node<V>>> {
    while link.as_deref()?.left().is_some() {
        let node = link.as_deref_mut()?;
        node.shrink();
        link = node.left_mut();
    }

    let mut min = link.take()?;
    *link = min.right_mut().take();
    min.update_size();
    Some(min)
}

/// Detaches the rightmost node below `link`, leaving its left subtree in its place.
fn detach_max<V>(mut link: &mut Link<V>) -> Option<Box<Node<V>>> {
    while link.as_deref()?.right().is_some() {
        let node = link.as_deref_mut()?;
        node.shrink();
        link = node.right_mut();
    }

    let mut max = link.take()?;
    *link = max.left_mut().take();
    max.update_size();
    Some(max)
}
