use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use super::SearchTree;
use crate::raw::Queue;
use crate::{Key, Node};

/// An iterator over the entries of a [`SearchTree`](crate::SearchTree), in
/// ascending key order.
///
/// This `struct` is created by the [`iter`](crate::SearchTree::iter) and
/// [`range`](crate::SearchTree::range) methods. The entries are collected
/// when the iterator is created; it runs once, front to back.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    nodes: vec_deque::IntoIter<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(nodes: Queue<&'a Node<V>>) -> Self {
        Self {
            nodes: nodes.into_iter(),
        }
    }
}

impl<'a, V, S> IntoIterator for &'a SearchTree<V, S> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut nodes = Queue::new();
        in_order(self.root(), &mut nodes);
        Iter::new(nodes)
    }
}

/// Queues every node under `node` in key order. Needs no comparisons.
fn in_order<'a, V>(node: Option<&'a Node<V>>, queue: &mut Queue<&'a Node<V>>) {
    let mut pending = Vec::new();
    let mut current = node;
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }
        let Some(node) = pending.pop() else {
            return;
        };
        queue.enqueue(node);
        current = node.right();
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| (node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
