//! An ordered key/value binary search tree for Rust.
//!
//! This crate provides [`SearchTree`], an ordered map over number or string
//! [`Key`]s with O(height) order-statistic and neighbor queries:
//!
//! - [`floor`](SearchTree::floor) / [`ceil`](SearchTree::ceil) - the nearest key at or below / above a probe
//! - [`rank`](SearchTree::rank) - the number of keys smaller than a key
//! - [`select_key_for_rank`](SearchTree::select_key_for_rank) - the key at a sorted position
//! - [`keys_in_range`](SearchTree::keys_in_range) - the keys between two bounds
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the smallest entry's value
//!
//! # Example
//!
//! ```
//! use search_tree::{Key, Rank, SearchTree};
//!
//! let mut scores = SearchTree::new();
//! scores.put("Alice", 100)?;
//! scores.put("Bob", 85)?;
//! scores.put("Carol", 92)?;
//!
//! assert_eq!(scores.get("Bob")?, Some(&85));
//! assert_eq!(scores.size(), 3);
//!
//! // Keys are sorted alphabetically.
//! assert_eq!(scores.select_key_for_rank(1)?, &Key::from("Bob"));
//! assert_eq!(scores.rank("Carol")?, 2);
//! assert_eq!(scores[Rank(0)], 100);
//! # Ok::<(), search_tree::TreeError>(())
//! ```
//!
//! # Keys and comparison
//!
//! A tree holds number keys or string keys, never both. The key of the
//! first `put` fixes the [`KeyOrder`] for the lifetime of the tree: if it is a
//! string that parses as a finite number, every key is parsed and compared
//! numerically; otherwise keys compare as given.
//!
//! # Structure
//!
//! The tree core answers queries by walking nodes that cache their subtree
//! sizes. Placement of nodes is delegated to a [`Structure`]; the crate ships
//! [`Unbalanced`], a plain binary search tree.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Fallible by value** - every contract violation is a [`TreeError`], raised before any mutation

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod key;
mod order_statistic;
mod raw;

pub mod search_tree;
pub mod structure;

pub use error::TreeError;
pub use key::order::KeyOrder;
pub use key::{IntoKey, Key, KeyKind};
pub use order_statistic::Rank;
pub use raw::{Link, Node};
pub use search_tree::SearchTree;
pub use structure::{Structure, Unbalanced};
