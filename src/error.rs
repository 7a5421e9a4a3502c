use alloc::string::String;

use thiserror::Error;

use crate::key::{Key, KeyKind};

/// Errors returned by [`SearchTree`](crate::SearchTree) operations.
///
/// Every error is raised before the tree is mutated, so the tree remains
/// usable after any failed call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TreeError {
    /// A key argument was absent where a key is required.
    #[error("argument to {operation}() is null")]
    NullKey { operation: &'static str },

    /// A key's runtime type differs from the type of the keys already in the tree.
    #[error("key is a {found} but the tree holds {expected} keys")]
    TypeMismatch { expected: KeyKind, found: KeyKind },

    /// The operation needs at least one entry.
    #[error("called {operation}() on an empty tree")]
    EmptyTree { operation: &'static str },

    /// `rank()` was asked about a key the tree does not hold.
    #[error("key {key} does not exist")]
    KeyNotFound { key: Key },

    /// `select_key_for_rank()` was given a rank outside `0..size`.
    #[error("rank {rank} is out of range for a tree of size {size}")]
    InvalidRank { rank: usize, size: usize },

    /// A key could not be parsed while the tree compares keys numerically.
    #[error("cannot parse key {key:?} as a number")]
    ParseError { key: String },
}
