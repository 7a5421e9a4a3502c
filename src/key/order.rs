use alloc::string::ToString;
use core::cmp::Ordering;

use super::Key;
use crate::TreeError;

/// How a tree orders its keys.
///
/// A tree starts [`Undecided`](KeyOrder::Undecided) and settles on one of the
/// other two modes at its first `put`. The mode is never revisited: a tree
/// whose first key was `"10"` compares every later key numerically, and a tree
/// whose first key was `"ten"` compares `"10"` and `"9"` as plain strings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum KeyOrder {
    /// No key has been inserted yet.
    #[default]
    Undecided,
    /// Numbers by value, strings lexically.
    Lexicographic,
    /// Every key is a numeric string, parsed to `f64` before comparison.
    NumericText,
}

impl KeyOrder {
    /// Picks the mode implied by the first key put into a tree.
    #[must_use]
    pub fn for_first_key(key: &Key) -> Self {
        if key.parse_number().is_some() {
            KeyOrder::NumericText
        } else {
            KeyOrder::Lexicographic
        }
    }

    /// Returns true once the first `put` has fixed the mode.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, KeyOrder::Undecided)
    }

    /// Compares two keys under this mode.
    ///
    /// # Errors
    ///
    /// - [`TreeError::TypeMismatch`] if a number is compared with a string.
    /// - [`TreeError::ParseError`] in numeric-text mode if either key does
    ///   not parse as a finite float.
    pub fn compare(self, a: &Key, b: &Key) -> Result<Ordering, TreeError> {
        match self {
            KeyOrder::NumericText => Ok(compare_numbers(parse(a)?, parse(b)?)),
            KeyOrder::Undecided | KeyOrder::Lexicographic => match (a, b) {
                (Key::Number(a), Key::Number(b)) => Ok(compare_numbers(*a, *b)),
                (Key::Text(a), Key::Text(b)) => Ok(a.cmp(b)),
                _ => Err(TreeError::TypeMismatch {
                    expected: b.kind(),
                    found: a.kind(),
                }),
            },
        }
    }

    /// Checks that `key` can be compared under this mode.
    ///
    /// # Errors
    ///
    /// [`TreeError::ParseError`] in numeric-text mode if `key` does not parse.
    pub fn admit(self, key: &Key) -> Result<(), TreeError> {
        match self {
            KeyOrder::NumericText => parse(key).map(drop),
            KeyOrder::Undecided | KeyOrder::Lexicographic => Ok(()),
        }
    }
}

/// Total order on floats in which `-0.0` and `0.0` are the same number.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    fn unsigned_zero(number: f64) -> f64 {
        if number == 0.0 { 0.0 } else { number }
    }
    unsigned_zero(a).total_cmp(&unsigned_zero(b))
}

fn parse(key: &Key) -> Result<f64, TreeError> {
    key.parse_number().ok_or_else(|| TreeError::ParseError { key: key.to_string() })
}
