use alloc::string::String;
use core::fmt;

pub(crate) mod order;

/// A key in a [`SearchTree`](crate::SearchTree): either a number or a string.
///
/// All keys in one tree share the same [`KeyKind`]. The kind is fixed by the
/// key at the root; offering a key of the other kind fails with
/// [`TreeError::TypeMismatch`](crate::TreeError::TypeMismatch).
///
/// # Examples
///
/// ```
/// use search_tree::{Key, KeyKind};
///
/// assert_eq!(Key::from(5), Key::Number(5.0));
/// assert_eq!(Key::from("apple").kind(), KeyKind::Text);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Number(f64),
    Text(String),
}

/// The runtime type of a [`Key`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyKind {
    Number,
    Text,
}

impl Key {
    /// Returns the runtime type of this key.
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        match self {
            Key::Number(_) => KeyKind::Number,
            Key::Text(_) => KeyKind::Text,
        }
    }

    /// Returns the number if this is a [`Key::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Key::Number(number) => Some(*number),
            Key::Text(_) => None,
        }
    }

    /// Returns the string if this is a [`Key::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Number(_) => None,
            Key::Text(text) => Some(text),
        }
    }

    /// Parses a text key as a finite float, ignoring surrounding whitespace.
    ///
    /// Returns `None` for number keys and for strings that do not parse in full.
    pub(crate) fn parse_number(&self) -> Option<f64> {
        self.as_text()
            .and_then(|text| text.trim().parse::<f64>().ok())
            .filter(|number| number.is_finite())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Number(number) => write!(f, "{number}"),
            Key::Text(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::Number => "number",
            KeyKind::Text => "string",
        })
    }
}

/// Conversion into an optional [`Key`].
///
/// Every tree operation that takes a key accepts `impl IntoKey`. `None`
/// stands for an absent key and makes those operations fail with
/// [`TreeError::NullKey`](crate::TreeError::NullKey).
///
/// # Examples
///
/// ```
/// use search_tree::{IntoKey, Key};
///
/// assert_eq!(3.5f64.into_key(), Some(Key::Number(3.5)));
/// assert_eq!(Some("x").into_key(), Some(Key::Text("x".into())));
/// assert_eq!(None::<Key>.into_key(), None);
/// ```
pub trait IntoKey {
    /// Converts `self` into a key, or `None` for an absent key.
    fn into_key(self) -> Option<Key>;
}

impl IntoKey for Key {
    fn into_key(self) -> Option<Key> {
        Some(self)
    }
}

impl IntoKey for &Key {
    fn into_key(self) -> Option<Key> {
        Some(self.clone())
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl IntoKey for String {
    fn into_key(self) -> Option<Key> {
        Some(Key::Text(self))
    }
}

impl IntoKey for &String {
    fn into_key(self) -> Option<Key> {
        Some(Key::Text(self.clone()))
    }
}

impl<T: IntoKey> IntoKey for Option<T> {
    fn into_key(self) -> Option<Key> {
        self.and_then(IntoKey::into_key)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(String::from(text))
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}

macro_rules! number_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(number: $ty) -> Self {
                    Key::Number(number as f64)
                }
            }

            impl IntoKey for $ty {
                fn into_key(self) -> Option<Key> {
                    Some(Key::from(self))
                }
            }
        )*
    };
}

number_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
