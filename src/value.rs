/*!
The [Value](enum.Value.html) enum: a single cell that is either present or NA.

`Value` mirrors `Option`, but keeps NA distinct in the type signatures of series storage and the
[Coerce](../element/trait.Coerce.html) protocol. Convert freely with `From`.
*/

use std::fmt;

#[cfg(feature = "serialize")]
use serde::ser::{Serialize, Serializer};

use element::NA_STRING;

/// A possibly-missing cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value<T> {
    /// Missing value.
    Na,
    /// Present value.
    Exists(T),
}

impl<T> Default for Value<T> {
    fn default() -> Value<T> {
        Value::Na
    }
}

impl<T> Value<T> {
    /// Returns `true` if a value is present.
    pub fn exists(&self) -> bool {
        match *self {
            Value::Exists(_) => true,
            Value::Na => false,
        }
    }
    /// Returns `true` if the value is missing.
    pub fn is_na(&self) -> bool {
        !self.exists()
    }
    /// The present value, or `default` if NA.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Value::Exists(t) => t,
            Value::Na => default,
        }
    }
    /// The present value, or the result of `f` if NA.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Value::Exists(t) => t,
            Value::Na => f(),
        }
    }
    /// Borrowing view of this value.
    pub fn as_ref(&self) -> Value<&T> {
        match *self {
            Value::Exists(ref t) => Value::Exists(t),
            Value::Na => Value::Na,
        }
    }
    /// Maps a present value with `f`; NA stays NA.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Value<U> {
        match self {
            Value::Exists(t) => Value::Exists(f(t)),
            Value::Na => Value::Na,
        }
    }
    /// Maps a present value with a fallible `f`; a `None` result becomes NA.
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Value<U> {
        match self {
            Value::Exists(t) => f(t).into(),
            Value::Na => Value::Na,
        }
    }
}

impl<'a, T: Clone> Value<&'a T> {
    /// Owned copy of a borrowed value.
    pub fn cloned(self) -> Value<T> {
        self.map(T::clone)
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(opt: Option<T>) -> Value<T> {
        match opt {
            Some(t) => Value::Exists(t),
            None => Value::Na,
        }
    }
}
impl<T> From<Value<T>> for Option<T> {
    fn from(value: Value<T>) -> Option<T> {
        match value {
            Value::Exists(t) => Some(t),
            Value::Na => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Exists(ref t) => write!(f, "{}", t),
            Value::Na => write!(f, "{}", NA_STRING),
        }
    }
}

#[cfg(feature = "serialize")]
impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Exists(ref t) => serializer.serialize_some(t),
            Value::Na => serializer.serialize_none(),
        }
    }
}
