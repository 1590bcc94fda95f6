//! Missing value handling structs.

#[cfg(feature = "serialize")]
use serde::ser::{Serialize, SerializeSeq, Serializer};

use bit_vec::BitVec;

use value::Value;

/// Data vector along with bit-vector-based mask indicating whether or not values exist. Missing
/// positions hold `T::default()` in the data vector.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedData<T> {
    mask: BitVec,
    data: Vec<T>,
}
impl<T> MaskedData<T> {
    /// Create new empty `MaskedData` struct.
    pub fn new() -> MaskedData<T> {
        MaskedData {
            data: vec![],
            mask: BitVec::new(),
        }
    }
    /// Create new empty `MaskedData` struct with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> MaskedData<T> {
        MaskedData {
            data: Vec::with_capacity(capacity),
            mask: BitVec::with_capacity(capacity),
        }
    }
    /// Length of this data vector
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.mask.len(), self.data.len());
        self.data.len()
    }
    /// Returns `true` if this data vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Get the value at the given index. Return `None` if `index` is out of bounds, or a `Value`
    /// object with the value (or indicator that value is missing).
    pub fn get(&self, index: usize) -> Option<Value<&T>> {
        if index >= self.data.len() {
            None
        } else if self.mask[index] {
            Some(Value::Exists(&self.data[index]))
        } else {
            Some(Value::Na)
        }
    }
    /// Returns `true` if the value at `index` is missing. Panics if `index` is out of bounds.
    pub fn is_na(&self, index: usize) -> bool {
        !self.mask[index]
    }
    /// Number of missing values.
    pub fn num_na(&self) -> usize {
        self.mask.iter().filter(|exists| !exists).count()
    }
    /// Iterate over the (possibly missing) values in this data vector.
    pub fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = Value<&'a T>> + 'a> {
        Box::new(
            self.mask
                .iter()
                .zip(self.data.iter())
                .map(|(exists, value)| if exists { Value::Exists(value) } else { Value::Na }),
        )
    }
    /// Iterate over the existing values only, with their positions.
    pub fn iter_existing<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, &'a T)> + 'a> {
        Box::new(
            self.mask
                .iter()
                .zip(self.data.iter())
                .enumerate()
                .filter_map(|(idx, (exists, value))| if exists { Some((idx, value)) } else { None }),
        )
    }
}
impl<T: Default + Clone> MaskedData<T> {
    /// Create new masked data vector with single element.
    pub fn new_with_elem(value: Value<T>) -> MaskedData<T> {
        let mut ret = MaskedData::with_capacity(1);
        ret.push(value);
        ret
    }
    /// Add a new value (or an indication of a missing one) to the data vector
    pub fn push(&mut self, value: Value<T>) {
        match value {
            Value::Exists(v) => {
                self.data.push(v);
                self.mask.push(true);
            }
            Value::Na => {
                self.data.push(T::default());
                self.mask.push(false);
            }
        }
    }
    /// Replace the value at `index`. Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: Value<T>) {
        match value {
            Value::Exists(v) => {
                self.data[index] = v;
                self.mask.set(index, true);
            }
            Value::Na => {
                self.data[index] = T::default();
                self.mask.set(index, false);
            }
        }
    }
    /// Appends clones of all values in `other`.
    pub fn extend_from(&mut self, other: &MaskedData<T>) {
        self.data.extend_from_slice(&other.data);
        for exists in other.mask.iter() {
            self.mask.push(exists);
        }
    }
    /// Create a new masked data vector from the values at `indices`, in the order given. Panics if
    /// any index is out of bounds.
    pub fn gather(&self, indices: &[usize]) -> MaskedData<T> {
        let mut ret = MaskedData::with_capacity(indices.len());
        for &idx in indices {
            ret.data.push(self.data[idx].clone());
            ret.mask.push(self.mask[idx]);
        }
        ret
    }
    /// Create a `MaskedData` struct from a vector of non-NA values. Resulting `MaskedData` struct
    /// will have no `Value::Na` values.
    pub fn from_vec<U: Into<T>>(v: Vec<U>) -> MaskedData<T> {
        MaskedData {
            mask: BitVec::from_elem(v.len(), true),
            data: v.into_iter().map(|value| value.into()).collect(),
        }
    }
}
impl<T: Default + Clone> Default for MaskedData<T> {
    fn default() -> MaskedData<T> {
        MaskedData::new()
    }
}
impl<T: Default + Clone> ::std::iter::FromIterator<Value<T>> for MaskedData<T> {
    fn from_iter<I: IntoIterator<Item = Value<T>>>(iter: I) -> MaskedData<T> {
        let mut ret = MaskedData::new();
        for value in iter {
            ret.push(value);
        }
        ret
    }
}

#[cfg(feature = "serialize")]
impl<T: Serialize> Serialize for MaskedData<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.data.len()))?;
        for value in self.iter() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}
