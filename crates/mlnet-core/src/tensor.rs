use std::fmt;

use crate::dtype::{DType, Element};
use crate::provenance::Provenance;

/// A one-dimensional tensor: a flat sequence of floats plus a provenance tag.
///
/// The element count is the tensor's only notion of shape. Arithmetic
/// never mutates its operands; every operation returns a new tensor
/// stamped with the [`Provenance`] of the operation that produced it.
///
/// # Examples
///
/// ```
/// use mlnet_core::{Provenance, Tensor};
///
/// let a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0]);
/// let b = Tensor::from_vec(vec![6.0f32, 7.0, 8.0, 9.0]);
///
/// let c = (&a - &b).unwrap();
/// assert_eq!(c.as_slice(), &[-5.0, -5.0, -5.0, -5.0]);
/// assert_eq!(c.provenance(), Provenance::Subtraction);
/// assert_eq!(c.to_string(), "[-5 -5 -5 -5 ]");
/// ```
pub struct Tensor<T: Element> {
    value: Vec<T>,
    provenance: Provenance,
}

impl<T: Element> Tensor<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty tensor.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a tensor holding a single value.
    pub fn scalar(value: T) -> Self {
        Self::from_vec(vec![value])
    }

    /// Create a tensor by copying a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create a tensor that takes ownership of `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            value: data,
            provenance: Provenance::None,
        }
    }

    /// Build an operation result carrying `provenance`.
    pub(crate) fn with_provenance(data: Vec<T>, provenance: Provenance) -> Self {
        Self {
            value: data,
            provenance,
        }
    }

    /// Move the values out, leaving `self` empty.
    ///
    /// Both the returned tensor and the emptied source are tagged
    /// [`Provenance::None`].
    pub fn take(&mut self) -> Self {
        self.provenance = Provenance::None;
        Self::from_vec(std::mem::take(&mut self.value))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// A copy of the elements.
    pub fn value(&self) -> Vec<T> {
        self.value.clone()
    }

    /// Borrowed view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.value
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.value.get(index).copied()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The operation that produced this tensor.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace the whole element sequence. The provenance is left as is.
    pub fn set_value(&mut self, value: Vec<T>) {
        self.value = value;
    }

    pub fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = provenance;
    }
}

impl<T: Element> Default for Tensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the values only; the copy is tagged [`Provenance::None`].
impl<T: Element> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.value.clone())
    }
}

/// Compares elements and provenance.
impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.provenance == other.provenance && self.value == other.value
    }
}

impl<T: Element> From<T> for Tensor<T> {
    fn from(value: T) -> Self {
        Self::scalar(value)
    }
}

impl<T: Element> From<Vec<T>> for Tensor<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Element> From<&[T]> for Tensor<T> {
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Tensor<T> {
    fn from(data: [T; N]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl<T: Element> FromIterator<T> for Tensor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(len={}, dtype={}, provenance={}, value={:?})",
            self.len(),
            self.dtype(),
            self.provenance,
            self.value,
        )
    }
}

/// Renders as `[1 2 3 ]`: every element followed by a single space.
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for v in &self.value {
            write!(f, "{} ", v)?;
        }
        write!(f, "]")
    }
}
