//! Element-wise math functions.
//!
//! No domain checks: out-of-range inputs follow IEEE 754 (`exp` overflows to
//! infinity, `sin` of infinity is NaN).

use crate::dtype::Element;
use crate::provenance::Provenance;
use crate::tensor::Tensor;

/// Element-wise sine. The input is left untouched.
pub fn sin<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    unary_op(tensor, Provenance::Sin, T::sin)
}

/// Element-wise exponential: e^x. The input is left untouched.
pub fn exp<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    unary_op(tensor, Provenance::Exp, T::exp)
}

impl<T: Element> Tensor<T> {
    /// Element-wise sine, see [`sin`].
    pub fn sin(&self) -> Tensor<T> {
        sin(self)
    }

    /// Element-wise exponential, see [`exp`].
    pub fn exp(&self) -> Tensor<T> {
        exp(self)
    }
}

/// Apply a scalar function to a copy of `tensor` and tag the result.
fn unary_op<T: Element>(tensor: &Tensor<T>, provenance: Provenance, op: impl Fn(T) -> T) -> Tensor<T> {
    tracing::trace!(op = %provenance, len = tensor.len(), dtype = %tensor.dtype(), "elementwise unary op");
    let mut result = tensor.clone();
    let mapped: Vec<T> = result.as_slice().iter().map(|&v| op(v)).collect();
    result.set_value(mapped);
    result.set_provenance(provenance);
    result
}
