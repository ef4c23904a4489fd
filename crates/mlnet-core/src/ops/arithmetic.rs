//! Element-wise arithmetic operations on tensors.

use std::cell::Cell;

use crate::dtype::Element;
use crate::error::TensorError;
use crate::provenance::Provenance;
use crate::tensor::Tensor;
use crate::Result;

impl<T: Element> Tensor<T> {
    /// Element-wise addition: self + other.
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        binary_op(self, other, Provenance::Addition, |a, b| a + b)
    }

    /// Element-wise subtraction: self - other.
    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        binary_op(self, other, Provenance::Subtraction, |a, b| a - b)
    }

    /// Element-wise multiplication: self * other.
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        binary_op(self, other, Provenance::Product, |a, b| a * b)
    }

    /// Element-wise division: self / other.
    ///
    /// A zero divisor (either sign) yields [`Element::division_sentinel`],
    /// an ordinary finite value rather than NaN or infinity.
    pub fn div(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        let zeros = Cell::new(0usize);
        let result = binary_op(self, other, Provenance::Division, |a, b| {
            if b.is_zero() {
                zeros.set(zeros.get() + 1);
                T::division_sentinel()
            } else {
                a / b
            }
        })?;
        if zeros.get() > 0 {
            tracing::debug!(
                zeros = zeros.get(),
                len = result.len(),
                "div: substituted sentinel for zero divisors"
            );
        }
        Ok(result)
    }
}

/// Apply a binary operation element-wise. Lengths must match exactly.
fn binary_op<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    provenance: Provenance,
    op: impl Fn(T, T) -> T,
) -> Result<Tensor<T>> {
    if a.len() != b.len() {
        tracing::debug!(op = %provenance, lhs = a.len(), rhs = b.len(), "shape mismatch");
        return Err(TensorError::ShapeMismatch {
            op: provenance,
            lhs: a.len(),
            rhs: b.len(),
        });
    }
    tracing::trace!(op = %provenance, len = a.len(), dtype = %a.dtype(), "elementwise binary op");

    let result: Vec<T> = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Ok(Tensor::with_provenance(result, provenance))
}

// Operator overloads. The length check still applies, so the output is a
// `Result` rather than a bare tensor.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident) => {
        impl<T: Element> std::ops::$trait<&Tensor<T>> for &Tensor<T> {
            type Output = Result<Tensor<T>>;
            fn $method(self, rhs: &Tensor<T>) -> Self::Output {
                Tensor::$method(self, rhs)
            }
        }

        impl<T: Element> std::ops::$trait<Tensor<T>> for Tensor<T> {
            type Output = Result<Tensor<T>>;
            fn $method(self, rhs: Tensor<T>) -> Self::Output {
                Tensor::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add);
impl_binary_operator!(Sub, sub);
impl_binary_operator!(Mul, mul);
impl_binary_operator!(Div, div);
