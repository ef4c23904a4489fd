//! Tensor operations: elementwise arithmetic and math functions.
//!
//! All operations return new tensors (functional style) stamped with the
//! [`Provenance`](crate::Provenance) of the operation.

pub mod arithmetic;
pub mod math;
