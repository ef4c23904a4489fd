//! # mlnet-core
//!
//! A minimal one-dimensional tensor, the foundation for a toy
//! computation graph.
//!
//! Provides the `Tensor<T>` type with:
//! - `f32` and `f64` element types
//! - Elementwise `+ - * /` with a strict equal-length check
//! - `sin` and `exp` math helpers
//! - A provenance tag naming the operation that produced each tensor

pub mod dtype;
pub mod provenance;
pub mod tensor;
pub mod ops;
pub mod error;
pub mod prelude;

pub use dtype::{DType, Element};
pub use provenance::Provenance;
pub use tensor::Tensor;
pub use error::TensorError;
pub use ops::math;

pub type Result<T> = std::result::Result<T, TensorError>;
