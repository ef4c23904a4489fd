//! Convenience re-exports for common mlnet-core types.
//!
//! ```rust
//! use mlnet_core::prelude::*;
//! ```

pub use crate::Tensor;
pub use crate::DType;
pub use crate::Element;
pub use crate::Provenance;
pub use crate::TensorError;
pub use crate::Result;
pub use crate::math::{exp, sin};
