use std::fmt;

use num_traits::Float;

/// Element types supported by mlnet tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE 754 single-precision float
    F32,
    /// 64-bit IEEE 754 double-precision float
    F64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
        }
    }
}

/// Scalar type a [`Tensor`](crate::Tensor) can hold.
///
/// Restricted to floating-point types; the arithmetic and math helpers
/// lean on [`num_traits::Float`] for `sin`, `exp` and the division sentinel.
pub trait Element:
    Float + fmt::Display + fmt::Debug + Default + Send + Sync + 'static
{
    /// Runtime tag for this element type.
    const DTYPE: DType;

    /// Value written in place of `x / 0`: the smallest positive normal value.
    fn division_sentinel() -> Self {
        Self::min_positive_value()
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_dtype() {
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
    }

    #[test]
    fn test_division_sentinel() {
        assert_eq!(f32::division_sentinel(), f32::MIN_POSITIVE);
        assert_eq!(f64::division_sentinel(), f64::MIN_POSITIVE);
        assert!(f32::division_sentinel() > 0.0);
        assert!(f32::division_sentinel().is_normal());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DType::F32), "f32");
        assert_eq!(format!("{}", DType::F64), "f64");
    }
}
