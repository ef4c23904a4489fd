use crate::provenance::Provenance;

/// Errors raised by tensor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    /// The operands of a binary operation have different element counts.
    #[error(
        "{op}: tensor a's shape ({lhs}) is different than tensor b's shape ({rhs}). \
         Both tensors should have the same shape"
    )]
    ShapeMismatch { op: Provenance, lhs: usize, rhs: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = TensorError::ShapeMismatch {
            op: Provenance::Addition,
            lhs: 3,
            rhs: 2,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("add:"));
        assert!(msg.contains("(3)"));
        assert!(msg.contains("(2)"));
    }
}
