use std::fmt;

/// Which operation produced a tensor.
///
/// A flat label, not a link to the operands: there is no way back from a
/// tensor to the tensors it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    /// Elementwise `a + b`
    Addition,
    /// Elementwise `a - b`
    Subtraction,
    /// Elementwise `a * b`
    Product,
    /// Elementwise `a / b`, zero divisors replaced by the sentinel
    Division,
    /// Elementwise `sin(x)`
    Sin,
    /// Elementwise `e^x`
    Exp,
    /// Built from data (literal, copy or move), not computed.
    #[default]
    None,
}

impl Provenance {
    /// Operator symbol for the binary arithmetic tags.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Provenance::Addition => Some('+'),
            Provenance::Subtraction => Some('-'),
            Provenance::Product => Some('*'),
            Provenance::Division => Some('/'),
            _ => None,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Addition => write!(f, "add"),
            Provenance::Subtraction => write!(f, "sub"),
            Provenance::Product => write!(f, "mul"),
            Provenance::Division => write!(f, "div"),
            Provenance::Sin => write!(f, "sin"),
            Provenance::Exp => write!(f, "exp"),
            Provenance::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(Provenance::default(), Provenance::None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Provenance::Addition.symbol(), Some('+'));
        assert_eq!(Provenance::Subtraction.symbol(), Some('-'));
        assert_eq!(Provenance::Product.symbol(), Some('*'));
        assert_eq!(Provenance::Division.symbol(), Some('/'));
        assert_eq!(Provenance::Sin.symbol(), None);
        assert_eq!(Provenance::None.symbol(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Provenance::Subtraction), "sub");
        assert_eq!(format!("{}", Provenance::Exp), "exp");
        assert_eq!(format!("{}", Provenance::None), "none");
    }
}
