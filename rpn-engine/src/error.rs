use thiserror::Error;

use crate::token::Operator;

/// Errors raised while evaluating a single token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("insufficient operands for '{op}': need 2, stack holds {depth}")]
    InsufficientOperands { op: Operator, depth: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operator: '{0}'")]
    UnsupportedOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CalcError::InsufficientOperands {
            op: Operator::Add,
            depth: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient operands for '+': need 2, stack holds 1"
        );
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::UnsupportedOperator("%".to_string()).to_string(),
            "unsupported operator: '%'"
        );
    }
}
