use thiserror::Error;

/// Represents all errors that can occur while evaluating a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The tokens cannot be reduced to exactly one value: an unmatched
    /// parenthesis, an operator without two operands, or leftover operands.
    #[error("Malformed expression.")]
    MalformedExpression,
    /// A `/` was applied with a right-hand operand of zero.
    #[error("Division by zero.")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::EvalError;

    #[test]
    fn messages_match_cli_output() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero.");
        assert_eq!(EvalError::MalformedExpression.to_string(), "Malformed expression.");
    }
}
