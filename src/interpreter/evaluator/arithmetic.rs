use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operator::Operator,
    },
};

impl Evaluator {
    /// Applies `op` to the two most recent operands.
    ///
    /// The most recently pushed value is the right-hand operand, the one below
    /// it the left-hand operand. The result replaces both.
    ///
    /// # Parameters
    /// - `op`: The operator just popped from the operator stack.
    ///
    /// # Errors
    /// `MalformedExpression` if fewer than two operands are available, or any
    /// error raised by [`apply`].
    pub(super) fn reduce(&mut self, op: Operator) -> EvalResult<()> {
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::MalformedExpression);
        };
        let value = apply(op, &lhs, &rhs)?;
        trace!("reduced {lhs} {op} {rhs} = {value}");
        self.operands.push(value);
        Ok(())
    }
}

/// Computes `lhs op rhs` exactly.
///
/// Division truncates toward zero.
///
/// # Parameters
/// - `op`: The operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
///
/// # Returns
/// The computed value, or `DivisionByZero` for a zero divisor.
///
/// # Example
/// ```
/// use stackcalc::{
///     BigInt,
///     error::EvalError,
///     interpreter::{evaluator::arithmetic::apply, operator::Operator},
/// };
///
/// let (three, eight) = (BigInt::from(3), BigInt::from(8));
/// assert_eq!(apply(Operator::Sub, &three, &eight), Ok(BigInt::from(-5)));
/// assert_eq!(apply(Operator::Div, &BigInt::from(-7), &BigInt::from(2)), Ok(BigInt::from(-3)));
/// assert_eq!(apply(Operator::Div, &three, &BigInt::from(0)), Err(EvalError::DivisionByZero));
/// ```
pub fn apply(op: Operator, lhs: &BigInt, rhs: &BigInt) -> EvalResult<BigInt> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => {
            if rhs.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            Ok(lhs / rhs)
        },
    }
}
