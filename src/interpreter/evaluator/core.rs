use log::debug;
use num_bigint::BigInt;

use crate::{
    error::EvalError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An operator waiting for its right-hand operand to be complete.
    Operator(Operator),
    /// An open parenthesis. Acts as a barrier that no operator reduces past.
    LeftParen,
}

/// Stores the state of a single evaluation.
///
/// An `Evaluator` is created empty, fed tokens one by one, and consumed by
/// [`Evaluator::finish`]. Nothing survives between evaluations.
///
/// ## Usage
///
/// Most callers go through [`evaluate`] or [`crate::process`]. Feeding tokens
/// by hand is useful when they arrive incrementally:
///
/// ```
/// use stackcalc::interpreter::{evaluator::core::Evaluator, lexer::tokenize};
///
/// let mut evaluator = Evaluator::new();
/// for token in tokenize("2 + 3 * 4") {
///     evaluator.feed(&token).unwrap();
/// }
/// assert_eq!(evaluator.finish(), Ok(14.into()));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Intermediate values, most recent last.
    pub(super) operands:  Vec<BigInt>,
    /// Operators and open parentheses not yet applied.
    pub(super) operators: Vec<Pending>,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one token.
    ///
    /// - Numbers are pushed onto the operand stack.
    /// - `(` is pushed onto the operator stack.
    /// - `)` applies pending operators back to the matching `(`.
    /// - An operator first applies every pending operator of greater or equal
    ///   precedence, then becomes pending itself.
    ///
    /// # Parameters
    /// - `token`: The next token of the expression.
    ///
    /// # Returns
    /// `Ok(())` if the token was accepted, or the error raised by a reduction
    /// it triggered.
    pub fn feed(&mut self, token: &Token) -> EvalResult<()> {
        match token {
            Token::Number(value) => self.operands.push(value.clone()),
            Token::LeftParen => self.operators.push(Pending::LeftParen),
            Token::RightParen => self.close_group()?,
            Token::Operator(op) => self.push_operator(*op)?,
        }
        Ok(())
    }

    /// Applies all remaining operators and returns the result.
    ///
    /// # Returns
    /// The single value left on the operand stack.
    ///
    /// # Errors
    /// `MalformedExpression` if an open parenthesis was never closed, an
    /// operator lacks operands, or more than one value remains.
    pub fn finish(mut self) -> EvalResult<BigInt> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::LeftParen => return Err(EvalError::MalformedExpression),
            }
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    /// Handles a closing parenthesis.
    ///
    /// Reduces until the matching `(` is popped. Running out of operators
    /// first means the `)` is unmatched.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftParen) => return Ok(()),
                Some(Pending::Operator(op)) => self.reduce(op)?,
                None => return Err(EvalError::MalformedExpression),
            }
        }
    }

    /// Makes `op` pending after applying everything that binds at least as
    /// tightly.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }
}

/// Evaluates a token sequence to a single integer.
///
/// # Parameters
/// - `tokens`: Tokens as produced by [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `MalformedExpression` for unmatched parentheses, missing operands or
///   leftover operands.
/// - `DivisionByZero` when `/` has a zero right-hand operand.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::EvalError,
///     interpreter::{evaluator::core::evaluate, lexer::tokenize},
/// };
///
/// assert_eq!(evaluate(&tokenize("(2 * 4) - 2")), Ok(6.into()));
/// assert_eq!(evaluate(&tokenize("2 +")), Err(EvalError::MalformedExpression));
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<BigInt> {
    let mut evaluator = Evaluator::new();
    for token in tokens {
        evaluator.feed(token)?;
    }
    let result = evaluator.finish();
    debug!("evaluated {} tokens: {result:?}", tokens.len());
    result
}
