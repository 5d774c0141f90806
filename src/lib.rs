//! # stackcalc
//!
//! stackcalc evaluates integer arithmetic expressions written with `+`, `-`,
//! `*`, `/` and parentheses. Input text is tokenized, then reduced to a single
//! value with an operand stack and an operator stack. Integers have arbitrary
//! precision, so results are always exact.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every failure that evaluating an expression can
/// produce. Tokenizing is permissive and never fails, so all errors originate
/// in the evaluator.
///
/// # Responsibilities
/// - Distinguishes structural defects from arithmetic failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenizing and evaluating expressions.
///
/// This module ties together the lexer, the operator definitions and the
/// two-stack evaluator.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Reduces tokens to a value, respecting precedence and parentheses.
pub mod interpreter;

pub use error::EvalError;
pub use interpreter::{
    evaluator::core::{EvalResult, evaluate},
    lexer::{Token, tokenize},
    operator::Operator,
};
pub use num_bigint::BigInt;

/// Evaluates an expression given as source text.
///
/// Equivalent to `evaluate(&tokenize(input))`. Errors from the evaluator are
/// returned unchanged.
///
/// # Errors
/// Returns `MalformedExpression` for structurally invalid input and
/// `DivisionByZero` when dividing by zero.
///
/// # Examples
/// ```
/// use stackcalc::{BigInt, EvalError, process};
///
/// assert_eq!(process("2 + 3 * 4"), Ok(BigInt::from(14)));
/// assert_eq!(process("(2 * 4) - 2"), Ok(BigInt::from(6)));
/// assert_eq!(process("5 / 0"), Err(EvalError::DivisionByZero));
/// assert_eq!(process("(2 + 3"), Err(EvalError::MalformedExpression));
/// ```
pub fn process(input: &str) -> EvalResult<BigInt> {
    evaluate(&tokenize(input))
}
