/// Evaluation errors.
///
/// Defines every failure the evaluator can report: structural defects in the
/// token sequence and division by zero. Tokenizing never fails, so this is the
/// only error type of the crate.
pub mod eval_error;

pub use eval_error::EvalError;
