/// Core evaluation logic and stack management.
///
/// Contains the `Evaluator`, which owns the operand and operator stacks and
/// drives the left-to-right precedence algorithm.
pub mod core;

/// Arithmetic on operands.
///
/// Applies a single operator to two integers with overflow and division checks,
/// and performs the reduction step on the evaluator's stacks.
pub mod arithmetic;
