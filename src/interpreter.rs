/// The evaluator module reduces token sequences to a single integer.
///
/// The evaluator walks the tokens left to right, keeping an operand stack and
/// an operator stack. Pending operators are applied as soon as an operator of
/// lower or equal precedence, a closing parenthesis, or the end of input makes
/// them ready. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Matches parentheses and rejects structurally broken input.
/// - Reports division by zero and arithmetic overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for evaluation.
///
/// The lexer reads the raw input and produces number literals, operators and
/// parentheses in order of appearance. Everything else is discarded, so the
/// lexer never fails; all validity checking happens in the evaluator.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Joins digit runs separated only by ignored characters into one literal.
/// - Silently drops whitespace and unrecognized characters.
pub mod lexer;
/// The operator module defines the supported binary operators.
///
/// Each operator knows its symbol and its precedence tier, which the evaluator
/// uses to decide when a pending operation may be applied.
pub mod operator;
