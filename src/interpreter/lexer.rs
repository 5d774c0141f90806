use log::trace;
use logos::Logos;
use num_bigint::BigInt;

use crate::interpreter::operator::Operator;

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens are produced by [`tokenize`] in the order they appear in the input
/// and consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A non-negative integer literal such as `42`. Literals have no size
    /// limit.
    Number(BigInt),
    /// A binary operator: `+`, `-`, `*` or `/`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Raw lexemes recognized by the scanner.
///
/// Digit runs are reported individually; [`tokenize`] decides whether
/// neighbouring runs belong to the same literal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// A run of decimal digits.
    #[regex(r"[0-9]+")]
    Digits,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Converts source text into a sequence of tokens.
///
/// Digits accumulate into a number literal until one of `+ - * / ( )` or the
/// end of input is reached. Any other character, whitespace included, is
/// discarded without ending the literal, so `"1 2"` yields a single `12`.
/// This function never fails: structural problems are left to the evaluator.
///
/// # Parameters
/// - `input`: The expression source.
///
/// # Returns
/// The tokens in left-to-right order.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// assert_eq!(tokenize("3 + 4"),
///            vec![Token::Number(3.into()), Token::Operator(Operator::Add), Token::Number(4.into())]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = None;
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Digits) => {
                accumulate(&mut pending, lexer.slice());
                continue;
            },
            Ok(Lexeme::Plus) => Token::Operator(Operator::Add),
            Ok(Lexeme::Minus) => Token::Operator(Operator::Sub),
            Ok(Lexeme::Star) => Token::Operator(Operator::Mul),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Div),
            Ok(Lexeme::LParen) => Token::LeftParen,
            Ok(Lexeme::RParen) => Token::RightParen,
            Err(()) => {
                trace!("discarding unrecognized input at {:?}", lexer.span());
                continue;
            },
        };
        flush_number(&mut pending, &mut tokens);
        tokens.push(token);
    }
    flush_number(&mut pending, &mut tokens);

    tokens
}

/// Appends a run of decimal digits to the literal being accumulated.
///
/// # Parameters
/// - `pending`: The literal so far, `None` when idle.
/// - `digits`: ASCII digits as matched by the scanner.
fn accumulate(pending: &mut Option<BigInt>, digits: &str) {
    let start = pending.take().unwrap_or_default();
    let value = digits.bytes().fold(start, |acc, digit| acc * 10u8 + (digit - b'0'));
    *pending = Some(value);
}

/// Turns the accumulated literal, if any, into a number token.
fn flush_number(pending: &mut Option<BigInt>, tokens: &mut Vec<Token>) {
    if let Some(value) = pending.take() {
        tokens.push(Token::Number(value));
    }
}
