use std::io::BufRead;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_primary},
        token_stream::TokenStream,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let token = tokens.get()?;
        let line = tokens.line();
        match token_to_binary_operator(&token) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => {
                let right = parse_multiplicative(tokens)?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
            },
            _ => {
                tokens.putback(token);
                return Ok(left);
            },
        }
    }
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, all on one level and
/// applied strictly left to right.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Expr> {
    let mut left = parse_primary(tokens)?;
    loop {
        let token = tokens.get()?;
        let line = tokens.line();
        match token_to_binary_operator(&token) {
            Some(op) if op.is_multiplicative() => {
                let right = parse_primary(tokens)?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
            },
            _ => {
                tokens.putback(token);
                return Ok(left);
            },
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*`, `/` and `%`, and `None`
/// for all other tokens.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Print), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
