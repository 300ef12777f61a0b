use std::io::BufRead;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        token_stream::TokenStream,
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar. Prefix signs
/// are right-associative and may be chained, so `--5` is `-(-5)`.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
///              | "-" primary
///              | "+" primary
///              | name
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Expr> {
    let token = tokens.get()?;
    let line = tokens.line();

    match token {
        Token::LParen => parse_grouping(tokens),
        Token::Number(value) => Ok(Expr::Literal { value, line }),
        Token::Minus => parse_signed(tokens, UnaryOperator::Negate, line),
        Token::Plus => parse_signed(tokens, UnaryOperator::Identity, line),
        Token::Name(name) => Ok(Expr::Variable { name, line }),
        Token::End => Err(ParseError::UnexpectedEndOfInput { line }),
        tok => Err(ParseError::PrimaryExpected { token: tok.to_string(),
                                                 line }),
    }
}

/// Parses the rest of `( expression )` after the opening parenthesis.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the inner expression is not followed by
/// `)`.
fn parse_grouping<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    match tokens.get()? {
        Token::RParen => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line: tokens.line() }),
    }
}

fn parse_signed<R: BufRead>(tokens: &mut TokenStream<R>,
                            op: UnaryOperator,
                            line: usize)
                            -> ParseResult<Expr> {
    let expr = parse_primary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}
