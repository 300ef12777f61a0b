use std::io::BufRead;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{parser::binary::parse_additive, token_stream::TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// On return the token that ended the expression has been put back into
/// `tokens`.
///
/// # Parameters
/// - `tokens`: Token stream to read from.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Expr> {
    parse_additive(tokens)
}
