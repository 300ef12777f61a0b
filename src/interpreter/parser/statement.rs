use std::io::BufRead;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        token_stream::TokenStream,
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration, introduced by `let`.
/// - an expression used as a statement.
///
/// The token that ends the statement (usually `;`) is left in the stream.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Example
/// ```
/// use tally::{
///     ast::Statement,
///     interpreter::{parser::statement::parse_statement, token_stream::TokenStream},
/// };
///
/// let mut tokens = TokenStream::new("let r = 2 * 3;".as_bytes());
/// let statement = parse_statement(&mut tokens).unwrap();
///
/// assert!(matches!(statement, Statement::Declaration { ref name, .. } if name == "r"));
/// ```
pub fn parse_statement<R: BufRead>(tokens: &mut TokenStream<R>) -> ParseResult<Statement> {
    let token = tokens.get()?;
    let line = tokens.line();

    if token == Token::Let {
        return parse_declaration(tokens, line);
    }

    tokens.putback(token);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses the remainder of a declaration after `let`.
///
/// Grammar: `declaration := "let" name "=" expression`
///
/// # Errors
/// - `NameExpected` if `let` is not followed by a name.
/// - `EqualsMissing` if the name is not followed by `=`.
/// - Propagates any errors from the right-hand side.
fn parse_declaration<R: BufRead>(tokens: &mut TokenStream<R>,
                                 line: usize)
                                 -> ParseResult<Statement> {
    let Token::Name(name) = tokens.get()? else {
        return Err(ParseError::NameExpected { line: tokens.line() });
    };

    if tokens.get()? != Token::Assign {
        return Err(ParseError::EqualsMissing { name,
                                               line: tokens.line() });
    }

    let value = parse_expression(tokens)?;

    Ok(Statement::Declaration { name, value, line })
}

#[cfg(test)]
mod tests {
    use super::parse_statement;
    use crate::{
        ast::Statement,
        error::ParseError,
        interpreter::{lexer::Token, parser::core::ParseResult, token_stream::TokenStream},
    };

    fn parse(source: &str) -> ParseResult<Statement> {
        parse_statement(&mut TokenStream::new(source.as_bytes()))
    }

    #[test]
    fn declarations_and_expressions() {
        assert_eq!(parse("let x = 1 + 2").unwrap().to_string(), "let x = (1 + 2)");
        assert_eq!(parse("x * 2").unwrap().to_string(), "(x * 2)");
    }

    #[test]
    fn declaration_requires_a_name() {
        assert_eq!(parse("let 3 = 4"), Err(ParseError::NameExpected { line: 1 }));
        assert_eq!(parse("let = 4"), Err(ParseError::NameExpected { line: 1 }));
    }

    #[test]
    fn declaration_requires_equals() {
        assert_eq!(parse("let x 4"),
                   Err(ParseError::EqualsMissing { name: "x".into(),
                                                   line: 1, }));
    }

    #[test]
    fn statement_leaves_terminator_in_stream() {
        let mut tokens = TokenStream::new("let y = 3; y".as_bytes());
        parse_statement(&mut tokens).unwrap();
        assert_eq!(tokens.get(), Ok(Token::Print));
        assert_eq!(tokens.get(), Ok(Token::Name("y".into())));
    }

    #[test]
    fn statement_line_is_where_it_starts() {
        let statement = parse("\n\nlet z =\n 5").unwrap();
        assert!(matches!(statement, Statement::Declaration { line: 3, .. }));
    }
}
