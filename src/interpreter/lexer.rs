use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// `q`, ends the session.
    #[token("q", priority = 3)]
    Quit,
    /// Identifier tokens; variable names such as `x` or `radius2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `;`, terminates and prints a statement.
    #[token(";")]
    Print,
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
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
    /// `%`
    #[token("%")]
    Percent,
    /// End of input. Never produced by the lexer itself; the token stream
    /// hands it out once its reader is exhausted.
    End,
}

impl Token {
    /// The source character that represents this token, for single-character
    /// tokens.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Print.symbol(), Some(';'));
    /// assert_eq!(Token::Number(1.0).symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Quit => Some('q'),
            Self::Print => Some(';'),
            Self::Assign => Some('='),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Number(_) | Self::Name(_) | Self::Let | Self::End => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Let => write!(f, "'let'"),
            Self::End => write!(f, "end of input"),
            other => match other.symbol() {
                Some(symbol) => write!(f, "'{symbol}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::Token;

    fn lex(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn numbers_follow_decimal_syntax() {
        assert_eq!(lex("3 3.25 .5 2. 1e3 2.5E-1"),
                   vec![Ok(Token::Number(3.0)),
                        Ok(Token::Number(3.25)),
                        Ok(Token::Number(0.5)),
                        Ok(Token::Number(2.0)),
                        Ok(Token::Number(1000.0)),
                        Ok(Token::Number(0.25))]);
    }

    #[test]
    fn keywords_win_only_on_exact_match() {
        assert_eq!(lex("let letter q quota"),
                   vec![Ok(Token::Let),
                        Ok(Token::Name("letter".into())),
                        Ok(Token::Quit),
                        Ok(Token::Name("quota".into()))]);
    }

    #[test]
    fn operators_and_punctuation() {
        assert_eq!(lex("(x1+2)*-3/4%5=;"),
                   vec![Ok(Token::LParen),
                        Ok(Token::Name("x1".into())),
                        Ok(Token::Plus),
                        Ok(Token::Number(2.0)),
                        Ok(Token::RParen),
                        Ok(Token::Star),
                        Ok(Token::Minus),
                        Ok(Token::Number(3.0)),
                        Ok(Token::Slash),
                        Ok(Token::Number(4.0)),
                        Ok(Token::Percent),
                        Ok(Token::Number(5.0)),
                        Ok(Token::Assign),
                        Ok(Token::Print)]);
    }

    #[test]
    fn unknown_characters_are_errors() {
        assert_eq!(lex("$"), vec![Err(())]);
        assert_eq!(lex("."), vec![Err(())]);
    }
}
