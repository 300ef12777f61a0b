#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character (or run of characters) that does not start any token,
    /// or a malformed numeric literal.
    BadToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot start a primary expression.
    PrimaryExpected {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `let` was not followed by a variable name.
    NameExpected {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `=` of a declaration is missing.
    EqualsMissing {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => {
                write!(f, "Error on line {line}: Bad token '{token}'.")
            },
            Self::ExpectedClosingParen { line } => {
                write!(f, "Error on line {line}: ')' expected.")
            },
            Self::PrimaryExpected { token, line } => {
                write!(f, "Error on line {line}: Primary expected, found {token}.")
            },
            Self::NameExpected { line } => {
                write!(f, "Error on line {line}: Name expected in declaration.")
            },
            Self::EqualsMissing { name, line } => {
                write!(f, "Error on line {line}: '=' missing in declaration of '{name}'.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
