use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    error::SessionError,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::statement::parse_statement,
        token_stream::TokenStream,
    },
};

/// Result type used by sessions.
pub type SessionResult<T> = Result<T, SessionError>;

/// Marker written before each statement is read.
pub const PROMPT: &str = "> ";
/// Marker written before each result.
pub const RESULT: &str = "= ";

/// How a [`Session`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Write [`PROMPT`] before each statement.
    pub prompt:    bool,
    /// Predefine `pi` and `e`.
    pub constants: bool,
    /// Return the first parse or runtime error instead of reporting it and
    /// carrying on with the next statement.
    pub strict:    bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { prompt:    true,
               constants: true,
               strict:    false, }
    }
}

/// A read-evaluate-print session over one input.
///
/// The session owns the token stream and the evaluation context, so separate
/// sessions never share variables.
pub struct Session<R> {
    tokens:   TokenStream<R>,
    context:  Context,
    options:  SessionOptions,
    finished: bool,
}

impl<R: BufRead> Session<R> {
    /// Creates an interactive session with default options.
    pub fn new(input: R) -> Self {
        Self::with_options(input, SessionOptions::default())
    }

    /// Creates a session with the given options.
    pub fn with_options(input: R, options: SessionOptions) -> Self {
        let context = if options.constants {
            Context::with_constants()
        } else {
            Context::new()
        };

        Self { tokens: TokenStream::new(input),
               context,
               options,
               finished: false }
    }

    /// The evaluation context, with every variable declared so far.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Runs the session until `q` or end of input.
    ///
    /// Each result is written to `out` as `= <value>`. A failed statement has
    /// its error written to `err`, after which input is skipped up to the next
    /// `;` and the session carries on. In strict mode the error is returned
    /// instead.
    ///
    /// # Errors
    /// Returns I/O errors from the input or either output, and in strict mode
    /// the first parse or runtime error.
    ///
    /// # Example
    /// ```
    /// use tally::Session;
    ///
    /// let mut out = Vec::new();
    /// let mut err: Vec<u8> = Vec::new();
    /// Session::new("let r = 2; pi * r * r; q".as_bytes()).run(&mut out, &mut err)
    ///                                                     .unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "> = 2\n> = 12.566370614\n> ");
    /// assert!(err.is_empty());
    /// ```
    pub fn run<W: Write, E: Write>(&mut self, out: &mut W, err: &mut E) -> SessionResult<()> {
        info!("session started with {} predefined variables",
              self.context.symbols.len());

        loop {
            match self.step(out) {
                Ok(Some(value)) => writeln!(out, "{RESULT}{value}")?,
                Ok(None) => break,
                Err(SessionError::Io(e)) => return Err(SessionError::Io(e)),
                Err(e) if self.options.strict => return Err(e),
                Err(e) => {
                    debug!("recovering from: {e}");
                    writeln!(err, "{e}")?;
                    self.recover();
                },
            }
        }

        out.flush()?;
        info!("session finished");
        Ok(())
    }

    /// Reads and evaluates one statement.
    ///
    /// Writes the prompt if enabled, skips leading `;`, and returns
    /// `Ok(None)` once `q` or the end of input is reached. Nothing but the
    /// prompt is written to `out`.
    ///
    /// # Errors
    /// Returns the statement's parse or runtime error, or an I/O error. After
    /// a parse or runtime error call [`Session::recover`] before the next
    /// step.
    pub fn step<W: Write>(&mut self, out: &mut W) -> SessionResult<Option<f64>> {
        if self.finished {
            return Ok(None);
        }

        if self.options.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let mut token = self.tokens.get()?;
        while token == Token::Print {
            token = self.tokens.get()?;
        }

        if matches!(token, Token::Quit | Token::End) {
            self.finished = true;
            return match self.tokens.take_io_error() {
                Some(e) => Err(e.into()),
                None => Ok(None),
            };
        }

        self.tokens.putback(token);
        let statement = parse_statement(&mut self.tokens)?;
        debug!("line {}: {statement}", self.tokens.line());

        Ok(Some(self.context.eval_statement(&statement)?))
    }

    /// Skips input up to and including the next `;`.
    pub fn recover(&mut self) {
        self.tokens.discard_until(&Token::Print);
    }
}

/// Evaluates every statement of `source` and returns their values in order.
///
/// `pi` and `e` are predefined. Evaluation stops at `q`, at the end of the
/// source, or at the first error.
///
/// # Errors
/// Returns the first parse or runtime error.
///
/// # Example
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("let x = 10; x * 2; (x + 5) % 4").unwrap(), vec![10.0, 20.0, 3.0]);
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> SessionResult<Vec<f64>> {
    let options = SessionOptions { prompt:    false,
                                   constants: true,
                                   strict:    true, };
    let mut session = Session::with_options(source.as_bytes(), options);
    let mut values = Vec::new();

    while let Some(value) = session.step(&mut std::io::sink())? {
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Read};

    use super::{Session, SessionOptions};
    use crate::error::{ParseError, RuntimeError, SessionError};

    fn transcript(source: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        Session::new(source.as_bytes()).run(&mut out, &mut err)
                                       .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn prints_prompt_and_results() {
        let (out, err) = transcript("2+3*4;");
        assert_eq!(out, "> = 14\n> ");
        assert!(err.is_empty());
    }

    #[test]
    fn repeated_terminators_are_skipped() {
        assert_eq!(transcript("2+2;;;").0, "> = 4\n> ");
        assert_eq!(transcript(";;2+2").0, "> = 4\n> ");
    }

    #[test]
    fn recovers_after_an_error() {
        let (out, err) = transcript("1/0; 2+2;");
        assert_eq!(out, "> > = 4\n> ");
        assert_eq!(err, "Error on line 1: Division by zero.\n");
    }

    #[test]
    fn recovery_skips_rest_of_statement() {
        let (out, err) = transcript("(1 + ) 7 8; 5;");
        assert_eq!(out, "> > = 5\n> ");
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn bad_tokens_fail_the_whole_statement() {
        let (out, err) = transcript("2 $ 3; 4;");
        assert_eq!(out, "> > = 4\n> ");
        assert_eq!(err, "Error on line 1: Bad token '$'.\n");
    }

    #[test]
    fn quit_stops_reading() {
        let (out, _) = transcript("1; q; 2;");
        assert_eq!(out, "> = 1\n> ");
    }

    #[test]
    fn end_of_input_is_like_quit() {
        assert_eq!(transcript("").0, "> ");
        assert_eq!(transcript("7;").0, transcript("7; q").0);
    }

    #[test]
    fn variables_persist_between_statements() {
        let (out, err) = transcript("let x = 1; let x = 2; x;");
        assert_eq!(out, "> = 1\n> > = 1\n> ");
        assert_eq!(err, "Error on line 1: 'x' declared twice.\n");
    }

    #[test]
    fn bare_session_has_no_constants() {
        let options = SessionOptions { prompt:    false,
                                       constants: false,
                                       strict:    true, };
        let mut session = Session::with_options("pi;".as_bytes(), options);
        let result = session.run(&mut std::io::sink(), &mut std::io::sink());
        assert!(matches!(result,
                         Err(SessionError::Runtime(RuntimeError::UndefinedVariable { .. }))));
        assert!(session.context().symbols.is_empty());
    }

    #[test]
    fn strict_session_returns_first_error() {
        let options = SessionOptions { strict: true,
                                       ..SessionOptions::default() };
        let mut session = Session::with_options("1; let 5 = 3; 2;".as_bytes(), options);
        let mut out = Vec::new();
        let result = session.run(&mut out, &mut std::io::sink());
        assert!(matches!(result, Err(SessionError::Parse(ParseError::NameExpected { line: 1 }))));
        assert_eq!(String::from_utf8(out).unwrap(), "> = 1\n> ");
    }

    #[test]
    fn step_after_finish_reads_nothing() {
        let mut session = Session::new("q 1".as_bytes());
        assert!(session.step(&mut std::io::sink()).unwrap().is_none());
        assert!(session.step(&mut std::io::sink()).unwrap().is_none());
    }

    #[test]
    fn consumed_terminator_skips_next_statement() {
        let (out, err) = transcript("(1; 2; 3;");
        assert_eq!(out, "> > = 3\n> ");
        assert_eq!(err, "Error on line 1: ')' expected.\n");
    }

    #[test]
    fn invalid_utf8_is_recoverable() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        Session::new(&b"1;\n2 \xff;\n3;\n"[..]).run(&mut out, &mut err)
                                                .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> = 1\n> > = 3\n> ");
        assert_eq!(String::from_utf8(err).unwrap(),
                   "Error on line 2: Bad token '\u{FFFD}'.\n");
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("unplugged"))
        }
    }

    impl BufRead for Broken {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("unplugged"))
        }

        fn consume(&mut self, _: usize) {}
    }

    #[test]
    fn read_errors_end_the_session() {
        let mut out = Vec::new();
        let result = Session::new(Broken).run(&mut out, &mut io::sink());
        assert!(matches!(result, Err(SessionError::Io(ref e)) if e.to_string() == "unplugged"));
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }
}
