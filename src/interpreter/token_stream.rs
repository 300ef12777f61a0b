use std::io::BufRead;

use log::trace;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// A stream that produces a token when asked for one and lets the parser put
/// a single token back.
///
/// Input is pulled from the reader one line at a time and only when the
/// current line has no tokens left, so an interactive reader is never asked
/// for more text than the grammar needs. Tokens never span lines.
pub struct TokenStream<R> {
    input:       R,
    raw:         Vec<u8>,
    line:        String,
    cursor:      usize,
    line_number: usize,
    buffer:      Option<Token>,
    exhausted:   bool,
    io_error:    Option<std::io::Error>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream reading from `input`.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut tokens = TokenStream::new("let x".as_bytes());
    /// assert_eq!(tokens.get().unwrap(), Token::Let);
    /// assert_eq!(tokens.get().unwrap(), Token::Name("x".to_string()));
    /// assert_eq!(tokens.get().unwrap(), Token::End);
    /// ```
    pub const fn new(input: R) -> Self {
        Self { input,
               raw: Vec::new(),
               line: String::new(),
               cursor: 0,
               line_number: 0,
               buffer: None,
               exhausted: false,
               io_error: None }
    }

    /// The 1-based number of the input line currently being tokenized.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line_number.max(1)
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first. Once the reader is exhausted
    /// every call yields [`Token::End`]. A read failure also ends the stream;
    /// the error is kept for [`TokenStream::take_io_error`].
    ///
    /// # Errors
    /// Returns [`ParseError::BadToken`] for text that does not form a token.
    /// The offending text is consumed.
    pub fn get(&mut self) -> ParseResult<Token> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        loop {
            let step = {
                let mut lexer = Token::lexer(&self.line[self.cursor..]);
                lexer.next().map(|result| (result, lexer.span()))
            };

            match step {
                Some((Ok(token), span)) => {
                    self.cursor += span.end;
                    trace!("line {}: read {token:?}", self.line());
                    return Ok(token);
                },
                Some((Err(()), span)) => {
                    let start = self.cursor + span.start;
                    let mut end = self.cursor + span.end.max(span.start + 1);
                    while !self.line.is_char_boundary(end) {
                        end += 1;
                    }
                    self.cursor = end;
                    return Err(ParseError::BadToken { token: self.line[start..end].to_string(),
                                                      line:  self.line(), });
                },
                None => {
                    if !self.fill_line() {
                        return Ok(Token::End);
                    }
                },
            }
        }
    }

    /// Puts `token` back so the next [`TokenStream::get`] returns it.
    ///
    /// # Panics
    /// Panics if a token is already waiting. The grammar never puts back two
    /// tokens in a row, so this indicates a parser bug rather than bad input.
    pub fn putback(&mut self, token: Token) {
        assert!(self.buffer.is_none(), "putback() into a full buffer");
        self.buffer = Some(token);
    }

    /// Skips input up to and including the next occurrence of `kind`.
    ///
    /// If the pushed-back token is `kind` it is dropped and nothing else is
    /// consumed. Otherwise any pushed-back token is dropped and raw characters
    /// are discarded until the character spelling `kind` has been consumed or
    /// input runs out. `kind` must be a single-character token; for any other
    /// kind only the pushed-back token is dropped.
    pub fn discard_until(&mut self, kind: &Token) {
        if let Some(token) = self.buffer.take()
           && token == *kind
        {
            return;
        }

        let Some(target) = kind.symbol() else {
            return;
        };

        loop {
            if let Some(offset) = self.line[self.cursor..].find(target) {
                self.cursor += offset + target.len_utf8();
                return;
            }
            if !self.fill_line() {
                return;
            }
        }
    }

    /// Takes the read error that ended the stream, if there was one.
    pub fn take_io_error(&mut self) -> Option<std::io::Error> {
        self.io_error.take()
    }

    /// Replaces the current line with the next one from the reader.
    ///
    /// Bytes that are not valid UTF-8 become `U+FFFD`, which then fails to
    /// lex like any other unknown character. Returns `false` once the reader
    /// is exhausted or has failed.
    fn fill_line(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        self.line.clear();
        self.raw.clear();
        self.cursor = 0;

        match self.input.read_until(b'\n', &mut self.raw) {
            Ok(0) => {
                self.exhausted = true;
                false
            },
            Ok(_) => {
                self.line.push_str(&String::from_utf8_lossy(&self.raw));
                self.line_number += 1;
                trace!("line {}: {:?}", self.line_number, self.line.trim_end());
                true
            },
            Err(e) => {
                self.exhausted = true;
                self.io_error = Some(e);
                false
            },
        }
    }
}
