/// The evaluator module computes the value of parsed statements.
///
/// The evaluator walks the expression tree produced by the parser, performs
/// the arithmetic, reads and declares variables, and reports runtime errors
/// such as division by zero.
///
/// # Responsibilities
/// - Evaluates expressions and statements.
/// - Owns the symbol table through its `Context`.
/// - Reports runtime errors with their source line.
pub mod evaluator;
/// The lexer module defines the tokens of the language.
///
/// The lexer classifies raw source text into numbers, names, the `let`
/// keyword and single-character operators and punctuation.
///
/// # Responsibilities
/// - Declares the `Token` enum and its recognition rules.
/// - Parses numeric literals.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser pulls tokens from a token stream with one token of lookahead
/// and constructs a statement per call. Precedence comes from the nesting of
/// the grammar functions; there is no operator table.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with line info.
pub mod parser;
/// The session module runs the read-evaluate-print loop.
///
/// # Responsibilities
/// - Writes prompts and results.
/// - Reports errors and resynchronizes on the next `;`.
/// - Stops at `q` or end of input.
pub mod session;
/// The symbol table module stores variable bindings.
pub mod symbol_table;
/// The token stream module turns an input reader into tokens on demand.
///
/// # Responsibilities
/// - Reads input a line at a time, only when more tokens are needed.
/// - Supports putting back a single token.
/// - Skips input up to a given token after an error.
pub mod token_stream;
