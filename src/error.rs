/// Parsing errors.
///
/// Defines all error types that can occur while turning raw input into a
/// statement: unrecognized characters, malformed literals and grammar
/// violations such as a missing `)` or `=`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a statement:
/// unknown variables, redeclarations and division by zero.
pub mod runtime_error;
/// Session errors.
///
/// Unifies parse errors, runtime errors and I/O failures so a session can
/// propagate any of them with `?`.
pub mod session_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use session_error::SessionError;
