/// Core evaluation logic for expressions and statements.
///
/// Holds the evaluation [`Context`](core::Context), which owns the symbol
/// table, and dispatches on expression variants.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix signs `-` and `+`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the division-by-zero
/// checks for `/` and `%`.
pub mod binary;
