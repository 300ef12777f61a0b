/// Shared parser types and the expression entry point.
///
/// Defines the `ParseResult` alias used by every grammar function.
pub mod core;

/// Additive and multiplicative expression parsing.
///
/// Implements the `expression` and `term` grammar levels and the mapping from
/// operator tokens to [`BinaryOperator`](crate::ast::BinaryOperator)s.
pub mod binary;

/// Primary expression parsing.
///
/// Numbers, parenthesized expressions, prefix signs and variable references.
pub mod unary;

/// Statement parsing.
///
/// Decides between `let` declarations and expression statements.
pub mod statement;
