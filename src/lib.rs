//! # tally
//!
//! tally is an interactive arithmetic calculator written in Rust.
//! It reads statements such as `let r = 2;` or `pi * r * r;`, evaluates them
//! with double-precision arithmetic and prints each result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of the input as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Prints trees back as fully parenthesized source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating input, plus the session-level error that also covers I/O.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and readable messages.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the entire process of evaluating input.
///
/// This module ties together the token stream, parser, evaluator, symbol
/// table and session loop.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for interactive and batch evaluation.
pub mod interpreter;

pub use interpreter::session::{Session, SessionOptions, SessionResult, evaluate};
