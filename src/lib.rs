//! # tally
//!
//! tally is an interactive calculator written in Rust.
//! It parses and evaluates arithmetic expressions over numeric and textual
//! variables, supports assignment, and remembers the last commands of a
//! session.

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

/// Defines the structure of parsed commands.
///
/// This module declares the `Expr` enum that represents one command line as a
/// tree: number literals, variable references, binary arithmetic and
/// top-level assignment. The AST is built by the parser and consumed by the
/// evaluator.
pub mod ast;
/// Console keywords shared by the prompt and script mode.
pub mod console;
/// Provides the error types for parsing, evaluation, sessions and storage.
///
/// # Responsibilities
/// - Defines one error enum per failure domain.
/// - Renders each error as a short, user-facing sentence.
/// - Integrates with `std::error::Error` so errors compose with `?`.
pub mod error;
/// The bounded command history of a session.
pub mod history;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator, runtime values and
/// the variable environment. It is the language front-end of the calculator
/// and has no I/O of its own.
///
/// # Responsibilities
/// - Turns a command line into tokens and tokens into an AST.
/// - Evaluates the AST against the session variables.
/// - Reports malformed input and failed evaluations as typed errors.
pub mod interpreter;
/// Runs commands against a set of variables and records them.
pub mod session;
/// Persists sessions as JSON files.
pub mod storage;

pub use crate::interpreter::{evaluator::core::evaluate, parser::core::parse_expression};
use crate::{error::CommandError, interpreter::value::Value, session::Session};

/// Evaluates a single line in a fresh, empty session.
///
/// Convenient for one-off calculations where variables and history are not
/// needed afterwards.
///
/// # Errors
/// Returns an error if the line is empty, does not parse, or fails to
/// evaluate.
///
/// # Examples
/// ```
/// use tally::{calculate, error::{CommandError, EvalError}, interpreter::value::Value};
///
/// assert_eq!(calculate("2 + 3 * 4"), Ok(Value::Number(14.0)));
/// assert_eq!(calculate("10 / 0"),
///            Err(CommandError::Eval(EvalError::DivisionByZero)));
/// ```
pub fn calculate(line: &str) -> Result<Value, CommandError> {
    Session::new().execute(line)
}
