/// Parser state and entry point.
///
/// Holds the [`Parser`](core::Parser) struct with its two-token lookahead,
/// the top-level assignment rule and the public `parse_expression` function.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative precedence
/// levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix minus, numeric literals, variable references and
/// parenthesized groups.
pub mod unary;
