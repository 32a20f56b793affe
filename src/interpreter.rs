/// The lexer module tokenizes command lines for the parser.
///
/// Built on `logos`. Produces numbers (kept as raw text), identifiers, the
/// four arithmetic operators, parentheses and `=`. Characters that start no
/// token are handed to the parser as invalid tokens rather than failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one method per precedence level. It
/// rejects malformed input with a `ParseError` and never returns a partial
/// tree.
pub mod parser;
/// The evaluator module computes the value of an AST.
///
/// Walks the tree recursively, resolves variables in the environment,
/// performs arithmetic and applies assignments.
pub mod evaluator;
/// The value module defines the two runtime types: numbers and text.
pub mod value;
/// The environment module holds the variables of a session in a single
/// namespace of tagged values.
pub mod environment;
