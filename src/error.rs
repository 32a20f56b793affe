/// Parsing errors.
///
/// Defines the errors raised while turning a command line into an AST:
/// unexpected tokens, malformed numeric literals and invalid assignment
/// targets. Lexing itself never fails.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while walking an AST against the variable
/// environment: undefined variables, arithmetic on text and division by zero.
pub mod eval_error;
/// Session command errors.
///
/// Wraps parse and evaluation failures together with the empty-command case
/// so that a session caller can handle one error type per line.
pub mod command_error;
/// State file errors.
///
/// Raised by the storage layer when the persisted session cannot be read or
/// written.
pub mod storage_error;

pub use command_error::CommandError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use storage_error::StorageError;
