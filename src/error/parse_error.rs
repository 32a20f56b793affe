#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a command line.
///
/// The lexer never fails on its own; characters it cannot classify reach the
/// parser as invalid tokens and surface here as [`ParseError::UnexpectedToken`].
pub enum ParseError {
    /// A grammar rule found a token it could not continue with.
    UnexpectedToken {
        /// The raw text of the token. Empty when the line ended early.
        token: String,
    },
    /// A numeric literal could not be converted to a number, e.g. `1.2.3`.
    InvalidNumericLiteral {
        /// The literal as written.
        literal: String,
    },
    /// A numeric literal is too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
    /// The left-hand side of `=` was not a bare variable name.
    InvalidAssignmentTarget,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } if token.is_empty() => {
                write!(f, "Unexpected end of input.")
            },
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: '{token}'."),
            Self::InvalidNumericLiteral { literal } => {
                write!(f, "Invalid number: '{literal}'.")
            },
            Self::LiteralTooLarge { literal } => {
                write!(f, "Number too large: '{literal}'.")
            },
            Self::InvalidAssignmentTarget => {
                write!(f, "The left side of '=' must be a variable name.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
