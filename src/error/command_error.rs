use crate::error::{EvalError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the ways a single session command can fail.
pub enum CommandError {
    /// The line was empty or contained only whitespace.
    Empty,
    /// The line is not a valid expression. Never recorded in the history.
    Parse(ParseError),
    /// The line parsed but could not be evaluated. Still recorded in the
    /// history.
    Eval(EvalError),
}

impl CommandError {
    /// Returns `true` if the failed line still entered the session history.
    ///
    /// Only evaluation failures are recorded.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Eval(_))
    }
}

impl From<ParseError> for CommandError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for CommandError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command."),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}
