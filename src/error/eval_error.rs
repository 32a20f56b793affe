#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed command.
pub enum EvalError {
    /// Tried to read a variable that holds neither a number nor text.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic operand evaluated to text.
    TypeMismatch,
    /// The right operand of `/` was zero.
    DivisionByZero,
    /// An arithmetic result is too large to be represented as a finite `f64`.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::TypeMismatch => {
                write!(f, "Arithmetic is only possible between numbers.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Result is too large."),
        }
    }
}

impl std::error::Error for EvalError {}
