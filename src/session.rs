use log::debug;

use crate::{
    error::CommandError,
    history::History,
    interpreter::{
        environment::Environment, evaluator::core::evaluate, parser::core::parse_expression,
        value::Value,
    },
    storage::State,
};

/// One calculator session: its variables and its command history.
///
/// `Session` is the caller of the language front-end. It trims and rejects
/// empty lines, parses, evaluates and decides what is remembered:
///
/// - a line that fails to parse is never recorded,
/// - a line that parses is recorded, even if its evaluation then fails.
///
/// A session is not synchronized; hosts sharing one across threads must
/// serialize calls.
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    history:     History,
}

impl Session {
    /// Starts an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from a persisted state.
    #[must_use]
    pub fn from_state(state: State) -> Self {
        Self { environment: Environment::from_maps(state.variables, state.string_variables),
               history:     History::from_entries(state.history), }
    }

    /// Captures the session as a persistable state.
    #[must_use]
    pub fn to_state(&self) -> State {
        State { variables:        self.environment.numbers(),
                string_variables: self.environment.strings(),
                history:          self.history.snapshot(), }
    }

    /// Runs one command line.
    ///
    /// # Errors
    /// - [`CommandError::Empty`] for a blank line.
    /// - [`CommandError::Parse`] if the line is not an expression.
    /// - [`CommandError::Eval`] if evaluation fails. The line is recorded in
    ///   the history regardless and no variable is changed.
    ///
    /// A successful line is always recorded; for failures,
    /// [`CommandError::is_recorded`] tells whether the history changed.
    ///
    /// # Example
    /// ```
    /// use tally::{error::CommandError, interpreter::value::Value, session::Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.execute("x = 2 * 3"), Ok(Value::Number(6.0)));
    /// assert!(matches!(session.execute("x +"), Err(CommandError::Parse(_))));
    /// assert!(matches!(session.execute("y"), Err(CommandError::Eval(_))));
    ///
    /// assert_eq!(session.history(), vec!["x = 2 * 3", "y"]);
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<Value, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let expr = parse_expression(line)?;
        let result = evaluate(&expr, &mut self.environment);

        self.history.record(line);
        debug!("recorded '{line}' ({} in history)", self.history.len());

        result.map_err(CommandError::from)
    }

    /// A copy of the command history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    /// The current variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }
}

/// Returns `true` if the command that produced `outcome` entered the history.
///
/// The console saves the state exactly when this holds.
///
/// # Example
/// ```
/// use tally::session::{Session, was_recorded};
///
/// let mut session = Session::new();
/// assert!(was_recorded(&session.execute("1 + 1")));
/// assert!(was_recorded(&session.execute("missing")));
/// assert!(!was_recorded(&session.execute("1 +")));
/// assert!(!was_recorded(&session.execute("  ")));
/// ```
#[must_use]
pub fn was_recorded(outcome: &Result<Value, CommandError>) -> bool {
    outcome.as_ref().err().is_none_or(CommandError::is_recorded)
}
