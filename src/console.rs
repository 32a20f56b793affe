/// What a console line asks for.
///
/// The prompt and script mode understand two words on top of the expression
/// language. Everything else is handed to [`Session::execute`].
///
/// [`Session::execute`]: crate::session::Session::execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'line> {
    /// Nothing but whitespace.
    Blank,
    /// `exit` ends the session.
    Exit,
    /// `history` lists the recent commands.
    History,
    /// A trimmed line to run as an expression.
    Evaluate(&'line str),
}

impl<'line> Command<'line> {
    /// Classifies one raw input line. Surrounding whitespace is ignored.
    ///
    /// # Example
    /// ```
    /// use tally::console::Command;
    ///
    /// assert_eq!(Command::classify("  exit "), Command::Exit);
    /// assert_eq!(Command::classify("history"), Command::History);
    /// assert_eq!(Command::classify(" x = 1\t"), Command::Evaluate("x = 1"));
    /// assert_eq!(Command::classify("   "), Command::Blank);
    /// ```
    #[must_use]
    pub fn classify(line: &'line str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            "exit" => Self::Exit,
            "history" => Self::History,
            command => Self::Evaluate(command),
        }
    }
}
