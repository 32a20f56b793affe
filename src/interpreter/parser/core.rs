use std::mem;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a single command line.
///
/// The parser keeps two tokens of lookahead: `current`, the token every
/// grammar rule inspects, and `peek`, the token right after it. Each grammar
/// rule is a method that either returns a complete node or fails; no
/// partially built node ever escapes a failed parse.
///
/// Grammar (precedence low to high, left-associative at each level):
/// ```text
///     assignment     := additive ( "=" additive )?
///     additive       := multiplicative ( ("+" | "-") multiplicative )*
///     multiplicative := unary ( ("*" | "/") unary )*
///     unary          := "-" unary | primary
///     primary        := NUMBER | IDENTIFIER | "(" additive ")"
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    peek:    Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes both lookahead tokens.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               current,
               peek }
    }

    /// The token the next grammar rule will inspect.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The token following [`current`](Self::current).
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.peek
    }

    /// Shifts `peek` into `current`, lexes a new `peek`, and returns the
    /// token that was consumed.
    ///
    /// Safe to call past the end of input; the lexer keeps yielding
    /// `EndOfInput`.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Builds the error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken { token: self.current.to_string() }
    }

    /// Parses a whole line.
    ///
    /// Runs the top-level [`assignment`](Self::parse_assignment) rule and then
    /// requires the line to be exhausted. Any leftover token, such as the
    /// second `=` in `a = b = 3`, is reported as
    /// [`ParseError::UnexpectedToken`].
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse_line(mut self) -> ParseResult<Expr> {
        let expr = self.parse_assignment()?;
        if self.current != Token::EndOfInput {
            return Err(self.unexpected());
        }
        Ok(expr)
    }

    /// Parses an optional top-level assignment.
    ///
    /// The left side is parsed as a full additive expression first. Only if
    /// an `=` follows is it checked: it must have collapsed to a bare variable
    /// reference, otherwise the line is rejected with
    /// [`ParseError::InvalidAssignmentTarget`]. The right side is again an
    /// additive expression, so assignments do not nest.
    ///
    /// Grammar: `assignment := additive ( "=" additive )?`
    pub fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let target = self.parse_additive()?;

        if self.current != Token::Assign {
            return Ok(target);
        }

        let name = match target {
            Expr::Variable { name } => name,
            _ => return Err(ParseError::InvalidAssignmentTarget),
        };
        self.advance();

        let value = self.parse_additive()?;
        Ok(Expr::Assignment { name,
                              value: Box::new(value) })
    }
}

/// Parses one command line into an expression tree.
///
/// This is the entry point of the language front-end. A fresh lexer and
/// parser are created for every call, so parsing the same line twice yields
/// structurally equal trees.
///
/// Empty lines are not valid expressions; callers are expected to reject
/// them before parsing.
///
/// # Errors
/// Returns a [`ParseError`] describing the first token the grammar could not
/// accept, a numeric literal that is not a number, or an assignment to
/// something other than a variable name.
///
/// # Examples
/// ```
/// use tally::{ast::Expr, error::ParseError, parse_expression};
///
/// let expr = parse_expression("x = 2").unwrap();
/// assert!(matches!(expr, Expr::Assignment { ref name, .. } if name == "x"));
///
/// assert_eq!(parse_expression("x + 1 = 2"),
///            Err(ParseError::InvalidAssignmentTarget));
/// ```
pub fn parse_expression(line: &str) -> ParseResult<Expr> {
    let expr = Parser::new(line).parse_line()?;
    debug!("parsed '{line}' as {expr}");
    Ok(expr)
}
