use std::fmt;

use logos::Logos;

/// Represents a lexical token in a command line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Every variant except [`Token::EndOfInput`] and [`Token::Invalid`] is
/// recognized by the generated `logos` scanner; those two are synthesized by
/// [`Lexer::next_token`] so that scanning itself never fails.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The text is kept as written. Runs like `1.2.3` are still a single
    /// token; the parser decides whether the literal is valid.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Assign,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// The input is exhausted.
    EndOfInput,
    /// A character that does not start any token.
    Invalid(char),
}

impl fmt::Display for Token {
    /// Writes the raw source text of the token.
    ///
    /// `EndOfInput` has no source text and writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Multiply => f.write_str("*"),
            Self::Divide => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Assign => f.write_str("="),
            Self::Ignored | Self::EndOfInput => Ok(()),
            Self::Invalid(c) => write!(f, "{c}"),
        }
    }
}

/// A single-pass scanner over one command line.
///
/// Wraps the `logos` lexer and turns its iterator protocol into the
/// `next_token` contract used by the parser:
///
/// - unrecognized characters become [`Token::Invalid`] instead of errors,
/// - once the line is exhausted every call yields [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 2 $");
///
/// assert_eq!(lexer.next_token(), Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Number("2".to_string()));
/// assert_eq!(lexer.next_token(), Token::Invalid('$'));
/// assert_eq!(lexer.next_token(), Token::EndOfInput);
/// assert_eq!(lexer.next_token(), Token::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Scans and returns the next token.
    ///
    /// Never fails. A character that matches no rule is returned as
    /// [`Token::Invalid`] carrying that character.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => {
                let rest = self.inner.source().get(self.inner.span().start..);
                Token::Invalid(rest.and_then(|s| s.chars().next())
                                   .unwrap_or(char::REPLACEMENT_CHARACTER))
            },
            None => Token::EndOfInput,
        }
    }
}

/// Scans a whole line into a token vector, `EndOfInput` included.
///
/// Mostly useful for diagnostics and tests; the parser pulls tokens lazily
/// through [`Lexer::next_token`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
