use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix minus is right-recursive and has no node of its own: `-x` is
    /// desugared to `0 - x`. Consequently `- -3` becomes `0 - (0 - 3)` and
    /// `-(1 + 2)` becomes `0 - (1 + 2)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if *self.current() == Token::Minus {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::binary(Expr::Number { value: 0.0 },
                                   BinaryOperator::Sub,
                                   operand));
        }
        self.parse_primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | IDENTIFIER
    ///              | "(" additive ")"
    /// ```
    ///
    /// # Errors
    /// - `InvalidNumericLiteral` if a number token does not convert to `f64`.
    /// - `LiteralTooLarge` if it converts to infinity.
    /// - `UnexpectedToken` for any other token, including the end of input
    ///   and invalid characters.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Token::Number(_) => self.parse_number(),
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::Variable { name })
            },
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected()),
        }
    }

    /// Converts the current number token into a literal node.
    ///
    /// The lexer keeps numeric text verbatim, so malformed runs such as `1.2.3`
    /// or a lone `.` are only rejected here, with the offending text intact.
    /// Digit runs past the `f64` range would read as infinity and are refused.
    fn parse_number(&mut self) -> ParseResult<Expr> {
        let literal = self.advance().to_string();
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::Number { value }),
            Ok(_) => Err(ParseError::LiteralTooLarge { literal }),
            Err(_) => Err(ParseError::InvalidNumericLiteral { literal }),
        }
    }

    /// Parses a parenthesized expression: `"(" additive ")"`.
    ///
    /// The group re-enters the additive rule, so an `=` inside parentheses is
    /// reported as an unexpected token where `)` was expected.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_additive()?;
        if *self.current() != Token::RParen {
            return Err(self.unexpected());
        }
        self.advance();
        Ok(expr)
    }
}
