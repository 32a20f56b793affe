use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
    /// parses as `(8 - 3) - 2`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
