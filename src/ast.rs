use std::fmt;

/// An arithmetic operator that combines two numeric operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use tally::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.symbol(), '/');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node for one command line.
///
/// The parser produces exactly one root `Expr` per line. Every child node is
/// owned by its parent through a `Box`, so dropping the root releases the
/// whole tree. Variables are stored by name and only resolved when the tree
/// is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment of a value to a variable, e.g. `x = 2 * y`.
    ///
    /// Only produced at the top level of a line, and only when the left-hand
    /// side of `=` is a bare variable name.
    Assignment {
        /// The variable being written.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] node from its parts.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesized, e.g. `((2 + 3) * x)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name } => f.write_str(name),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
        }
    }
}
