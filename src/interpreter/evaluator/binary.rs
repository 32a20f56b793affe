use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an arithmetic operator to two evaluated operands.
///
/// Both operands must be numbers; text is never coerced and `+` does not
/// concatenate. The left operand is checked first.
///
/// # Errors
/// - `TypeMismatch` if either operand is text.
/// - `DivisionByZero` if `op` is `/` and the right operand is zero.
/// - `Overflow` if the result is not a finite number.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let six = eval_binary(BinaryOperator::Mul, &Value::Number(2.0), &Value::Number(3.0));
/// assert_eq!(six, Ok(Value::Number(6.0)));
///
/// let text = eval_binary(BinaryOperator::Add, &Value::Number(1.0), &Value::from("a"));
/// assert_eq!(text, Err(EvalError::TypeMismatch));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let l = left.as_number()?;
    let r = right.as_number()?;

    let result = match op {
        BinaryOperator::Add => l + r,
        BinaryOperator::Sub => l - r,
        BinaryOperator::Mul => l * r,
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        },
    };

    if !result.is_finite() {
        return Err(EvalError::Overflow);
    }

    Ok(Value::Number(result))
}
