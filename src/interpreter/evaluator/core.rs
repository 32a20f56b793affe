use log::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{environment::Environment, evaluator::binary::eval_binary, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree against a variable environment.
///
/// This is the main entry point for evaluation. The walk is a plain
/// recursion over the tree:
///
/// - number literals evaluate to themselves,
/// - variables are looked up in `env`,
/// - binary operations evaluate both operands, left first, and require both
///   to be numbers,
/// - assignments evaluate their value and only then store it.
///
/// The environment is only written by an assignment whose value evaluated
/// successfully, so a failing command leaves `env` untouched.
///
/// # Errors
/// - `UndefinedVariable` when a referenced name is not defined.
/// - `TypeMismatch` when an arithmetic operand is text.
/// - `DivisionByZero` when dividing by zero.
/// - `Overflow` when an arithmetic result leaves the `f64` range.
///
/// # Examples
/// ```
/// use tally::{evaluate, interpreter::{environment::Environment, value::Value}, parse_expression};
///
/// let mut env = Environment::new();
///
/// let assign = parse_expression("x = 5").unwrap();
/// assert_eq!(evaluate(&assign, &mut env), Ok(Value::Number(5.0)));
///
/// let read = parse_expression("x + 1").unwrap();
/// assert_eq!(evaluate(&read, &mut env), Ok(Value::Number(6.0)));
/// ```
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<Value> {
    match expr {
        Expr::Number { value } => Ok(Value::Number(*value)),
        Expr::Variable { name } => eval_variable(name, env),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            eval_binary(*op, &left, &right)
        },
        Expr::Assignment { name, value } => eval_assignment(name, value, env),
    }
}

/// Resolves a variable by name.
///
/// # Errors
/// `UndefinedVariable` if `name` holds neither a number nor text.
fn eval_variable(name: &str, env: &Environment) -> EvalResult<Value> {
    env.get(name)
       .cloned()
       .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
}

/// Evaluates `value` and stores the result under `name`.
///
/// Storing replaces any previous value of the other type, so after
/// `x = 5` followed by `x = s` (where `s` holds text) `x` is no longer a
/// number. Returns the stored value.
fn eval_assignment(name: &str, value: &Expr, env: &mut Environment) -> EvalResult<Value> {
    let value = evaluate(value, env)?;
    if let Some(previous) = env.assign(name, value.clone())
       && previous.is_number() != value.is_number()
    {
        debug!("variable '{name}' changed type");
    }
    Ok(value)
}
