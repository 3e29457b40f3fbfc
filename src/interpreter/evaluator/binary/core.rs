use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, `**` to `eval_pow` and
    /// relational operators to `eval_comparison`. `and` and `or` are not
    /// handled here because they short-circuit and need the unevaluated
    /// right operand; see `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use plex::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod => Self::eval_arithmetic(op, left, right),
            Pow => Self::eval_pow(left, right),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right)
            },
            And | Or => Ok(Value::Bool(match op {
                                           And => left.is_truthy() && right.is_truthy(),
                                           _ => left.is_truthy() || right.is_truthy(),
                                       })),
        }
    }
}

/// Builds the error for an operator applied to operand types it does not
/// support.
pub(crate) fn unsupported_operands(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::invalid_expression(format!("unsupported operand types for {op}: '{}' and '{}'",
                                             left.type_name(),
                                             right.type_name()))
}
