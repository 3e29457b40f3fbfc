use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and reals. Integer negation
    ///   is checked.
    /// - `Not`: negated truthiness, defined for every value.
    ///
    /// # Example
    /// ```
    /// use plex::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::from("")).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, &Value::from("a")).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or_else(|| RuntimeError::invalid_expression("integer overflow")),
                Value::Real(r) => Ok(Value::Real(-r)),
                _ => Err(RuntimeError::invalid_expression(format!("bad operand type for unary -: '{}'",
                                                                  value.type_name()))),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
