use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not already
    /// decide the result, so `false and 1 / 0` is `False` rather than an
    /// error. The result is always a boolean built from truthiness.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::{
    ///     evaluator::core::evaluate, state::VariableStore, value::core::Value,
    /// };
    ///
    /// let variables = VariableStore::new();
    /// assert_eq!(evaluate("0 and 1 / 0", &variables).unwrap(), Value::Bool(false));
    /// assert_eq!(evaluate("'' or 3", &variables).unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(&self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<Value> {
        let left = self.eval(left)?.is_truthy();

        match op {
            BinaryOperator::And if !left => Ok(Value::Bool(false)),
            BinaryOperator::Or if left => Ok(Value::Bool(true)),
            BinaryOperator::And | BinaryOperator::Or => {
                Ok(Value::Bool(self.eval(right)?.is_truthy()))
            },
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
