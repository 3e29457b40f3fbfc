use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported_operands,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays integral. Negative integer exponents and
    /// any real operand are computed in floating point.
    ///
    /// # Errors
    /// - `DivisionByZero` when zero is raised to a negative power.
    /// - `InvalidExpression` on overflow, a fractional power of a negative
    ///   number, or non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let result = Evaluator::eval_pow(&Value::Integer(2), &Value::Integer(10)).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(&Value::Integer(2), &Value::Integer(-1)).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        use Value::Integer;

        match (base, exponent) {
            (Integer(b), Integer(e)) if *e >= 0 => {
                b.checked_pow(i64_to_u32_checked(*e)?)
                 .map(Integer)
                 .ok_or_else(|| RuntimeError::invalid_expression("integer overflow"))
            },
            _ if base.is_numeric() && exponent.is_numeric() => {
                let b = base.as_real()?;
                let e = exponent.as_real()?;

                if b == 0.0 && e < 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                if b < 0.0 && e.fract() != 0.0 {
                    return Err(RuntimeError::invalid_expression("negative number cannot be raised to a fractional power"));
                }
                Ok(Value::Real(b.powf(e)))
            },
            _ => Err(unsupported_operands(BinaryOperator::Pow, base, exponent)),
        }
    }
}
