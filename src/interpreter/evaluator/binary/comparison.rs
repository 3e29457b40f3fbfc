use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Maps an equality operator and an equality result to the final boolean.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values; values of unrelated types are
    /// simply unequal, while an integer and a real compare numerically.
    /// Ordering operators accept two numbers or two strings.
    ///
    /// # Errors
    /// `InvalidExpression` when an ordering operator is applied to values that
    /// cannot be ordered against each other.
    ///
    /// # Example
    /// ```
    /// use plex::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let less = Evaluator::eval_comparison(BinaryOperator::Less, &Value::Real(3.0), &Value::Integer(5));
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let eq = Evaluator::eval_comparison(BinaryOperator::Equal, &Value::from("1"), &Value::Integer(1));
    /// assert_eq!(eq.unwrap(), Value::Bool(false));
    ///
    /// assert!(Evaluator::eval_comparison(BinaryOperator::Less, &Value::from("1"), &Value::Integer(1)).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Bool(match op {
                           Equal | NotEqual => equality_op_result(op, values_equal(left, right)?),
                           Less | Greater | LessEqual | GreaterEqual => {
                               match compare_values(op, left, right)? {
                                   Some(ordering) => match op {
                                       Less => ordering == Ordering::Less,
                                       Greater => ordering == Ordering::Greater,
                                       LessEqual => ordering != Ordering::Greater,
                                       _ => ordering != Ordering::Less,
                                   },
                                   // NaN is unordered against everything.
                                   None => false,
                               }
                           },
                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}

fn values_equal(left: &Value, right: &Value) -> EvalResult<bool> {
    use Value::{Bool, Integer, Str};

    Ok(match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Str(a), Str(b)) => a == b,
        (Bool(a), Bool(b)) => a == b,
        _ if left.is_numeric() && right.is_numeric() => left.as_real()? == right.as_real()?,
        _ => false,
    })
}

fn compare_values(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    use Value::{Integer, Str};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(Some(a.cmp(b))),
        (Str(a), Str(b)) => Ok(Some(a.cmp(b))),
        _ if left.is_numeric() && right.is_numeric() => {
            Ok(left.as_real()?.partial_cmp(&right.as_real()?))
        },
        _ => Err(RuntimeError::invalid_expression(format!("'{op}' not supported between '{}' and '{}'",
                                                          left.type_name(),
                                                          right.type_name()))),
    }
}
