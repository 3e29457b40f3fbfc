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
    util::num::{i64_to_f64, repeat_count},
};

/// Longest string that concatenation or repetition may produce.
pub const MAX_STRING_LEN: usize = 1 << 20;

fn overflow() -> RuntimeError {
    RuntimeError::invalid_expression("integer overflow")
}

fn string_too_long() -> RuntimeError {
    RuntimeError::invalid_expression(format!("string result longer than {MAX_STRING_LEN} bytes"))
}

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*`, `/`, `//` or `%`.
    ///
    /// Two integers stay integral except under `/`, which always yields a
    /// real. An integer mixed with a real is promoted to real. Strings support
    /// concatenation with `+` and repetition by an integer with `*`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero right operand of `/`, `//` or `%`.
    /// - `InvalidExpression` for overflow or unsupported operand types.
    ///
    /// # Example
    /// ```
    /// use plex::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let floor = Evaluator::eval_arithmetic(BinaryOperator::FloorDiv,
    ///                                        &Value::Integer(-7),
    ///                                        &Value::Integer(2)).unwrap();
    /// assert_eq!(floor, Value::Integer(-4));
    ///
    /// let repeated = Evaluator::eval_arithmetic(BinaryOperator::Mul,
    ///                                           &Value::from("ab"),
    ///                                           &Value::Integer(3)).unwrap();
    /// assert_eq!(repeated, Value::from("ababab"));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::{Integer, Str};

        match (op, left, right) {
            (Add, Str(a), Str(b)) => {
                if a.len() + b.len() > MAX_STRING_LEN {
                    return Err(string_too_long());
                }
                Ok(Str(format!("{a}{b}")))
            },
            (Mul, Str(s), Integer(n)) | (Mul, Integer(n), Str(s)) => {
                let count = repeat_count(*n);
                if s.len().saturating_mul(count) > MAX_STRING_LEN {
                    return Err(string_too_long());
                }
                Ok(Str(s.repeat(count)))
            },
            (_, Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b),
            _ if left.is_numeric() && right.is_numeric() => {
                Self::eval_real_op(op, left.as_real()?, right.as_real()?)
            },
            _ => Err(unsupported_operands(op, left, right)),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Sub};

        match op {
            Add => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
            Sub => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
            Mul => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Real(i64_to_f64(a) / i64_to_f64(b)))
            },
            FloorDiv => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                let quotient = a.checked_div(b).ok_or_else(overflow)?;
                if a % b != 0 && ((a < 0) != (b < 0)) {
                    Ok(Value::Integer(quotient - 1))
                } else {
                    Ok(Value::Integer(quotient))
                }
            },
            Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                let remainder = a.wrapping_rem(b);
                if remainder != 0 && ((remainder < 0) != (b < 0)) {
                    Ok(Value::Integer(remainder + b))
                } else {
                    Ok(Value::Integer(remainder))
                }
            },
            _ => unreachable!("eval_integer_op used with non arithmetic operator"),
        }
    }

    fn eval_real_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Sub};

        if matches!(op, Div | FloorDiv | Mod) && b == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           Div => a / b,
                           FloorDiv => (a / b).floor(),
                           Mod => {
                               let remainder = a % b;
                               if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
                                   remainder + b
                               } else {
                                   remainder
                               }
                           },
                           _ => unreachable!("eval_real_op used with non arithmetic operator"),
                       }))
    }
}
