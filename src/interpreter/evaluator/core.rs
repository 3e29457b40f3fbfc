use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{parser::core::parse_source, state::VariableStore, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates expressions against a set of variable bindings.
///
/// Variables are looked up by whole identifier when the expression tree is
/// walked, so a binding named `x` can never leak into `x2` or into a
/// keyword.
pub struct Evaluator<'a> {
    variables: &'a VariableStore,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that reads from `variables`.
    #[must_use]
    pub const fn new(variables: &'a VariableStore) -> Self {
        Self { variables }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// - `InvalidExpression` for unknown variables, type mismatches and
    ///   integer overflow.
    /// - `DivisionByZero` when a division-like operator meets a zero divisor.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.into()),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right } => match op {
                BinaryOperator::And | BinaryOperator::Or => self.eval_logic(*op, left, right),
                _ => {
                    let left = self.eval(left)?;
                    let right = self.eval(right)?;
                    Self::eval_binary(*op, &left, &right)
                },
            },
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::invalid_expression(format!("name '{name}' is not defined")))
    }
}

/// Parses and evaluates `expression` using the current bindings.
///
/// # Errors
/// - `InvalidExpression` if the text does not parse or evaluation fails.
/// - `DivisionByZero` if a division-like operator meets a zero divisor.
///
/// # Example
/// ```
/// use plex::interpreter::{
///     evaluator::core::evaluate, state::VariableStore, value::core::Value,
/// };
///
/// let mut variables = VariableStore::new();
/// variables.set("x", Value::Integer(4));
/// variables.set("x2", Value::Integer(10));
///
/// assert_eq!(evaluate("x2 - x * 2", &variables).unwrap(), Value::Integer(2));
/// assert!(evaluate("y + 1", &variables).is_err());
/// ```
pub fn evaluate(expression: &str, variables: &VariableStore) -> EvalResult<Value> {
    let expr = parse_source(expression)?;
    Evaluator::new(variables).eval(&expr)
}
