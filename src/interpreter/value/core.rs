use crate::{
    ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Every variable binding holds one of these, and every expression evaluates
/// to one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A string of text.
    Str(String),
    /// A boolean value, produced by comparisons, `not`, `and` and `or`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// Booleans are taken as-is, numbers are true when nonzero and strings are
    /// true when nonempty.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from("no").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Returns the name of the value's type as shown in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns `true` if the value is an integer or a real.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers above `2^53` are rounded to the nearest real.
    ///
    /// # Errors
    /// `InvalidExpression` if the value is not numeric.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert!(Value::from("10").as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::invalid_expression(format!("expected a number, found {}",
                                                              self.type_name()))),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_nan() {
                    write!(f, "nan")
                } else if r.is_infinite() {
                    write!(f, "{}", if *r > 0.0 { "inf" } else { "-inf" })
                } else if r.fract() == 0.0 && r.abs() < 1e16 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.clone().into(),
        }
    }
}
