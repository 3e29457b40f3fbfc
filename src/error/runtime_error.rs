use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that a single statement can raise.
///
/// Every variant is recoverable: the program interpreter renders it as an
/// `Error: <message>` output line and carries on with the next statement.
pub enum RuntimeError {
    /// A variable name does not match `[A-Za-z][A-Za-z0-9_]*`.
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
    /// An expression failed to parse or to evaluate.
    InvalidExpression {
        /// Details about the failure.
        details: String,
    },
    /// The right operand of `/`, `//` or `%` was zero, or zero was raised to
    /// a negative power.
    DivisionByZero,
    /// An `if` statement did not have the `if condition: body` shape.
    InvalidConditional,
    /// A statement had the wrong number of parts.
    InvalidStatementShape {
        /// The kind of statement, e.g. `assignment` or `open folder`.
        kind: &'static str,
    },
    /// The statement matched none of the known statement forms.
    UnknownStatement {
        /// The statement text.
        statement: String,
    },
    /// The input source had no more lines to give.
    InputUnavailable {
        /// The variable that was waiting for a value.
        name: String,
    },
    /// Folder or conditional re-entry went deeper than the allowed limit.
    NestingTooDeep {
        /// The maximum allowed depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Builds an [`RuntimeError::InvalidExpression`] from anything printable.
    pub fn invalid_expression(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }
}

impl From<ParseError> for RuntimeError {
    fn from(error: ParseError) -> Self {
        Self::InvalidExpression { details: error.to_string() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { name } => write!(f,
                                                       "Invalid identifier '{name}': names must start with a letter and contain only letters, digits and underscores"),
            Self::InvalidExpression { details } => write!(f, "Invalid expression: {details}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::InvalidConditional => {
                write!(f, "Invalid if statement, expected 'if condition: body'")
            },
            Self::InvalidStatementShape { kind } => write!(f, "Invalid {kind} statement"),
            Self::UnknownStatement { statement } => write!(f, "Invalid statement: {statement}"),
            Self::InputUnavailable { name } => write!(f, "No input available for '{name}'"),
            Self::NestingTooDeep { limit } => {
                write!(f, "Maximum nesting depth of {limit} exceeded")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
