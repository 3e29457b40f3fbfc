#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing of an
/// expression.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column (byte offset) where the token starts.
        column: usize,
    },
    /// Reached the end of the expression unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column where the closing parenthesis was expected.
        column: usize,
    },
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The extra token.
        token:  String,
        /// The column where the extra token starts.
        column: usize,
    },
    /// A literal value was too large to be represented.
    LiteralTooLarge {
        /// The column where the literal starts.
        column: usize,
    },
    /// The expression tree grew deeper than the parser allows.
    NestingTooDeep {
        /// The column of the token that went past the limit.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "unexpected token '{token}' at column {column}")
            },
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Self::ExpectedClosingParen { column } => {
                write!(f, "expected closing parenthesis ')' at column {column}")
            },
            Self::UnexpectedTrailingTokens { token, column } => {
                write!(f, "unexpected '{token}' after expression at column {column}")
            },
            Self::LiteralTooLarge { column } => {
                write!(f, "literal at column {column} is too large")
            },
            Self::NestingTooDeep { column } => {
                write!(f, "expression is nested too deeply at column {column}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
