/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression. Parse errors include unexpected tokens, unterminated input and
/// literals that do not fit their type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error a single statement can raise while it is classified
/// or executed: malformed statements, bad identifiers, invalid expressions and
/// division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
