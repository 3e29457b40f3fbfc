/// Core parser entry points.
///
/// Defines the parse result type, the expression entry point and the helper
/// that lexes and parses a complete expression string.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators (`-`, `not`), literals, identifiers and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical `or` down to `**`.
pub mod binary;

/// Statement classification.
///
/// Turns one trimmed statement string into a [`Statement`](crate::ast::Statement),
/// following the fixed prefix order of the language.
pub mod statement;
