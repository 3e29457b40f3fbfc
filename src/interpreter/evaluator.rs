/// Core evaluation logic.
///
/// Contains the `Evaluator`, which resolves variables against a
/// [`VariableStore`](crate::interpreter::state::VariableStore) and walks the
/// expression tree, plus the string-level `evaluate` entry point.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical `not`.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation, comparisons and the short-circuit
/// logical operators.
pub mod binary;
