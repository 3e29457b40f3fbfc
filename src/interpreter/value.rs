/// Runtime values.
///
/// Defines the `Value` enum over integers, reals, strings and booleans,
/// together with truthiness, numeric promotion and the canonical rendering
/// used by `print`.
pub mod core;
