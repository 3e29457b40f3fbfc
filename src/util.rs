/// Numeric conversion helpers.
///
/// Use these helpers whenever a value crosses between `i64`, `u32`, `usize`
/// and `f64`. Conversions that can fail return a
/// [`RuntimeError`](crate::error::RuntimeError); promotion to `f64` rounds.
pub mod num;
