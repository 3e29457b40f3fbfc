use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Promotes an `i64` to `f64` for mixed or real-valued arithmetic.
///
/// Integers beyond `2^53` round to the nearest representable real, the same
/// way a float literal of that size would.
///
/// ## Example
/// ```
/// use plex::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns an `InvalidExpression` error if the value is negative or does not
/// fit into a `u32`.
///
/// ## Example
/// ```
/// use plex::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45).unwrap(), 45);
/// assert!(i64_to_u32_checked(-1).is_err());
/// assert!(i64_to_u32_checked(i64::MAX).is_err());
/// ```
pub fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| {
                            RuntimeError::invalid_expression(format!("exponent {value} is out of range"))
                        })
}

/// Converts a repetition count to `usize`, clamping negative counts to zero.
///
/// ## Example
/// ```
/// use plex::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), 3);
/// assert_eq!(repeat_count(-2), 0);
/// ```
#[must_use]
pub fn repeat_count(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
