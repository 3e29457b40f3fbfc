/// Routes a binary operator to its specialised handler.
pub mod core;

/// `+ - * / // %` over integers, reals and strings.
pub mod arithmetic;

/// `**`
pub mod power;

/// Equality and ordering.
pub mod comparison;

/// Short-circuit `and` / `or`.
pub mod logic;
