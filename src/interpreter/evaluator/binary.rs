/// Operator dispatch.
///
/// Routes a binary operator to the arithmetic, comparison or logic handler.
pub mod core;

/// Arithmetic and string concatenation.
pub mod scalar;

/// Equality and relational comparison.
pub mod comparison;

/// Short-circuiting `&&` and `||`.
pub mod logic;
