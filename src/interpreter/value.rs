/// Callable values.
///
/// Defines [`Function`](function::Function), which is either a host builtin
/// from the runtime library or a user closure capturing the scope it was
/// declared in.
pub mod function;

/// Runtime value representation.
///
/// Declares the [`Value`](core::Value) enum with numbers, strings, booleans,
/// shared mutable arrays, functions and null, together with truthiness,
/// equality and the canonical text rendering used by `vikha`.
pub mod core;
