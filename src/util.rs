/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `f64` language
/// numbers and the `usize` indices and lengths used by arrays and strings,
/// without risking silent truncation.
pub mod num;
/// Stack safety for deep recursion.
///
/// Parsing and evaluation are both recursive. Wrapping the recursive entry
/// points keeps deeply nested programs from overflowing the native stack.
pub mod stack;
