/// Call dispatch and the builtin table.
///
/// Evaluates call expressions, invokes user closures in a scope nested in the
/// one they captured, and registers the runtime library.
pub mod core;
/// Array builtins and the generic lookups.
///
/// `lambai`, `thuss`, `kaddh`, `agge_ho`, `palt` and `labho`.
pub mod builtin;
/// String builtins.
///
/// `vadda_kro`, `chhota_kro` and `katt`.
pub mod text;
