/// The runtime value type.
///
/// Defines the `Value` enum together with the conversions the language
/// applies implicitly: truthiness, numeric conversion, strict equality, and
/// rendering for print.
pub mod core;
/// Native array methods.
///
/// `push` and `pop` are the only built-in callables. Reading them from an
/// array produces a value that remembers its receiver array.
pub mod native;
