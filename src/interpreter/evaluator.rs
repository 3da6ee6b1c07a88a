/// Core evaluation logic for expressions.
///
/// Contains the `Interpreter` state, the expression dispatcher, variable
/// access and the execution-limit checks shared by the other modules.
pub mod core;

/// Statement execution.
///
/// Runs statements and blocks and reports non-local control flow (`Flow`)
/// for break, continue and return.
pub mod statement;

/// Binary operator evaluation.
///
/// Arithmetic, concatenation and comparison with the language's implicit
/// conversions.
pub mod binary;

/// Short-circuiting `এবং` / `অথবা`.
pub mod logic;

/// Function calls.
///
/// Dispatches to native array methods or runs the call protocol for
/// user-defined functions.
pub mod function;

/// Array literals and member access.
pub mod member;

/// Console interaction: print statements and input expressions.
pub mod io;
