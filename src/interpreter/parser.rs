/// Program entry point and the top of the expression grammar.
///
/// Contains the `ParseResult` alias, the program-level rules for the start and
/// end markers, and assignment, the lowest-precedence expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from logical OR down to
/// multiplication.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by bare blocks, branches,
/// loop bodies and function bodies.
pub mod block;

/// Call, member and primary expressions.
///
/// Handles the highest-precedence level: literals, identifiers, array
/// literals, grouping, and the postfix call and index chains that follow them.
pub mod postfix;

/// Statement parsing.
///
/// Dispatches on the leading keyword to declarations, print, control flow,
/// functions and returns, falling back to expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Token inspection, required-token checks and comma-separated lists.
pub mod utils;

pub use self::core::{ParseResult, parse_program};
