//! # kaka
//!
//! kaka is a tree-walking interpreter for Kaka, a small dynamically typed
//! scripting language whose keywords are Bengali phrases.
//! It tokenizes, parses and evaluates programs with variables, arrays,
//! first-class functions, loops and console input and output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{
    console::Console, evaluator::core::Interpreter, lexer::tokenize, limits::Limits,
    parser::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser, traversed by the evaluator and rendered back to
/// source by the printer.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Records the source line of every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the line it occurred on and renders as
/// `Error on line N: ...`. The top-level [`error::Error`] wraps the error of
/// whichever stage failed.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Attaches line numbers and bilingual messages for user feedback.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the host interface to provide a complete runtime for
/// Kaka programs.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Defines the console and limit types a host configures a run with.
pub mod interpreter;
/// Renders a parsed program back to canonical source text.
pub mod printer;
/// General utilities shared by several stages.
///
/// # Responsibilities
/// - Convert numerals, including Bengali digits, to numbers.
/// - Render numbers the way print shows them.
pub mod util;

pub use error::Error;

/// Runs a complete Kaka program.
///
/// The source is tokenized, parsed and evaluated in a fresh interpreter.
/// Printed lines go to `console`, and input is read from it.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. A lexical or syntax
/// error means nothing was executed; after a runtime error, the output printed
/// before it has already reached the console.
///
/// # Examples
/// ```
/// use kaka::{
///     interpreter::{console::BufferedConsole, limits::Limits},
///     run,
/// };
///
/// let source = "ও কাকা কাকা রাখো x = 5; কাকা রাখো y = 3; কাকা বলো x + y; আসি কাকা";
/// let mut console = BufferedConsole::new();
/// assert!(run(source, &mut console, Limits::default()).is_ok());
/// assert_eq!(console.output(), ["8"]);
///
/// // An undefined variable is a runtime error.
/// let source = "ও কাকা কাকা বলো y; আসি কাকা";
/// assert!(run(source, &mut BufferedConsole::new(), Limits::default()).is_err());
/// ```
pub fn run(source: &str, console: &mut dyn Console, limits: Limits) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    debug!("parsed {} statements", program.statements.len());

    Interpreter::new(console, limits).interpret(&program)?;
    Ok(())
}
