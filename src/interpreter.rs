/// The console module connects a running program to its host.
///
/// Print statements send their rendered line to a [`console::Console`], and
/// input expressions ask it for a line. `StdConsole` talks to the terminal;
/// `BufferedConsole` records output and replays queued input.
pub mod console;
/// The environment module stores variable bindings.
///
/// Scopes live in an arena indexed by `ScopeId`. Each scope has an optional
/// parent, and lookups walk the parent chain outward to the global scope.
///
/// # Responsibilities
/// - Creates and discards block and function scopes.
/// - Declares variables in a specific scope.
/// - Resolves reads and assignments through the scope chain.
pub mod environment;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements and expressions, applies the language's
/// implicit conversions, calls functions and array methods, and talks to the
/// console. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression kind and executes every statement kind.
/// - Propagates `break`, `continue` and `return` as control flow.
/// - Enforces the host's execution limits.
/// - Reports runtime errors such as undefined variables or calling a
///   non-function.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// corresponding to a keyword phrase, literal, identifier or punctuation mark.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Recognizes the one- and two-word Bengali keywords.
/// - Handles Bengali and ASCII digits, string literals and comments.
/// - Tracks the line of every token and reports unknown characters.
pub mod lexer;
/// Host-imposed execution limits.
pub mod limits;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. It consumes the token stream produced by the lexer and checks the
/// program's start and end markers.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting the first error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings, booleans, null, undefined, shared arrays,
/// user-defined functions and bound array methods. The module implements the
/// conversions the operators rely on and the printed form of each value.
pub mod value;
