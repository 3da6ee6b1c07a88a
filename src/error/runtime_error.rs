use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// Read or assignment of a name that no enclosing scope binds.
    #[error("Error on line {line}: Variable '{name}' not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Call of a value that is neither a function nor a native method.
    #[error("Error on line {line}: Can only call functions, found {found}.")]
    NotCallable {
        /// The type name of the callee.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Member access on something other than an array, or with a property
    /// arrays do not have.
    #[error("Error on line {line}: Only arrays and their methods are supported.")]
    UnsupportedMember {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program printed more lines than the host allows.
    #[error("Error on line {line}: Output limit of {limit} lines exceeded.")]
    OutputLimitExceeded {
        /// The configured maximum number of lines.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The program ran longer than the host allows.
    #[error("Error on line {line}: Time limit of {millis} ms exceeded.")]
    TimeLimitExceeded {
        /// The configured time limit in milliseconds.
        millis: u128,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Function calls nested deeper than the host allows.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded.")]
    CallDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
