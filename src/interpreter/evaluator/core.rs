use std::time::Instant;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        console::Console,
        environment::{Environment, GLOBAL_SCOPE, ScopeId},
        evaluator::{binary::apply_binary, statement::Flow},
        limits::Limits,
        value::core::Value,
    },
    util::stack::grow,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// An `Interpreter` owns the scope arena (whose frame 0 is the global scope),
/// borrows the console it prints to and reads from, and enforces the host's
/// [`Limits`]. Globals persist across calls to [`Self::interpret`].
///
/// # Example
/// ```
/// use kaka::interpreter::{
///     console::BufferedConsole, evaluator::core::Interpreter, lexer::tokenize, limits::Limits,
///     parser::parse_program,
/// };
///
/// let tokens = tokenize("ও কাকা কাকা বলো ২ * ৩; আসি কাকা").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// let mut console = BufferedConsole::new();
/// Interpreter::new(&mut console, Limits::default()).interpret(&program)
///                                                   .unwrap();
///
/// assert_eq!(console.output(), ["6"]);
/// ```
pub struct Interpreter<'c> {
    pub(crate) env:          Environment,
    pub(crate) console:      &'c mut dyn Console,
    pub(crate) limits:       Limits,
    pub(crate) started:      Instant,
    pub(crate) output_lines: usize,
    pub(crate) call_depth:   usize,
}

impl<'c> Interpreter<'c> {
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new(console: &'c mut dyn Console, limits: Limits) -> Self {
        Self { env: Environment::new(),
               console,
               limits,
               started: Instant::now(),
               output_lines: 0,
               call_depth: 0 }
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// A `break`, `continue` or `return` that reaches the top level stops the
    /// program without an error. The time limit is measured from the start
    /// of this call.
    ///
    /// # Errors
    /// Returns the first runtime error. Output printed before it stands, and
    /// globals defined before it remain set.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        self.started = Instant::now();
        debug!("interpreting {} top-level statements", program.statements.len());

        for statement in &program.statements {
            let flow = self.exec_statement(statement, GLOBAL_SCOPE)?;
            if !matches!(flow, Flow::Normal) {
                debug!("top-level {} on line {} stopped the program",
                       statement.kind_name(),
                       statement.line_number());
                break;
            }
        }

        Ok(())
    }

    /// Reads a global variable, for hosts inspecting a finished program.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.env.get(GLOBAL_SCOPE, name).cloned()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The stack is
    /// grown on demand so deeply nested expressions and recursion are bounded
    /// by [`Limits::max_call_depth`] rather than by the host stack.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The innermost scope visible to the expression.
    pub fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        grow(|| self.eval_inner(expr, scope))
    }

    fn eval_inner(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line, scope),
            Expr::Binary { left, op, right, .. } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                Ok(apply_binary(*op, &left, &right))
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right, scope),
            Expr::Assignment { name, value, line } => {
                self.eval_assignment(name, value, *line, scope)
            },
            Expr::Input { line } => self.eval_input(*line),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, scope),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements, scope),
            Expr::Member { object,
                           property,
                           line, } => self.eval_member(object, property, *line, scope),
        }
    }

    /// Looks up a variable through the scope chain.
    ///
    /// # Errors
    /// `UndefinedVariable` if no scope on the chain binds `name`.
    fn eval_identifier(&self, name: &str, line: usize, scope: ScopeId) -> EvalResult<Value> {
        self.env
            .get(scope, name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Evaluates the right-hand side, then stores it in the nearest scope that
    /// already binds `name`.
    ///
    /// # Returns
    /// The assigned value.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name was never declared. The right-hand
    /// side has been evaluated by then, including its side effects.
    fn eval_assignment(&mut self,
                       name: &str,
                       value: &Expr,
                       line: usize,
                       scope: ScopeId)
                       -> EvalResult<Value> {
        let value = self.eval(value, scope)?;

        if self.env.assign(scope, name, value.clone()) {
            Ok(value)
        } else {
            Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                  line })
        }
    }

    /// Fails once the configured time limit has elapsed.
    pub(crate) fn check_time(&self, line: usize) -> EvalResult<()> {
        if let Some(limit) = self.limits.time_limit
           && self.started.elapsed() > limit
        {
            return Err(RuntimeError::TimeLimitExceeded { millis: limit.as_millis(),
                                                         line });
        }
        Ok(())
    }
}
