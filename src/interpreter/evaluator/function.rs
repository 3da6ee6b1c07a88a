use log::trace;

use crate::{
    ast::{Expr, FunctionDecl},
    error::RuntimeError,
    interpreter::{
        environment::{GLOBAL_SCOPE, ScopeId},
        evaluator::{
            core::{EvalResult, Interpreter},
            statement::Flow,
        },
        value::core::Value,
    },
    util::stack::grow,
};

impl Interpreter<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line of the opening parenthesis.
    /// - `scope`: Scope the call expression is evaluated in.
    ///
    /// # Errors
    /// `NotCallable` when the callee is neither a user-defined function nor
    /// a bound array method, plus any error raised while evaluating the
    /// arguments or running the body.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let callee = self.eval(callee, scope)?;

        let arguments = arguments.iter()
                                 .map(|arg| self.eval(arg, scope))
                                 .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Native { method, receiver } => Ok(method.call(&receiver, arguments)),
            Value::Function(decl) => self.call_function(&decl, arguments, line),
            other => Err(RuntimeError::NotCallable { found: other.type_name(),
                                                     line }),
        }
    }

    /// Runs a user-defined function.
    ///
    /// The body runs in a new scope whose parent is the global scope, so a
    /// function sees globals and its own parameters but never the caller's
    /// locals. Missing arguments are undefined and extra ones are dropped.
    ///
    /// # Returns
    /// The value of the executed `ফেরত নাও`, or null when the body finishes
    /// without one.
    ///
    /// # Errors
    /// `CallDepthExceeded` when the call would nest deeper than the
    /// configured limit, `TimeLimitExceeded`, or any error from the body.
    pub fn call_function(&mut self,
                         decl: &FunctionDecl,
                         arguments: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        if self.call_depth >= self.limits.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.limits.max_call_depth,
                                                         line });
        }
        self.check_time(line)?;

        trace!("calling {} at depth {} with {} arguments",
               decl.name,
               self.call_depth + 1,
               arguments.len());

        let frame = self.env.push_scope(GLOBAL_SCOPE);
        let mut arguments = arguments.into_iter();
        for param in &decl.params {
            self.env
                .define(frame, param, arguments.next().unwrap_or(Value::Undefined));
        }

        self.call_depth += 1;
        let result = grow(|| self.exec_statements(&decl.body.statements, frame));
        self.call_depth -= 1;
        self.env.pop_scope(frame);

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal | Flow::Break | Flow::Continue => Ok(Value::Null),
        }
    }
}
