use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `এবং` / `অথবা` with short-circuiting.
    ///
    /// The result is one of the operands, not a boolean: `এবং` yields the
    /// left operand when it is falsy, `অথবা` when it is truthy, and
    /// otherwise both yield the right operand. The right operand is only
    /// evaluated when it decides the result.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr,
                               scope: ScopeId)
                               -> EvalResult<Value> {
        let left = self.eval(left, scope)?;

        let short_circuits = match op {
            LogicalOperator::And => !left.is_truthy(),
            LogicalOperator::Or => left.is_truthy(),
        };

        if short_circuits { Ok(left) } else { self.eval(right, scope) }
    }
}
