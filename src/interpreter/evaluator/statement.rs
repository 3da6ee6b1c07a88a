use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        environment::{GLOBAL_SCOPE, ScopeId},
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::stack::grow,
};

/// How control leaves a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break,
    /// Skip to the next condition check of the innermost loop.
    Continue,
    /// Leave the current function with a value.
    Return(Value),
}

impl Interpreter<'_> {
    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `scope`: The innermost scope; declarations bind here.
    ///
    /// # Returns
    /// The [`Flow`] the statement ends with.
    pub fn exec_statement(&mut self, statement: &Statement, scope: ScopeId) -> EvalResult<Flow> {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                let value = self.eval(value, scope)?;
                self.env.define(scope, name, value);
                Ok(Flow::Normal)
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr, scope)?;
                self.print_value(&value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition, scope)?.is_truthy() {
                    self.exec_block(then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch, scope)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, line } => {
                self.exec_while(condition, body, *line, scope)
            },
            Statement::Block(block) => self.exec_block(block, scope),
            Statement::Expression { expr, .. } => {
                self.eval(expr, scope)?;
                Ok(Flow::Normal)
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Function(decl) => {
                trace!("declaring function {} with {} parameters",
                       decl.name,
                       decl.params.len());
                self.env
                    .define(GLOBAL_SCOPE, &decl.name, Value::Function(Rc::clone(decl)));
                Ok(Flow::Normal)
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, scope)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes a block in a fresh child scope of `scope`.
    ///
    /// The child scope is discarded afterwards, also when a statement fails.
    pub fn exec_block(&mut self, block: &Block, scope: ScopeId) -> EvalResult<Flow> {
        let inner = self.env.push_scope(scope);
        let result = grow(|| self.exec_statements(&block.statements, inner));
        self.env.pop_scope(inner);
        result
    }

    /// Executes statements in order directly in `scope`, stopping at the
    /// first one that does not complete normally.
    pub fn exec_statements(&mut self, statements: &[Statement], scope: ScopeId) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec_statement(statement, scope)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs a `while` loop.
    ///
    /// `Break` ends the loop normally, `Continue` moves on to the next
    /// condition check, and `Return` propagates out of the loop.
    fn exec_while(&mut self,
                  condition: &Expr,
                  body: &Block,
                  line: usize,
                  scope: ScopeId)
                  -> EvalResult<Flow> {
        while self.eval(condition, scope)?.is_truthy() {
            self.check_time(line)?;

            match self.exec_block(body, scope)? {
                Flow::Break => break,
                Flow::Normal | Flow::Continue => {},
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }
}
