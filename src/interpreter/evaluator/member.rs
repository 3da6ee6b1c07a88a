use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::{
            core::{ArrayRef, Value},
            native::ArrayMethod,
        },
    },
};

impl Interpreter<'_> {
    /// Evaluates the elements in order and collects them into a new array.
    pub(crate) fn eval_array_literal(&mut self,
                                     elements: &[Expr],
                                     scope: ScopeId)
                                     -> EvalResult<Value> {
        let items = elements.iter()
                            .map(|element| self.eval(element, scope))
                            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(items))
    }

    /// Evaluates `object[property]`.
    ///
    /// Only arrays have members. A numeric property indexes the array, with
    /// anything outside `0..length` (including fractions and NaN) reading
    /// as undefined. The string properties are `length`, `push` and `pop`;
    /// the latter two produce a method bound to the array.
    ///
    /// # Errors
    /// `UnsupportedMember` when the object is not an array or the property
    /// is any other value.
    pub(crate) fn eval_member(&mut self,
                              object: &Expr,
                              property: &Expr,
                              line: usize,
                              scope: ScopeId)
                              -> EvalResult<Value> {
        let object = self.eval(object, scope)?;
        let property = self.eval(property, scope)?;

        let Value::Array(items) = object else {
            return Err(RuntimeError::UnsupportedMember { line });
        };

        match property {
            Value::Number(index) => Ok(element_at(&items, index)),
            Value::Str(name) if &*name == "length" => {
                let len = items.borrow().len();
                Ok(Value::from_length(len))
            },
            Value::Str(name) => match ArrayMethod::from_name(&name) {
                Some(method) => Ok(Value::Native { method,
                                                   receiver: items }),
                None => Err(RuntimeError::UnsupportedMember { line }),
            },
            _ => Err(RuntimeError::UnsupportedMember { line }),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn element_at(items: &ArrayRef, index: f64) -> Value {
    if index.fract() != 0.0 || index < 0.0 || !index.is_finite() {
        return Value::Undefined;
    }

    items.borrow()
         .get(index as usize)
         .cloned()
         .unwrap_or(Value::Undefined)
}
