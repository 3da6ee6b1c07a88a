use std::collections::HashMap;

use log::trace;

use crate::interpreter::value::core::Value;

/// Index of a scope frame inside an [`Environment`].
pub type ScopeId = usize;

/// The global scope. It is created with the environment and never popped.
pub const GLOBAL_SCOPE: ScopeId = 0;

/// One scope record: its bindings plus the scope lookups continue in.
#[derive(Debug, Default)]
struct Frame {
    vars:   HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Stores every live scope of a running program.
///
/// Frames are kept in an arena addressed by [`ScopeId`] and used as a stack:
/// blocks and function calls push a frame and pop it again when control
/// leaves them. The parent link of a frame is a plain index, so it never
/// owns the enclosing scope. A block's parent is the scope it appears in; a
/// function call's parent is always the global scope.
///
/// # Example
/// ```
/// use kaka::interpreter::{
///     environment::{Environment, GLOBAL_SCOPE},
///     value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// env.define(GLOBAL_SCOPE, "x", Value::Number(1.0));
///
/// let block = env.push_scope(GLOBAL_SCOPE);
/// env.define(block, "y", Value::Number(2.0));
/// assert!(env.assign(block, "x", Value::Number(3.0)));
/// env.pop_scope(block);
///
/// assert_eq!(env.get(GLOBAL_SCOPE, "x"), Some(&Value::Number(3.0)));
/// assert_eq!(env.get(GLOBAL_SCOPE, "y"), None);
/// ```
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Pushes a new, empty scope whose lookups fall back to `parent`.
    ///
    /// # Returns
    /// The id of the new scope, to be passed back to [`Self::pop_scope`].
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.frames.push(Frame { vars:   HashMap::new(),
                                 parent: Some(parent), });
        let id = self.frames.len() - 1;
        trace!("pushed scope {id} (parent {parent})");
        id
    }

    /// Discards `scope` and every scope pushed after it.
    ///
    /// The global scope cannot be popped; asking for it is a no-op.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        if scope > GLOBAL_SCOPE {
            self.frames.truncate(scope);
            trace!("popped scope {scope}");
        }
    }

    /// The number of live scopes, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `name` in `scope` itself, shadowing any outer binding and
    /// replacing an existing one in the same scope.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: Value) {
        if let Some(frame) = self.frames.get_mut(scope) {
            frame.vars.insert(name.to_string(), value);
        }
    }

    /// Looks `name` up starting at `scope` and following parent links.
    ///
    /// # Returns
    /// A reference to the value if found, otherwise `None`.
    #[must_use]
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.frames.get(id)?;
            if let Some(value) = frame.vars.get(name) {
                return Some(value);
            }
            current = frame.parent;
        }
        None
    }

    /// Replaces the value of the nearest existing binding of `name`.
    ///
    /// # Returns
    /// `false` if no scope on the chain binds `name`; nothing is changed then.
    pub fn assign(&mut self, scope: ScopeId, name: &str, value: Value) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let Some(frame) = self.frames.get_mut(id) else {
                return false;
            };
            if let Some(slot) = frame.vars.get_mut(name) {
                *slot = value;
                return true;
            }
            current = frame.parent;
        }
        false
    }
}
