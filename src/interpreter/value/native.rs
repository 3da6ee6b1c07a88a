use crate::interpreter::value::core::{ArrayRef, Value};

/// A built-in array method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMethod {
    /// Appends every argument and returns the new length.
    Push,
    /// Removes and returns the last element, or undefined when empty.
    Pop,
}

impl ArrayMethod {
    /// Resolves a property name to a method.
    ///
    /// # Example
    /// ```
    /// use kaka::interpreter::value::native::ArrayMethod;
    ///
    /// assert_eq!(ArrayMethod::from_name("push"), Some(ArrayMethod::Push));
    /// assert_eq!(ArrayMethod::from_name("length"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "push" => Some(Self::Push),
            "pop" => Some(Self::Pop),
            _ => None,
        }
    }

    /// The property name the method is read under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pop => "pop",
        }
    }

    /// Runs the method against `receiver`.
    ///
    /// The mutation is visible through every binding that shares the array.
    pub fn call(self, receiver: &ArrayRef, arguments: Vec<Value>) -> Value {
        match self {
            Self::Push => {
                let mut items = receiver.borrow_mut();
                items.extend(arguments);
                Value::from_length(items.len())
            },
            Self::Pop => receiver.borrow_mut().pop().unwrap_or(Value::Undefined),
        }
    }
}
