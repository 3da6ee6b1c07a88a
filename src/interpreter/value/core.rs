use std::{cell::RefCell, cmp::Ordering, fmt, rc::Rc};

use crate::{
    ast::{FunctionDecl, LiteralValue},
    interpreter::value::native::ArrayMethod,
    util::num::{format_number, parse_js_number},
};

/// A shared, mutable array. Cloning the handle aliases the same elements.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// Equality (`==` on `Value`) is the language's strict equality: numbers
/// compare by IEEE value (so NaN is unequal to itself), strings by content,
/// arrays and functions by identity.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// `ঠিক` or `ভুল`.
    Bool(bool),
    /// `ফালতু`.
    Null,
    /// The absent value: a missing argument, an out-of-range index, or `pop`
    /// on an empty array.
    Undefined,
    /// An array shared by reference.
    Array(ArrayRef),
    /// A user-defined function, held by reference to its declaration.
    Function(Rc<FunctionDecl>),
    /// A native array method bound to the array it was read from.
    Native {
        /// Which method.
        method:   ArrayMethod,
        /// The array the method operates on.
        receiver: ArrayRef,
    },
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::from(s.as_str()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl Value {
    /// Builds the number returned by `length` and `push`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn from_length(len: usize) -> Self {
        Self::Number(len as f64)
    }

    /// Returns the name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Array(_) => "array",
            Self::Function(_) | Self::Native { .. } => "function",
        }
    }

    /// Decides how the value behaves as a condition.
    ///
    /// `ভুল`, null, undefined, `0`, NaN and the empty string are falsy;
    /// everything else, including every array, is truthy.
    ///
    /// # Example
    /// ```
    /// use kaka::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from(Vec::<Value>::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Null | Self::Undefined => false,
            Self::Array(_) | Self::Function(_) | Self::Native { .. } => true,
        }
    }

    /// Converts the value to a number the way arithmetic operators do.
    ///
    /// Null is `0`, undefined is NaN, booleans are `1`/`0`, strings are
    /// parsed with JavaScript `Number()` rules, and arrays are converted via
    /// their printed form (`[]` is `0`, `[5]` is `5`).
    ///
    /// # Example
    /// ```
    /// use kaka::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(" 42 ").to_number(), 42.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Str(s) => parse_js_number(s).unwrap_or(f64::NAN),
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Null => 0.0,
            Self::Array(_) => parse_js_number(&self.to_string()).unwrap_or(f64::NAN),
            Self::Undefined | Self::Function(_) | Self::Native { .. } => f64::NAN,
        }
    }

    /// Returns `true` for values whose primitive form is a string: strings
    /// themselves, arrays and functions.
    ///
    /// `+` concatenates when either operand is string-like, and relational
    /// operators compare text when both are.
    #[must_use]
    pub const fn is_string_like(&self) -> bool {
        matches!(self,
                 Self::Str(_) | Self::Array(_) | Self::Function(_) | Self::Native { .. })
    }

    /// Strict equality: same type and same value, arrays and functions by
    /// identity. Native methods are never equal to anything.
    #[must_use]
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Orders two strings by UTF-16 code units, the way JavaScript compares
    /// strings.
    #[must_use]
    pub fn compare_text(left: &str, right: &str) -> Ordering {
        left.encode_utf16().cmp(right.encode_utf16())
    }
}

impl fmt::Display for Value {
    /// Renders the value as print shows it.
    ///
    /// Arrays print their elements joined by commas, with null and undefined
    /// elements left empty. An array that contains itself prints the inner
    /// occurrence as empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

fn write_value(f: &mut fmt::Formatter<'_>,
               value: &Value,
               open_arrays: &mut Vec<*const RefCell<Vec<Value>>>)
               -> fmt::Result {
    match value {
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::Str(s) => f.write_str(s),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Null => f.write_str("null"),
        Value::Undefined => f.write_str("undefined"),
        Value::Array(items) => {
            let ptr = Rc::as_ptr(items);
            if open_arrays.contains(&ptr) {
                return Ok(());
            }
            open_arrays.push(ptr);

            for (index, item) in items.borrow().iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                if !matches!(item, Value::Null | Value::Undefined) {
                    write_value(f, item, open_arrays)?;
                }
            }

            open_arrays.pop();
            Ok(())
        },
        Value::Function(decl) => write!(f, "[ফাংশন {}]", decl.name),
        Value::Native { method, .. } => write!(f, "[ফাংশন {}]", method.name()),
    }
}
