use std::cmp::Ordering;

use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Applies a binary operator to two evaluated operands.
///
/// Binary operators never fail: mismatched types are converted the way
/// JavaScript converts them.
///
/// - `+` concatenates the printed forms when either operand is a string,
///   array or function, and adds numerically otherwise.
/// - `-`, `*`, `/` and `%` convert both operands to numbers. Division by zero
///   yields an infinity or NaN, and `%` keeps the sign of the dividend.
/// - `<`, `>`, `<=` and `>=` compare text when both operands are string-like
///   and numbers otherwise. Any comparison involving NaN is false.
/// - `==` and `!=` are strict equality.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The resulting value.
///
/// # Example
/// ```
/// use kaka::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::apply_binary, value::core::Value},
/// };
///
/// let sum = apply_binary(BinaryOperator::Add, &Value::from("x"), &Value::Number(1.0));
/// assert_eq!(sum, Value::from("x1"));
///
/// let less = apply_binary(BinaryOperator::Less, &Value::from("10"), &Value::from("9"));
/// assert_eq!(less, Value::Bool(true));
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };

    match op {
        Add => {
            if left.is_string_like() || right.is_string_like() {
                Value::from(format!("{left}{right}"))
            } else {
                Value::Number(left.to_number() + right.to_number())
            }
        },
        Sub => Value::Number(left.to_number() - right.to_number()),
        Mul => Value::Number(left.to_number() * right.to_number()),
        Div => Value::Number(left.to_number() / right.to_number()),
        Mod => Value::Number(left.to_number() % right.to_number()),

        Less => Value::Bool(matches!(compare(left, right), Some(Ordering::Less))),
        Greater => Value::Bool(matches!(compare(left, right), Some(Ordering::Greater))),
        LessEqual => Value::Bool(matches!(compare(left, right),
                                          Some(Ordering::Less | Ordering::Equal))),
        GreaterEqual => Value::Bool(matches!(compare(left, right),
                                             Some(Ordering::Greater | Ordering::Equal))),

        Equal => Value::Bool(left.strict_equals(right)),
        NotEqual => Value::Bool(!left.strict_equals(right)),
    }
}

/// Orders two operands for the relational operators.
///
/// Returns `None` when the operands are unordered, which happens exactly when
/// a numeric comparison involves NaN.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    if left.is_string_like() && right.is_string_like() {
        Some(Value::compare_text(&left.to_string(), &right.to_string()))
    } else {
        left.to_number().partial_cmp(&right.to_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_addition_and_concatenation() {
        assert_eq!(apply_binary(BinaryOperator::Add, &num(2.0), &num(3.0)), num(5.0));
        assert_eq!(apply_binary(BinaryOperator::Add, &Value::Bool(true), &num(1.0)), num(2.0));
        assert_eq!(apply_binary(BinaryOperator::Add, &Value::Null, &Value::from("a")),
                   Value::from("nulla"));
        assert_eq!(apply_binary(BinaryOperator::Add,
                                &Value::from(vec![num(1.0), num(2.0)]),
                                &num(3.0)),
                   Value::from("1,23"));

        let undefined_sum = apply_binary(BinaryOperator::Add, &Value::Undefined, &num(1.0));
        assert!(matches!(undefined_sum, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_arithmetic_coercion() {
        assert_eq!(apply_binary(BinaryOperator::Sub, &Value::from("10"), &num(4.0)), num(6.0));
        assert_eq!(apply_binary(BinaryOperator::Mul, &Value::from(" 3 "), &Value::Null),
                   num(0.0));
        assert_eq!(apply_binary(BinaryOperator::Mod, &num(-7.0), &num(3.0)), num(-1.0));
        assert_eq!(apply_binary(BinaryOperator::Div, &num(1.0), &num(0.0)),
                   num(f64::INFINITY));

        let quotient = apply_binary(BinaryOperator::Div, &Value::from("abc"), &num(2.0));
        assert!(matches!(quotient, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply_binary(BinaryOperator::Less, &num(1.0), &num(2.0)), Value::Bool(true));
        assert_eq!(apply_binary(BinaryOperator::GreaterEqual, &num(2.0), &num(2.0)),
                   Value::Bool(true));
        assert_eq!(apply_binary(BinaryOperator::Less, &Value::from("10"), &num(9.0)),
                   Value::Bool(false));
        assert_eq!(apply_binary(BinaryOperator::Less, &Value::from("b"), &Value::from("ab")),
                   Value::Bool(false));

        let nan = num(f64::NAN);
        for op in [BinaryOperator::Less,
                   BinaryOperator::Greater,
                   BinaryOperator::LessEqual,
                   BinaryOperator::GreaterEqual]
        {
            assert_eq!(apply_binary(op, &nan, &num(1.0)), Value::Bool(false));
        }
    }

    #[test]
    fn test_strict_equality() {
        assert_eq!(apply_binary(BinaryOperator::Equal, &num(1.0), &Value::from("1")),
                   Value::Bool(false));
        assert_eq!(apply_binary(BinaryOperator::Equal, &Value::Null, &Value::Undefined),
                   Value::Bool(false));
        assert_eq!(apply_binary(BinaryOperator::NotEqual, &num(f64::NAN), &num(f64::NAN)),
                   Value::Bool(true));

        let array = Value::from(vec![num(1.0)]);
        assert_eq!(apply_binary(BinaryOperator::Equal, &array, &array.clone()),
                   Value::Bool(true));
        assert_eq!(apply_binary(BinaryOperator::Equal, &array, &Value::from(vec![num(1.0)])),
                   Value::Bool(false));
    }
}
