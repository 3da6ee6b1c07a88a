/// Numeral helpers.
///
/// This module converts between the textual and numeric forms of numbers:
/// normalizing Bengali digits to ASCII, converting strings to numbers with
/// JavaScript `Number()` rules, and rendering numbers with JavaScript
/// `String()` rules. The interpreter, the parser and the printer all share
/// these conversions so that a value always reads and prints the same way.
pub mod num;
/// Stack growth for deep recursion.
pub mod stack;
