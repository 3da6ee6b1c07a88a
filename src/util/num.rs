/// First Bengali digit, `০` (U+09E6).
pub const BENGALI_ZERO: char = '\u{09E6}';
/// Last Bengali digit, `৯` (U+09EF).
pub const BENGALI_NINE: char = '\u{09EF}';

/// Rewrites every Bengali digit in `raw` as the matching ASCII digit.
///
/// All other characters, including `.`, are kept as they are. Numerals are
/// stored in tokens exactly as written and only normalized here, when the
/// parser turns them into literal values.
///
/// ## Example
/// ```
/// use kaka::util::num::normalize_digits;
///
/// assert_eq!(normalize_digits("১২.৫"), "12.5");
/// assert_eq!(normalize_digits("4২"), "42");
/// ```
#[must_use]
pub fn normalize_digits(raw: &str) -> String {
    raw.chars()
       .map(|ch| match ch {
           BENGALI_ZERO..=BENGALI_NINE => {
               let offset = u32::from(ch) - u32::from(BENGALI_ZERO);
               char::from_digit(offset, 10).unwrap_or(ch)
           },
           _ => ch,
       })
       .collect()
}

/// Converts text to a number the way JavaScript's `Number(text)` does.
///
/// Leading and trailing whitespace is ignored and blank text converts to `0`.
/// Accepted forms are decimal literals with optional sign, fraction and
/// exponent (`-1.5e3`, `.5`, `5.`), `Infinity` with optional sign, and
/// unsigned `0x`/`0o`/`0b` integers.
///
/// ## Returns
/// - `Some(f64)`: the converted value.
/// - `None`: when JavaScript would produce `NaN`.
///
/// ## Example
/// ```
/// use kaka::util::num::parse_js_number;
///
/// assert_eq!(parse_js_number(" 42 "), Some(42.0));
/// assert_eq!(parse_js_number("0x10"), Some(16.0));
/// assert_eq!(parse_js_number(""), Some(0.0));
/// assert_eq!(parse_js_number("12abc"), None);
/// assert_eq!(parse_js_number("inf"), None);
/// ```
#[must_use]
pub fn parse_js_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {},
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().ok()
    } else {
        None
    }
}

/// Folds the digits of an unsigned integer in the given radix into an `f64`.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, ch| {
                      ch.to_digit(radix)
                        .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
                  })
}

/// Checks the `StrDecimalLiteral` shape: `[+-] digits [. digits] [e [+-]
/// digits]`, where the integer or the fractional part may be empty but not
/// both.
fn is_decimal_literal(text: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(index) => (&body[..index], Some(&body[index + 1..])),
        None => (body, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integer.is_empty() && fraction.is_empty() {
        return false;
    }
    if !all_digits(integer) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        },
    }
}

/// Renders a number the way JavaScript's `String(number)` does.
///
/// Integral values print without a fractional part, non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`, and magnitudes outside `[1e-6, 1e21)`
/// use exponent notation with an explicit exponent sign.
///
/// ## Example
/// ```
/// use kaka::util::num::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}
