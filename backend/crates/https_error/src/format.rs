//! Placeholder Formatter - printf-style message formatting
//!
//! Used by [`crate::factory::Factory::format`] to build messages from a
//! template and trailing arguments.
//!
//! ## Placeholders
//! * `%s` - strings verbatim, other values as JSON
//! * `%d` - number (`NaN` when the argument is not numeric)
//! * `%i` - integer part of a number
//! * `%f` - floating point number
//! * `%j`, `%o`, `%O` - JSON
//! * `%c` - consumes an argument, renders nothing
//! * `%%` - literal `%`
//!
//! A placeholder without a matching argument is copied literally. Surplus
//! arguments are appended, separated by single spaces.

use serde_json::Value;

/// Format `template` against `args`, consuming arguments left to right.
///
/// ## Examples
/// ```rust
/// use https_error::format::format;
/// use serde_json::json;
///
/// assert_eq!(format("x=%d", &[json!(5)]), "x=5");
/// assert_eq!(format("%s has %d items", &[json!("cart"), json!(3)]), "cart has 3 items");
/// assert_eq!(format("done", &[json!("extra"), json!(1)]), "done extra 1");
/// ```
pub fn format(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&conv) = chars.peek() else {
            out.push('%');
            break;
        };
        match conv {
            '%' => {
                chars.next();
                out.push('%');
            }
            's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c' => {
                chars.next();
                match remaining.next() {
                    Some(arg) => render_placeholder(&mut out, conv, arg),
                    None => {
                        out.push('%');
                        out.push(conv);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&as_string(arg));
    }
    out
}

fn render_placeholder(out: &mut String, conv: char, arg: &Value) {
    match conv {
        's' => out.push_str(&as_string(arg)),
        'd' => out.push_str(&as_number(arg)),
        'i' => out.push_str(&as_integer(arg)),
        'f' => out.push_str(&format_number(parse_float(arg))),
        'j' | 'o' | 'O' => out.push_str(&arg.to_string()),
        _ => {}
    }
}

fn as_string(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_number(arg: &Value) -> String {
    match arg {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        other => format_number(to_f64(other)),
    }
}

fn as_integer(arg: &Value) -> String {
    match arg {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::Number(n) => format_number(n.as_f64().map_or(f64::NAN, f64::trunc)),
        Value::String(s) => format_number(parse_int_prefix(s)),
        _ => "NaN".to_string(),
    }
}

/// Numeric value of `arg` with loose string coercion.
fn to_f64(arg: &Value) -> f64 {
    match arg {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else if is_decimal_literal(trimmed) {
                trimmed.parse().unwrap_or(f64::NAN)
            } else {
                f64::NAN
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_float(arg: &Value) -> f64 {
    match arg {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float_prefix(s),
        _ => f64::NAN,
    }
}

/// Longest leading integer of `s`, ignoring leading whitespace.
fn parse_int_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse::<i64>().map_or(f64::NAN, |v| v as f64)
}

/// Longest leading float of `s`, ignoring leading whitespace.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    (1..=s.len())
        .rev()
        .filter(|&end| s.is_char_boundary(end) && is_decimal_literal(&s[..end]))
        .find_map(|end| s[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Digits, sign, decimal point and exponent only; rejects `inf`/`NaN` spellings.
fn is_decimal_literal(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i128)
    } else {
        value.to_string()
    }
}
