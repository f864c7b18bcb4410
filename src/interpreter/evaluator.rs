use crate::interpreter::environment::Environment;
use crate::value::Value;
use std::borrow::Cow;

fn is_marker_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Replace every `$identifier$` marker with the display form of the bound
/// variable. Unbound markers stay verbatim; a stray `$` is left untouched.
/// Adjacent markers are supported and interpolation never fails.
pub fn interpolate(text: &str, env: &Environment) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' {
            let mut j = i + 1;
            while j < bytes.len() && is_marker_char(bytes[j]) {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b'$' {
                let name = &text[i + 1..j];
                match env.get(name) {
                    Some(value) => output.push_str(&value.to_string()),
                    None => output.push_str(&text[i..=j]),
                }
                i = j + 1;
                continue;
            }
        }
        let ch = text[i..].chars().next().unwrap_or('\u{fffd}');
        output.push(ch);
        i += ch.len_utf8();
    }

    output
}

/// Resolve one token into a value. First match wins:
/// interpolation, variable lookup, quoted string, numeric literal,
/// yes/no/true/false, and finally the raw text as a string. Never errors.
pub fn evaluate(token: &str, env: &Environment) -> Value {
    let text: Cow<'_, str> = if token.contains('$') {
        Cow::Owned(interpolate(token, env))
    } else {
        Cow::Borrowed(token)
    };

    if let Some(value) = env.get(&text) {
        return value;
    }

    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Value::string(&text[1..text.len() - 1]);
    }

    if text.contains('.') {
        if let Ok(float_value) = text.parse::<f64>() {
            return Value::Float(float_value);
        }
    } else if let Ok(int_value) = text.parse::<i64>() {
        return Value::Int(int_value);
    }

    if text.eq_ignore_ascii_case("yes") || text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::string(&text)
}

/// Coerce one line of `ask` input: integer first, then float (only for text
/// containing a `.`), otherwise the raw text.
pub fn coerce_input(text: &str) -> Value {
    if let Ok(int_value) = text.parse::<i64>() {
        return Value::Int(int_value);
    }
    if text.contains('.') {
        if let Ok(float_value) = text.parse::<f64>() {
            return Value::Float(float_value);
        }
    }
    Value::string(text)
}
