use std::fmt;
use std::rc::Rc;

/// A built-in function binding. Stored in the environment by `import` but
/// never invocable from script syntax; the language has no call form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(f64) -> f64,
}

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Bool(bool),
    Builtin(Builtin),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(left_int), Value::Int(right_int)) => left_int == right_int,
            (Value::Float(left_float), Value::Float(right_float)) => left_float == right_float,
            (Value::Str(left_str), Value::Str(right_str)) => left_str == right_str,
            (Value::Bool(left_bool), Value::Bool(right_bool)) => left_bool == right_bool,
            (Value::Builtin(left_fn), Value::Builtin(right_fn)) => left_fn == right_fn,
            _ => false,
        }
    }
}

impl Value {
    pub fn string(text: &str) -> Self {
        Value::Str(Rc::from(text))
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(int_value) = self {
            Some(*int_value)
        } else {
            None
        }
    }

    /// Numeric view of the value, promoting Int to f64. None for
    /// non-numeric variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(int_value) => Some(*int_value as f64),
            Value::Float(float_value) => Some(*float_value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(string_ref) = self {
            Some(string_ref.as_ref())
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(bool_value) = self {
            Some(*bool_value)
        } else {
            None
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(int_value) => write!(f, "{}", int_value),
            Value::Float(float_value) => {
                let formatted = float_value.to_string();
                if formatted.contains('.')
                    || formatted.contains('e')
                    || formatted.contains('E')
                    || !float_value.is_finite()
                {
                    write!(f, "{}", formatted)
                } else {
                    write!(f, "{}.0", formatted)
                }
            }
            Value::Str(string_ref) => write!(f, "{}", string_ref),
            Value::Bool(bool_value) => write!(f, "{}", bool_value),
            Value::Builtin(builtin) => write!(f, "<built-in {}>", builtin.name),
        }
    }
}
