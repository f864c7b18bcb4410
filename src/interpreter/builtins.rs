//! Built-in constants and the `math` module function table.
//!
//! SudoSharp has no call syntax, so built-in functions are plain named
//! records stored in the environment; `import math` copies the table in and
//! a later assignment may shadow any entry.

use crate::value::{Builtin, Value};
use std::f64::consts;

/// Constants seeded into every fresh environment.
pub fn constants() -> [(&'static str, Value); 2] {
    [
        ("pi", Value::Float(consts::PI)),
        ("e", Value::Float(consts::E)),
    ]
}

/// The functions bound by `import math`. `log` is the natural logarithm.
pub const MATH_FUNCTIONS: &[Builtin] = &[
    Builtin { name: "sin", func: f64::sin },
    Builtin { name: "cos", func: f64::cos },
    Builtin { name: "tan", func: f64::tan },
    Builtin { name: "sqrt", func: f64::sqrt },
    Builtin { name: "log", func: f64::ln },
    Builtin { name: "floor", func: f64::floor },
    Builtin { name: "ceil", func: f64::ceil },
];
