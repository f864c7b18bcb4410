pub mod cli;
pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod value;

pub use interpreter::{Environment, Interpreter, ScriptError};
pub use value::{Builtin, Value};
