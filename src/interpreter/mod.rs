pub mod builtins;
pub mod engine;
pub mod environment;
pub mod error;
pub mod evaluator;

pub use engine::{Interpreter, LOOP_VAR};
pub use environment::Environment;
pub use error::ScriptError;
pub use evaluator::{coerce_input, evaluate, interpolate};
