use std::io::Cursor;
use sudosharp::{Interpreter, Value};

pub type TestInterpreter = Interpreter<Cursor<Vec<u8>>, Vec<u8>>;

pub fn interpreter_with_input(input: &str) -> TestInterpreter {
    Interpreter::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn run_program(source: &str) -> TestInterpreter {
    run_program_with_input(source, "")
}

pub fn run_program_with_input(source: &str, input: &str) -> TestInterpreter {
    let mut interpreter = interpreter_with_input(input);
    interpreter
        .run_program(source)
        .expect("program I/O should not fail");
    interpreter
}

pub fn output_text(interpreter: &TestInterpreter) -> String {
    String::from_utf8(interpreter.output().clone()).expect("output should be valid UTF-8")
}

pub fn output_of(source: &str) -> String {
    output_text(&run_program(source))
}

pub fn var(interpreter: &TestInterpreter, name: &str) -> Value {
    interpreter
        .env()
        .get(name)
        .unwrap_or_else(|| panic!("variable '{}' should be bound", name))
}
