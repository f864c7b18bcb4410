use crate::diagnostic::{DiagnosticRenderer, LineContext};
use crate::interpreter::builtins;
use crate::interpreter::environment::Environment;
use crate::interpreter::error::ScriptError;
use crate::interpreter::evaluator::{coerce_input, evaluate, interpolate};
use crate::lexer::tokenize;
use crate::value::Value;
use std::io::{self, BufRead, Write};

/// Name of the implicit loop counter. Shared by every active loop; the
/// innermost one owns it at any moment.
pub const LOOP_VAR: &str = "i";

const HELP_TEXT: &str = "\
SudoSharp commands:
  print [text]                  print text, with $name$ interpolation
  set NAME to VALUE             assign a value
  set NAME to A plus B          arithmetic: plus, minus, times, divided by
  ask for NAME                  read one line of input into NAME
  loop through START and END    counting loop; the counter is 'i'
  end loop                      close the innermost loop
  import math                   bind the math built-in functions
  if                            not yet implemented
  help                          show this text
  exit / quit                   stop execution
Lines starting with $ are comments.";

/// One active loop. `return_index` is the index of the `loop` line itself;
/// a taken `end loop` resumes at the line right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoopFrame {
    return_index: usize,
    iterator: i64,
    end: i64,
}

/// The interpreter engine: environment, loop stack, and the program cursor.
///
/// Generic over its line input and text output so the interactive shell can
/// hand it stdin/stdout while tests inject in-memory buffers. A single
/// instance owns all state; execution is strictly sequential.
pub struct Interpreter<R, W> {
    env: Environment,
    loop_stack: Vec<LoopFrame>,
    lines: Vec<String>,
    cursor: usize,
    running: bool,
    jumped: bool,
    color: bool,
    input: R,
    output: W,
}

impl Interpreter<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Interpreter<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            env: Environment::new(),
            loop_stack: Vec::new(),
            lines: Vec::new(),
            cursor: 0,
            running: true,
            jumped: false,
            color: false,
            input,
            output,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_color(&mut self, enabled: bool) {
        self.color = enabled;
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Read one line from the interactive source, without the trailing line
    /// break. `None` means end of input.
    pub fn read_input_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(Some(buffer))
    }

    /// Execute exactly one source line against the current state.
    ///
    /// Script errors are rendered to the output stream and swallowed so the
    /// caller can keep feeding lines; only stream failures escape.
    pub fn execute_line(&mut self, line: &str) -> io::Result<()> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(());
        }
        match self.dispatch(&tokens) {
            Ok(()) => Ok(()),
            Err(ScriptError::Io(inner)) => Err(inner),
            Err(error) => self.report(&error),
        }
    }

    /// Run a complete program text from the first line to completion or halt.
    pub fn run_program(&mut self, source: &str) -> io::Result<()> {
        self.lines = source.lines().map(str::to_string).collect();
        self.cursor = 0;
        self.jumped = false;
        while self.running && self.cursor < self.lines.len() {
            let line = self.lines[self.cursor].clone();
            self.execute_line(&line)?;
            if self.jumped {
                self.jumped = false;
            } else {
                self.cursor += 1;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        let command = tokens[0].to_ascii_lowercase();
        match command.as_str() {
            "print" => self.exec_print(tokens),
            "set" => self.exec_set(tokens),
            "ask" => self.exec_ask(tokens),
            "loop" => self.exec_loop(tokens),
            "end" if tokens.get(1).is_some_and(|t| t.eq_ignore_ascii_case("loop")) => {
                self.exec_end_loop()
            }
            "import" => self.exec_import(tokens),
            "if" => {
                // Deliberate placeholder; there are no conditional semantics.
                writeln!(self.output, "'if' is not yet implemented")?;
                Ok(())
            }
            "exit" | "quit" => {
                self.running = false;
                Ok(())
            }
            "help" => {
                writeln!(self.output, "{}", HELP_TEXT)?;
                Ok(())
            }
            _ => Err(ScriptError::unknown_command(command)),
        }
    }

    fn exec_print(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        let args = &tokens[1..];
        if args.is_empty() {
            writeln!(self.output)?;
            return Ok(());
        }
        if args.len() == 1 {
            let text = &args[0];
            if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
                writeln!(self.output, "{}", &text[1..text.len() - 1])?;
                return Ok(());
            }
            if text.contains('$') {
                let rendered = interpolate(text, &self.env);
                writeln!(self.output, "{}", rendered)?;
                return Ok(());
            }
        }
        let parts: Vec<String> = args
            .iter()
            .map(|token| evaluate(token, &self.env).to_string())
            .collect();
        writeln!(self.output, "{}", parts.join(" ").trim_end())?;
        Ok(())
    }

    fn exec_set(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        if tokens.len() < 4 || !tokens[2].eq_ignore_ascii_case("to") {
            return Err(ScriptError::format("set", "set variable to value"));
        }
        let name = tokens[1].clone();
        let value_tokens = &tokens[3..];

        let value = match value_tokens {
            [single] => evaluate(single, &self.env),
            [left, op, right] => {
                let left = evaluate(left, &self.env);
                let right = evaluate(right, &self.env);
                arithmetic(op, &left, &right)?
            }
            [left, divided, by, right]
                if divided.eq_ignore_ascii_case("divided") && by.eq_ignore_ascii_case("by") =>
            {
                let left = evaluate(left, &self.env);
                let right = evaluate(right, &self.env);
                divide(&left, &right)?
            }
            _ => {
                return Err(ScriptError::format(
                    "set",
                    "set variable to value, or set variable to left OP right",
                ))
            }
        };

        self.env.set(name, value);
        Ok(())
    }

    fn exec_ask(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        if tokens.len() < 3 || !tokens[1].eq_ignore_ascii_case("for") {
            return Err(ScriptError::format("ask", "ask for variable"));
        }
        let name = tokens[2].clone();
        write!(self.output, "> ")?;
        self.output.flush()?;
        let raw = self.read_input_line()?.unwrap_or_default();
        self.env.set(name, coerce_input(&raw));
        Ok(())
    }

    fn exec_loop(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        if tokens.len() < 5
            || !tokens[1].eq_ignore_ascii_case("through")
            || !tokens[3].eq_ignore_ascii_case("and")
        {
            return Err(ScriptError::format("loop", "loop through start and end"));
        }
        let start_value = evaluate(&tokens[2], &self.env);
        let end_value = evaluate(&tokens[4], &self.env);
        let (Some(start), Some(end)) = (loop_bound(&start_value), loop_bound(&end_value)) else {
            return Err(ScriptError::non_integer_loop_bound(&tokens[2], &tokens[4]));
        };

        self.loop_stack.push(LoopFrame { return_index: self.cursor, iterator: start, end });
        self.env.set(LOOP_VAR.to_string(), Value::Int(start));
        Ok(())
    }

    fn exec_end_loop(&mut self) -> Result<(), ScriptError> {
        let frame = self.loop_stack.last_mut().ok_or(ScriptError::UnmatchedEndLoop)?;
        frame.iterator += 1;
        let iterator = frame.iterator;
        let end = frame.end;
        let return_index = frame.return_index;
        self.env.set(LOOP_VAR.to_string(), Value::Int(iterator));

        if iterator <= end {
            // Re-enter the body at the line after the loop header; the runner
            // must not add its usual +1 on top of this.
            self.cursor = return_index + 1;
            self.jumped = true;
        } else {
            self.loop_stack.pop();
        }
        Ok(())
    }

    fn exec_import(&mut self, tokens: &[String]) -> Result<(), ScriptError> {
        if tokens.len() < 2 {
            return Err(ScriptError::format("import", "import module"));
        }
        if !tokens[1].eq_ignore_ascii_case("math") {
            return Err(ScriptError::module_not_found(&tokens[1]));
        }
        for builtin in builtins::MATH_FUNCTIONS {
            self.env.set(builtin.name.to_string(), Value::Builtin(*builtin));
        }
        writeln!(self.output, "imported module 'math'")?;
        Ok(())
    }

    fn report(&mut self, error: &ScriptError) -> io::Result<()> {
        let renderer = DiagnosticRenderer::new(self.color);
        let diagnostic = error.to_diagnostic();
        let rendered = match self.lines.get(self.cursor) {
            Some(text) => renderer
                .render(&diagnostic, Some(LineContext { number: self.cursor + 1, text })),
            None => renderer.render(&diagnostic, None),
        };
        write!(self.output, "{}", rendered)
    }
}

fn loop_bound(value: &Value) -> Option<i64> {
    match value {
        Value::Int(int_value) => Some(*int_value),
        Value::Float(float_value)
            if float_value.fract() == 0.0
                && *float_value >= i64::MIN as f64
                && *float_value <= i64::MAX as f64 =>
        {
            Some(*float_value as i64)
        }
        _ => None,
    }
}

/// `plus` / `minus` / `times`. Int stays Int unless an operand is Float or
/// the i64 result overflows.
fn arithmetic(op: &str, left: &Value, right: &Value) -> Result<Value, ScriptError> {
    let operation = op.to_ascii_lowercase();
    if !matches!(operation.as_str(), "plus" | "minus" | "times") {
        return Err(ScriptError::unknown_operation(op));
    }
    let (Some(left_num), Some(right_num)) = (left.as_f64(), right.as_f64()) else {
        return Err(ScriptError::type_error(left.to_string(), right.to_string()));
    };

    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        let exact = match operation.as_str() {
            "plus" => a.checked_add(*b),
            "minus" => a.checked_sub(*b),
            _ => a.checked_mul(*b),
        };
        if let Some(int_result) = exact {
            return Ok(Value::Int(int_result));
        }
    }

    let float_result = match operation.as_str() {
        "plus" => left_num + right_num,
        "minus" => left_num - right_num,
        _ => left_num * right_num,
    };
    Ok(Value::Float(float_result))
}

/// `divided by`. The quotient is always Float, even for exact Int division.
fn divide(left: &Value, right: &Value) -> Result<Value, ScriptError> {
    let (Some(left_num), Some(right_num)) = (left.as_f64(), right.as_f64()) else {
        return Err(ScriptError::type_error(left.to_string(), right.to_string()));
    };
    if right_num == 0.0 {
        return Err(ScriptError::DivisionByZero);
    }
    Ok(Value::Float(left_num / right_num))
}
