use crate::diagnostic::Diagnostic;
use std::io;

/// Everything a command handler can report. Script errors are rendered and
/// swallowed at the line-execution boundary; only `Io` propagates outward.
#[derive(Debug)]
pub enum ScriptError {
    Format { command: &'static str, usage: &'static str },
    Type { left: String, right: String },
    DivisionByZero,
    UnknownOperation { op: String },
    UnknownCommand { name: String },
    ModuleNotFound { name: String },
    UnmatchedEndLoop,
    NonIntegerLoopBound { start: String, end: String },
    Io(io::Error),
}

impl ScriptError {
    pub fn format(command: &'static str, usage: &'static str) -> Self {
        Self::Format { command, usage }
    }

    pub fn type_error(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Type { left: left.into(), right: right.into() }
    }

    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::UnknownOperation { op: op.into() }
    }

    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    pub fn module_not_found(name: impl Into<String>) -> Self {
        Self::ModuleNotFound { name: name.into() }
    }

    pub fn non_integer_loop_bound(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::NonIntegerLoopBound { start: start.into(), end: end.into() }
    }

    /// Convert to a diagnostic for pretty printing
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Format { command, usage } => {
                Diagnostic::error(format!("invalid '{}' command", command))
                    .with_code("E0201")
                    .with_help(format!("use '{}'", usage))
            }
            Self::Type { left, right } => Diagnostic::error(format!(
                "cannot do arithmetic on non-numeric values: {} and {}",
                left, right
            ))
            .with_code("E0202"),
            Self::DivisionByZero => {
                Diagnostic::error("division by zero").with_code("E0203")
            }
            Self::UnknownOperation { op } => {
                Diagnostic::error(format!("unknown operation '{}'", op))
                    .with_code("E0204")
                    .with_help("supported operations are plus, minus, times, divided by")
            }
            Self::UnknownCommand { name } => {
                Diagnostic::error(format!("unknown command '{}'", name))
                    .with_code("E0205")
                    .with_help("type 'help' for the command list")
            }
            Self::ModuleNotFound { name } => {
                Diagnostic::error(format!("module '{}' not found", name)).with_code("E0206")
            }
            Self::UnmatchedEndLoop => {
                Diagnostic::error("'end loop' without a matching 'loop'").with_code("E0207")
            }
            Self::NonIntegerLoopBound { start, end } => Diagnostic::error(format!(
                "loop bounds must be integers, got {} and {}",
                start, end
            ))
            .with_code("E0208"),
            Self::Io(inner) => Diagnostic::error(format!("I/O error: {}", inner)),
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_diagnostic().message)
    }
}

impl std::error::Error for ScriptError {}

impl From<io::Error> for ScriptError {
    fn from(inner: io::Error) -> Self {
        Self::Io(inner)
    }
}
