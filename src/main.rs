use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use sudosharp::cli::{generate_completions, AppConfig, Args, Commands};
use sudosharp::Interpreter;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = &args.command {
        generate_completions(*shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "Starting sudosharp");

    let mut interpreter = Interpreter::new();
    interpreter.set_color(config.color_enabled);

    if let Some(source) = &args.eval {
        verbose_log(&config, "Running program from --eval");
        run_source(&mut interpreter, source, &config);
    } else if let Some(path) = &args.script {
        verbose_log(&config, &format!("Reading script from {}", path.display()));
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                error_message(&config, &format!("Failed to read {}: {}", path.display(), e));
                std::process::exit(1);
            }
        };
        run_source(&mut interpreter, &source, &config);
    } else {
        run_interactive(&mut interpreter, &config);
    }
}

fn run_source<R: BufRead, W: Write>(
    interpreter: &mut Interpreter<R, W>,
    source: &str,
    config: &AppConfig,
) {
    if let Err(e) = interpreter.run_program(source) {
        error_message(config, &format!("I/O error: {}", e));
        std::process::exit(1);
    }
    verbose_log(config, "Program finished");
}

fn run_interactive<R: BufRead, W: Write>(interpreter: &mut Interpreter<R, W>, config: &AppConfig) {
    println!("sudosharp {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or 'quit' to leave, 'help' for the command list.");
    println!();

    while interpreter.is_running() {
        print!("sudosharp> ");
        let _ = io::stdout().flush();

        let line = match interpreter.read_input_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!();
                break;
            }
            Err(e) => {
                error_message(config, &format!("Error reading input: {}", e));
                break;
            }
        };

        let result = match line.trim().strip_suffix(':') {
            Some(head) => {
                let block = match collect_block(interpreter, head, config) {
                    Some(block) => block,
                    None => break,
                };
                interpreter.run_program(&block)
            }
            None => interpreter.execute_line(&line),
        };

        if let Err(e) = result {
            error_message(config, &format!("I/O error: {}", e));
            break;
        }
    }

    verbose_log(config, "Leaving interactive mode");
}

/// Collect a multi-line block started by a `:`-terminated line. A lone `end`
/// line finishes the block. Returns `None` when input runs out entirely.
fn collect_block<R: BufRead, W: Write>(
    interpreter: &mut Interpreter<R, W>,
    head: &str,
    config: &AppConfig,
) -> Option<String> {
    println!("Enter the block line by line. Finish with 'end' on its own line.");
    let mut lines = vec![head.to_string()];

    loop {
        print!("... ");
        let _ = io::stdout().flush();
        match interpreter.read_input_line() {
            Ok(Some(next)) => {
                if next.trim() == "end" {
                    break;
                }
                lines.push(next);
            }
            Ok(None) => break,
            Err(e) => {
                error_message(config, &format!("Error reading input: {}", e));
                return None;
            }
        }
    }

    Some(lines.join("\n"))
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[sudosharp:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
