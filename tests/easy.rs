//! Basic assignment, printing, and evaluation behavior.

mod common;

use common::{output_of, run_program, var};
use sudosharp::Value;

#[test]
fn test_set_integer() {
    let interp = run_program("set x to 5");
    assert_eq!(var(&interp, "x"), Value::Int(5));
}

#[test]
fn test_set_float() {
    let interp = run_program("set x to 4.2");
    assert_eq!(var(&interp, "x"), Value::Float(4.2));
}

#[test]
fn test_set_quoted_string() {
    let interp = run_program(r#"set name to "Ada Lovelace""#);
    assert_eq!(var(&interp, "name"), Value::string("Ada Lovelace"));
}

#[test]
fn test_set_booleans() {
    let interp = run_program("set a to yes\nset b to no\nset c to TRUE\nset d to False");
    assert_eq!(var(&interp, "a"), Value::Bool(true));
    assert_eq!(var(&interp, "b"), Value::Bool(false));
    assert_eq!(var(&interp, "c"), Value::Bool(true));
    assert_eq!(var(&interp, "d"), Value::Bool(false));
}

#[test]
fn test_set_bare_word_falls_back_to_string() {
    let interp = run_program("set x to banana");
    assert_eq!(var(&interp, "x"), Value::string("banana"));
}

#[test]
fn test_set_copies_variable() {
    let interp = run_program("set x to 5\nset y to x");
    assert_eq!(var(&interp, "y"), Value::Int(5));
}

#[test]
fn test_set_keyword_is_case_insensitive() {
    let interp = run_program("SET x TO 5");
    assert_eq!(var(&interp, "x"), Value::Int(5));
}

#[test]
fn test_arithmetic_plus_minus_times() {
    let interp = run_program("set a to 2 plus 3\nset b to 10 minus 4\nset c to 6 times 7");
    assert_eq!(var(&interp, "a"), Value::Int(5));
    assert_eq!(var(&interp, "b"), Value::Int(6));
    assert_eq!(var(&interp, "c"), Value::Int(42));
}

#[test]
fn test_arithmetic_float_promotion() {
    let interp = run_program("set a to 2 plus 0.5\nset b to 1.5 times 2");
    assert_eq!(var(&interp, "a"), Value::Float(2.5));
    assert_eq!(var(&interp, "b"), Value::Float(3.0));
}

#[test]
fn test_division_always_yields_float() {
    let interp = run_program("set q to 6 divided by 3");
    assert_eq!(var(&interp, "q"), Value::Float(2.0));
}

#[test]
fn test_arithmetic_with_variables() {
    let interp = run_program("set x to 10\nset y to 3\nset z to x minus y");
    assert_eq!(var(&interp, "z"), Value::Int(7));
}

#[test]
fn test_print_blank_line() {
    assert_eq!(output_of("print"), "\n");
}

#[test]
fn test_print_quoted_string_verbatim() {
    assert_eq!(output_of(r#"print "hello world""#), "hello world\n");
}

#[test]
fn test_print_quoted_string_suppresses_interpolation() {
    let source = "set name to \"Ada\"\nprint \"$name$\"";
    assert_eq!(output_of(source), "$name$\n");
}

#[test]
fn test_print_interpolates_bound_variable() {
    let source = "set name to \"Ada\"\nprint $name$";
    assert_eq!(output_of(source), "Ada\n");
}

#[test]
fn test_print_unbound_marker_stays_verbatim() {
    assert_eq!(output_of("print $name$"), "$name$\n");
}

#[test]
fn test_print_multiple_markers_in_one_line() {
    let source = "set a to 1\nset b to 2\nprint $a$ and $b$";
    assert_eq!(output_of(source), "1 and 2\n");
}

#[test]
fn test_print_variable_value() {
    assert_eq!(output_of("set x to 5\nprint x"), "5\n");
}

#[test]
fn test_print_float_display() {
    assert_eq!(output_of("set q to 6 divided by 3\nprint $q$"), "2.0\n");
}

#[test]
fn test_print_plain_text() {
    assert_eq!(output_of("print hello there"), "hello there\n");
}

#[test]
fn test_comment_lines_are_no_ops() {
    let source = "$ this is a comment\nset x to 1\n$set x to 99";
    let interp = run_program(source);
    assert_eq!(var(&interp, "x"), Value::Int(1));
}

#[test]
fn test_blank_lines_are_no_ops() {
    let interp = run_program("\n\nset x to 1\n   \n");
    assert_eq!(var(&interp, "x"), Value::Int(1));
}

#[test]
fn test_seeded_constant_pi() {
    let interp = run_program("set tau to pi times 2");
    assert_eq!(var(&interp, "tau"), Value::Float(std::f64::consts::PI * 2.0));
}

#[test]
fn test_builtin_constant_can_be_overwritten() {
    let interp = run_program("set pi to 3");
    assert_eq!(var(&interp, "pi"), Value::Int(3));
}

#[test]
fn test_import_math_binds_functions() {
    let interp = run_program("import math");
    for name in ["sin", "cos", "tan", "sqrt", "log", "floor", "ceil"] {
        assert!(
            matches!(var(&interp, name), Value::Builtin(_)),
            "'{}' should be a built-in after import math",
            name
        );
    }
    assert!(common::output_text(&interp).contains("imported module 'math'"));
}

#[test]
fn test_imported_builtin_can_be_shadowed() {
    let interp = run_program("import math\nset sin to 5");
    assert_eq!(var(&interp, "sin"), Value::Int(5));
}

#[test]
fn test_help_prints_usage() {
    let output = output_of("help");
    assert!(output.contains("SudoSharp commands"));
    assert!(output.contains("set NAME to VALUE"));
    assert!(output.contains("loop through START and END"));
}

#[test]
fn test_if_is_a_documented_no_op() {
    let interp = run_program("set x to 1\nif x\nset y to 2");
    assert_eq!(var(&interp, "x"), Value::Int(1));
    assert_eq!(var(&interp, "y"), Value::Int(2));
    assert!(common::output_text(&interp).contains("'if' is not yet implemented"));
}

#[test]
fn test_exit_stops_execution() {
    let interp = run_program("set x to 1\nexit\nset y to 2");
    assert_eq!(var(&interp, "x"), Value::Int(1));
    assert!(interp.env().get("y").is_none());
}

#[test]
fn test_quit_stops_execution() {
    let interp = run_program("quit\nset x to 1");
    assert!(interp.env().get("x").is_none());
    assert!(!interp.is_running());
}
