use std::process::{Command, Output};

use taglog::FATAL_EXIT_CODE;

fn taglog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taglog"))
        .args(args)
        .env_remove("TAGLOG_LEVEL")
        .output()
        .expect("failed to spawn taglog")
}

fn taglog_with_level_env(level: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taglog"))
        .args(args)
        .env("TAGLOG_LEVEL", level)
        .output()
        .expect("failed to spawn taglog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn info_line_does_not_terminate() {
    let output = taglog(&["log", "info", "hello"]);
    assert_eq!(stdout(&output), "[INFO]hello\n");
    assert!(output.status.success());
}

#[test]
fn warning_line_does_not_terminate() {
    let output = taglog(&["log", "WARNING", "disk ", "low"]);
    assert_eq!(stdout(&output), "[WARNING]disk low\n");
    assert!(output.status.success());
}

#[test]
fn fragments_concatenate_without_separators() {
    let output = taglog(&["log", "info", "a", "b", "c"]);
    assert_eq!(stdout(&output), "[INFO]abc\n");
}

#[test]
fn fatal_line_exits_with_failure() {
    let output = taglog(&["log", "fatal", "out of ", "memory"]);
    assert_eq!(stdout(&output), "[FATAL]out of memory\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn unknown_level_is_fatal() {
    let output = taglog(&["log", "debug", "x"]);
    assert_eq!(stdout(&output), "[FATAL]Invalid level passed: debug\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn true_check_is_silent() {
    let output = taglog(&["check", "true"]);
    assert_eq!(stdout(&output), "");
    assert!(output.status.success());
}

#[test]
fn false_check_names_condition_and_stops() {
    let output = taglog(&["check", "false", "--after", "still running"]);
    assert_eq!(stdout(&output), "[FATAL]Check Failed: condition\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn code_after_passing_check_runs() {
    let output = taglog(&["check", "1", "--after", "still running"]);
    assert_eq!(stdout(&output), "[INFO]still running\n");
    assert!(output.status.success());
}

#[test]
fn equal_values_pass() {
    let output = taglog(&["check-eq", "5", "5"]);
    assert_eq!(stdout(&output), "");
    assert!(output.status.success());
}

#[test]
fn unequal_values_name_both_operands() {
    let output = taglog(&["check-eq", "5", "6", "--after", "unreached"]);
    let text = stdout(&output);
    assert_eq!(text, "[FATAL]Check Failed: lhs == rhs (\"5\" vs \"6\")\n");
    assert!(text.starts_with("[FATAL]Check Failed: "));
    assert!(text.contains("lhs") && text.contains("rhs") && text.contains("=="));
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn facade_uses_same_format() {
    let output = taglog(&["log", "warning", "--facade", "via ", "log"]);
    assert_eq!(stdout(&output), "[WARNING]via log\n");
    assert!(output.status.success());
}

#[test]
fn facade_respects_level_filter() {
    let output = taglog(&["--level-filter", "warn", "log", "info", "--facade", "quiet"]);
    assert_eq!(stdout(&output), "");
    assert!(output.status.success());
}

#[test]
fn facade_refuses_fatal() {
    let output = taglog(&["log", "fatal", "--facade", "x"]);
    assert_eq!(stdout(&output), "[FATAL]the log facade has no fatal level\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn level_env_filters_facade() {
    let output = taglog_with_level_env("warn", &["log", "info", "--facade", "quiet"]);
    assert_eq!(stdout(&output), "");
    assert!(output.status.success());
}

#[test]
fn level_env_lets_warnings_through() {
    let output = taglog_with_level_env("warn", &["log", "warning", "--facade", "loud"]);
    assert_eq!(stdout(&output), "[WARNING]loud\n");
}

#[test]
fn level_filter_overrides_env() {
    let output = taglog_with_level_env(
        "warn",
        &["--level-filter", "info", "log", "info", "--facade", "loud"],
    );
    assert_eq!(stdout(&output), "[INFO]loud\n");
    assert!(output.status.success());
}

#[test]
fn bad_level_env_falls_back_to_info() {
    let output = taglog_with_level_env("loud", &["log", "info", "--facade", "shown"]);
    assert_eq!(stdout(&output), "[INFO]shown\n");
}

#[test]
fn false_check_appends_detail_after_space() {
    let output = taglog(&["check", "false", "--detail", "x was 5", "--after", "unreached"]);
    assert_eq!(stdout(&output), "[FATAL]Check Failed: condition x was 5\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn true_check_ignores_detail() {
    let output = taglog(&["check", "true", "--detail", "x was 5"]);
    assert_eq!(stdout(&output), "");
    assert!(output.status.success());
}

#[test]
fn passing_comparisons_are_silent() {
    for (x, op, y) in [
        ("5", "==", "5"),
        ("5", "!=", "6"),
        ("2", "<", "3"),
        ("3", "<=", "3"),
        ("-1", ">", "-2"),
        ("4", ">=", "4"),
    ] {
        let output = taglog(&["compare", x, op, y]);
        assert_eq!(stdout(&output), "", "{x} {op} {y}");
        assert!(output.status.success(), "{x} {op} {y}");
    }
}

#[test]
fn failing_comparisons_keep_trailing_space() {
    for (x, op, y) in [
        ("5", "==", "6"),
        ("5", "!=", "5"),
        ("5", "<", "3"),
        ("5", "<=", "3"),
        ("5", ">", "7"),
        ("5", ">=", "7"),
    ] {
        let output = taglog(&["compare", x, op, y, "--after", "unreached"]);
        assert_eq!(
            stdout(&output),
            format!("[FATAL]Check Failed: x {op} y \n"),
            "{x} {op} {y}"
        );
        assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE), "{x} {op} {y}");
    }
}

#[test]
fn unknown_operator_is_fatal() {
    let output = taglog(&["compare", "1", "~", "2"]);
    assert_eq!(stdout(&output), "[FATAL]Invalid operator passed: ~\n");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}
