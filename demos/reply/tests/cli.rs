//! End-to-end tests for the `reply-demo` binary.
//!
//! Uses `assert_cmd` to check that lookup failures fall back to the
//! library's default report-and-exit behaviour.

use assert_cmd::Command;
use rstest::rstest;

struct Run {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn run(args: &[&str]) -> Run {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("reply-demo").expect("binary should exist");
    cmd.env("RUST_BACKTRACE", "0");
    cmd.args(args);

    #[expect(clippy::expect_used, reason = "test panics are acceptable")]
    let output = cmd.output().expect("command should execute");
    Run {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).replace("\r\n", "\n"),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[test]
fn prints_plan_for_scoped_reply() {
    let out = run(&["-f", "reply", "-n", "12", "example.txt"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "replying 12x to example.txt (forced)\n");
}

#[test]
fn subject_is_included() {
    let out = run(&["reply", "--subject", "thanks", "notes.txt"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "replying 1x to notes.txt subject=\"thanks\"\n");
}

#[rstest]
#[case(&["reply", "-n"], "no value provided for --number\n")]
#[case(&["reply", "-n", "1a", "a.txt"], "--number expects a number, got '1a'\n")]
#[case(&["reply", "-n", "1", "--number", "2", "a.txt"], "--number was provided more than once\n")]
fn lookup_errors_exit_with_single_line(#[case] args: &[&str], #[case] expected: &str) {
    let out = run(args);
    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, expected);
}

#[rstest]
#[case("--help")]
#[case("-h")]
fn help_prints_usage(#[case] flag: &str) {
    let out = run(&[flag, "reply", "-n"]);
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.starts_with("usage: reply-demo"), "{}", out.stdout);
}

#[rstest]
#[case("--version")]
#[case("-v")]
fn version_prints_name_and_version(#[case] flag: &str) {
    let out = run(&[flag]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, format!("reply-demo {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_reported() {
    let out = run(&["-f", "a.txt"]);
    assert_ne!(out.code, Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("reply"), "{}", out.stderr);
}
