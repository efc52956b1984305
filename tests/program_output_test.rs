use std::process::Command;

fn run_program(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_halving-probe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run halving-probe")
}

#[test]
fn test_prints_true_and_exits_zero() {
    let output = run_program(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "true\n");
}

#[test]
fn test_arguments_are_ignored() {
    let output = run_program(&["--start", "99", "extra", "-x"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "true\n");
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run_program(&[]);
    let second = run_program(&[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_halving-probe"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to run halving-probe");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "true\n");
    assert!(!output.stderr.is_empty());
}
