//! Common test utilities for host tool tests.

use std::io::{Seek, SeekFrom, Write};
use std::process::{Command, Output, Stdio};

use minilang_runtime::config::MALFORMED_INPUT_ENV;
use tempfile::tempfile;

/// Run the `minilang-rt` binary with `stdin` as its entire input.
pub fn run_cli(args: &[&str], stdin: &str) -> Output {
    run_cli_with_env(args, stdin, &[])
}

/// Like [`run_cli`], with extra environment variables set for the child.
pub fn run_cli_with_env(args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> Output {
    let mut input = tempfile().expect("Failed to create temp file");
    input
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    input
        .seek(SeekFrom::Start(0))
        .expect("Failed to rewind stdin");

    Command::new(env!("CARGO_BIN_EXE_minilang-rt"))
        .args(args)
        .env_remove(MALFORMED_INPUT_ENV)
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::from(input))
        .output()
        .expect("Failed to execute minilang-rt")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
