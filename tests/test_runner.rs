use std::{path::Path, process::Output};

use assert_cmd::Command;
use walkdir::WalkDir;

#[test]
fn run_all_files() {
    let dir = "./tests/data/";

    let entries = WalkDir::new(dir)
        .into_iter()
        .filter_map(|o| o.ok())
        .filter(|e| e.file_type().is_file());

    for entry in entries {
        let filename = entry.path();

        print!("{} ... ", filename.display());

        let expect = find_expects(filename);
        let expected = expect.join("\n");

        let output = run_file(filename);

        let stdout = String::from_utf8(output.stdout).unwrap();
        let stdout = stdout.trim_end();

        let stderr = String::from_utf8(output.stderr).unwrap();
        let stderr = stderr.trim_end();

        assert_eq!(expected, stdout, "stdout={}, stderr={}", stdout, stderr);

        println!("OK");
    }
}

#[test]
fn usage_error_exits_64() {
    let mut cmd = Command::cargo_bin("loxide").unwrap();
    cmd.arg("one.lox").arg("two.lox");
    cmd.assert().code(64).stdout("Usage: loxide [script]\n");
}

#[test]
fn syntax_error_exits_65_and_reports_each_problem() {
    let output = run_source("var = 1;\n@\nprint 1;");
    assert_eq!(output.status.code(), Some(65));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[line 2] Error: Unexpected character."));
    assert!(stderr.contains("[line 1] Error at '=': Expect variable name."));

    // Nothing was executed
    assert!(output.stdout.is_empty());
}

#[test]
fn runtime_error_exits_70_with_message_then_line() {
    let output = run_source("print \"before\";\nprint 1 + nil;\nprint \"after\";");
    assert_eq!(output.status.code(), Some(70));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "before\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr,
        "Operands must be two numbers or two strings.\n[line 2]\n"
    );
}

#[test]
fn clean_run_exits_0() {
    let output = run_source("print 1 + 2;");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3\n");
}

fn run_file(filename: &Path) -> Output {
    let mut cmd = Command::cargo_bin("loxide").unwrap();
    cmd.arg(filename).output().unwrap()
}

fn run_source(source: &str) -> Output {
    // Tests run in parallel; make each scratch file unique
    static COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

    let dir = std::env::temp_dir();
    let path = dir.join(format!("loxide-test-{}-{}.lox", std::process::id(), n));
    std::fs::write(&path, source).unwrap();

    let output = run_file(&path);
    let _ = std::fs::remove_file(&path);
    output
}

fn find_expects(filename: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(filename)
        .unwrap_or_else(|_| panic!("failed to read {}", filename.display()));

    let expect_str = "// expect: ";
    let mut result = vec![];
    for line in content.lines() {
        let mut indices: Vec<_> = line.match_indices(expect_str).collect();
        if indices.is_empty() {
            continue;
        }

        let (idx, _) = indices.pop().unwrap();
        let target = &line[idx + expect_str.len()..];
        result.push(target.into());
    }

    result
}
