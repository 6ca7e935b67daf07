//! 退出码契约测试：High 检出 → 1，仅 Medium / 无检出 → 0，参数错误 → 2
use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn scan_dir(dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seclint"))
        .arg("--path")
        .arg(dir.path())
        .output()
        .expect("run seclint")
}

#[test]
fn high_finding_exits_with_code_1() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("db.ts"),
        "const q = `SELECT * FROM users WHERE id=${id}`;\n",
    )
    .unwrap();

    let out = scan_dir(&dir);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("SQL injection"));
}

#[test]
fn medium_only_findings_exit_with_code_0() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("log.js"),
        "console.log('resetting password');\n",
    )
    .unwrap();

    let out = scan_dir(&dir);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("secret in logs"));
}

#[test]
fn clean_tree_exits_with_code_0() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("clean.ts"), "export const add = (a,b) => a+b;\n").unwrap();

    let out = scan_dir(&dir);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("no security issues detected"));
}

#[test]
fn missing_path_flag_is_a_usage_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_seclint"))
        .output()
        .expect("run seclint");
    assert_eq!(out.status.code(), Some(2));
}
