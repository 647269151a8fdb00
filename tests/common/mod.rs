#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coverfolio").unwrap();
    cmd.env_remove("COVERFOLIO_ROOT");
    cmd.env_remove("COVERFOLIO_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a workspace in `dir`
pub fn init_workspace(dir: &Path) {
    folio_cmd().arg("init").arg(dir).assert().success();
}

/// Create a draft in the workspace at `dir` and return its id
pub fn new_draft(dir: &Path, args: &[&str]) -> String {
    let output = folio_cmd()
        .current_dir(dir)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// Stdout of a successful command run in `dir`
pub fn stdout_of(dir: &Path, args: &[&str]) -> String {
    let output = folio_cmd().current_dir(dir).args(args).output().unwrap();
    assert!(output.status.success(), "{:?} failed: {:?}", args, output);
    String::from_utf8(output.stdout).unwrap()
}
