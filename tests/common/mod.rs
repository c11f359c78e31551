//! Shared helpers for console integration tests.
//!
//! Delegated scripts are faked with a recording shell stub installed as
//! the interpreter, so no real toolkit scripts are needed.

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Console command isolated to `home`: no inherited overrides, no `.env`
/// pickup from the repo, all paths under the given directory.
pub fn console(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("factor-console").expect("binary builds");
    cmd.current_dir(home)
        .env_remove("FACTOR_PYTHON")
        .env_remove("FACTOR_DB")
        .env_remove("VIRTUAL_ENV")
        .env_remove("RUST_LOG")
        .env("FACTOR_HOME", home);
    cmd
}

/// Interpreter stub that echoes which script it was asked to run and
/// exits with a fixed code.
pub fn fake_interpreter(dir: &Path, exit_code: i32) -> PathBuf {
    let path = dir.join("fake-python.sh");
    let script = format!(
        "#!/bin/sh\necho \"launched:$(basename -- \"$1\")\"\nexit {exit_code}\n"
    );
    fs::write(&path, script).expect("write interpreter stub");
    let mut perms = fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub");
    path
}
