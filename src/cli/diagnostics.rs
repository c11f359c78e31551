//! `test` action: system diagnostics.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce("SYSTEM DIAGNOSTICS", "Checking every subsystem...");
    exec::delegate(launcher, Program::Diagnostics)
}
