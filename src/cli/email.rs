//! `email` action: email configuration test.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce("EMAIL TEST", "Sending a test report to the configured recipients...");
    exec::delegate(launcher, Program::EmailTest)
}
