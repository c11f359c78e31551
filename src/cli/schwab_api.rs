//! `schwab` action: Schwab API connection test.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce("SCHWAB API TEST", "Verifying credentials and token refresh...");
    exec::delegate(launcher, Program::SchwabTest)
}
