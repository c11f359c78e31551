//! `dashboard` action: monitoring dashboard server.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce(
        "MONITORING DASHBOARD",
        "Starting the dashboard on http://localhost:8050 (Ctrl+C stops it)...",
    );
    exec::delegate(launcher, Program::Dashboard)
}
