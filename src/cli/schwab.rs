//! `schwab-enhanced` action: portfolio analysis with live Schwab data.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce(
        "SCHWAB-ENHANCED ANALYSIS",
        "Running portfolio analysis with live Schwab account data...",
    );
    exec::delegate(launcher, Program::SchwabEnhanced)
}
