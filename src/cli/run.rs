//! `run` action: full factor analysis.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce(
        "FACTOR ANALYSIS",
        "Running the full factor analysis pipeline...",
    );
    exec::delegate(launcher, Program::Analysis)
}
