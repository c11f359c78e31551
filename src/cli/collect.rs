//! `data` action: factor data collection.

use tracing::instrument;

use crate::exec::{self, Launcher, Program};
use crate::ui;

#[instrument(skip(launcher))]
pub fn run(launcher: &dyn Launcher) -> i32 {
    ui::announce("DATA COLLECTION", "Collecting factor data into the database...");
    exec::delegate(launcher, Program::DataCollection)
}
