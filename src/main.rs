//! Entry point wiring argv to the command router.

use std::{env, process};

use anyhow::Result;
use factor_console::{cli, config::Settings, exec::ScriptLauncher, logging};
use tracing::debug;

fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load();
    let launcher = ScriptLauncher::new(&settings);

    let args: Vec<String> = env::args().skip(1).collect();
    debug!(?args, home = %settings.home.display(), "dispatching");

    process::exit(cli::dispatch(&args, &settings, &launcher))
}
