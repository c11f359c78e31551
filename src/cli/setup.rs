//! `setup` action: first-run bootstrap.
//!
//! Three independent steps: offer to create a default `.env` (never
//! overwriting an existing one), run the database setup script
//! best-effort, then run diagnostics. The handler's exit code is the
//! diagnostics code; a database-setup failure is reported but does not
//! gate the diagnostics step.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::{instrument, warn};

use crate::config::Settings;
use crate::exec::{self, Launcher, Program};
use crate::ui;

/// Default configuration written verbatim on first-run bootstrap.
pub const ENV_TEMPLATE: &str = "\
# Factor monitoring system configuration
FACTOR_EMAIL=your_email@gmail.com
FACTOR_EMAIL_PASSWORD=your_app_password
FACTOR_RECIPIENTS=recipient@example.com

# Optional Schwab API credentials
SCHWAB_CLIENT_ID=
SCHWAB_CLIENT_SECRET=
SCHWAB_REFRESH_TOKEN=

PORTFOLIO_VALUE=100000
";

#[instrument(skip_all)]
pub fn run(settings: &Settings, launcher: &dyn Launcher, input: &mut dyn BufRead) -> i32 {
    ui::announce("SYSTEM SETUP", "Preparing the factor monitoring environment...");

    match bootstrap_env(&settings.env_file, input) {
        Ok(Bootstrap::Created) => {
            println!("{}Created {}{}", ui::GREEN, settings.env_file.display(), ui::RESET);
            println!("Edit it to fill in your email and API credentials.");
        }
        Ok(Bootstrap::AlreadyPresent) => {
            println!("Configuration file already exists, leaving it untouched.");
        }
        Ok(Bootstrap::Declined) => {
            println!("Skipped configuration file creation.");
        }
        Err(err) => {
            warn!(%err, "env bootstrap failed");
            eprintln!("{}Could not create configuration file: {err:#}{}", ui::RED, ui::RESET);
        }
    }

    println!("\n{}", ui::thin_rule());
    println!("Setting up the database...");
    let db_code = exec::delegate(launcher, Program::DatabaseSetup);
    if db_code != 0 {
        // Best effort: diagnostics below will show what is wrong.
        eprintln!("{}Database setup exited with code {db_code}{}", ui::YELLOW, ui::RESET);
    }

    println!("\n{}", ui::thin_rule());
    println!("Running diagnostics...");
    exec::delegate(launcher, Program::Diagnostics)
}

enum Bootstrap {
    Created,
    AlreadyPresent,
    Declined,
}

/// Offer to write the default template at `path`. An existing file is
/// never touched and never prompts.
fn bootstrap_env(path: &Path, input: &mut dyn BufRead) -> Result<Bootstrap> {
    if path.exists() {
        return Ok(Bootstrap::AlreadyPresent);
    }

    print!("No configuration file found. Create a default {}? [y/N] ", path.display());
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer).context("reading confirmation")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(Bootstrap::Declined);
    }

    write_atomic(path, ENV_TEMPLATE)?;
    Ok(Bootstrap::Created)
}

/// Write via a sibling temp file and rename, so concurrent readers never
/// see a partially written file.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("renaming into {}", path.display()))?;
    Ok(())
}
