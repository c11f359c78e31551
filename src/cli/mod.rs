//! Command routing for factor-console.
//!
//! One positional token selects an action through a static alias table;
//! everything after the first token is ignored. A missing token is
//! filled with the canonical `run` alias before lookup so the default
//! path and the explicit path are the same code path.

use std::collections::HashMap;
use std::io;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{config::Settings, exec::Launcher, ui};

pub mod collect;
pub mod dashboard;
pub mod diagnostics;
pub mod email;
pub mod run;
pub mod schwab;
pub mod schwab_api;
pub mod setup;
pub mod status;

/// Token assumed when the command line carries no token at all.
pub const DEFAULT_TOKEN: &str = "run";

/// The closed set of actions the console can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Run,
    SchwabEnhanced,
    Diagnostics,
    TestEmail,
    TestSchwab,
    CollectData,
    Dashboard,
    Setup,
    Status,
    Help,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Run,
        Action::SchwabEnhanced,
        Action::Diagnostics,
        Action::TestEmail,
        Action::TestSchwab,
        Action::CollectData,
        Action::Dashboard,
        Action::Setup,
        Action::Status,
        Action::Help,
    ];

    /// Accepted alias tokens, case-sensitive, exact match only.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Action::Run => &["run", "r"],
            Action::SchwabEnhanced => &["schwab-enhanced", "schwab-full", "portfolio"],
            Action::Diagnostics => &["test", "t", "diagnostic", "diagnostics"],
            Action::TestEmail => &["email", "e"],
            Action::TestSchwab => &["schwab", "s", "api"],
            Action::CollectData => &["data", "d", "collect"],
            Action::Dashboard => &["dashboard", "dash", "monitor", "m"],
            Action::Setup => &["setup", "install", "init"],
            Action::Status => &["status", "stat", "info"],
            Action::Help => &["help", "h", "-h", "--help"],
        }
    }

    /// One-line description shown in the help listing.
    pub fn summary(self) -> &'static str {
        match self {
            Action::Run => "Run the full factor analysis (default)",
            Action::SchwabEnhanced => "Run the Schwab-enhanced portfolio analysis",
            Action::Diagnostics => "Run system diagnostics",
            Action::TestEmail => "Test the email configuration",
            Action::TestSchwab => "Test the Schwab API connection",
            Action::CollectData => "Collect factor data into the database",
            Action::Dashboard => "Serve the monitoring dashboard (localhost:8050)",
            Action::Setup => "First-run setup: .env bootstrap, database, diagnostics",
            Action::Status => "Report system status",
            Action::Help => "Show this help",
        }
    }

    /// Resolve a token against the alias table.
    pub fn lookup(token: &str) -> Option<Action> {
        ALIASES.get(token).copied()
    }
}

/// Alias table, built once at startup and never mutated. Every alias
/// binds exactly one action; a duplicate binding is a programming error
/// caught by the table test below.
static ALIASES: Lazy<HashMap<&'static str, Action>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for action in Action::ALL {
        for alias in action.aliases() {
            table.insert(*alias, action);
        }
    }
    table
});

/// Route one command line to its handler and return the exit code.
///
/// Unknown tokens print an error naming the token, then the full help,
/// and yield exit code 1.
pub fn dispatch(args: &[String], settings: &Settings, launcher: &dyn Launcher) -> i32 {
    let token = args.first().map(String::as_str).unwrap_or(DEFAULT_TOKEN);

    let Some(action) = Action::lookup(token) else {
        eprintln!("{}Unknown command: {token}{}", ui::RED, ui::RESET);
        eprintln!();
        eprint!("{}", ui::help());
        return 1;
    };
    debug!(?action, token, "resolved");

    match action {
        Action::Run => run::run(launcher),
        Action::SchwabEnhanced => schwab::run(launcher),
        Action::Diagnostics => diagnostics::run(launcher),
        Action::TestEmail => email::run(launcher),
        Action::TestSchwab => schwab_api::run(launcher),
        Action::CollectData => collect::run(launcher),
        Action::Dashboard => dashboard::run(launcher),
        Action::Setup => setup::run(settings, launcher, &mut io::stdin().lock()),
        Action::Status => status::run(settings),
        Action::Help => {
            ui::print_help();
            0
        }
    }
}
