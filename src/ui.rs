//! Banner, help and status formatting for the operator console.

use chrono::Local;

use crate::cli::Action;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

const RULE_WIDTH: usize = 60;

/// Heavy `=` rule used around banners and report sections.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Light `-` rule used between report sections.
pub fn thin_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Program banner. Pure formatting over static data so every help
/// rendering is byte-identical.
pub fn banner() -> String {
    format!(
        "{rule}\n{BOLD}{CYAN}FACTOR MONITORING SYSTEM{RESET}\n{rule}\n",
        rule = rule()
    )
}

/// Announce a delegated action before handing the terminal to it.
pub fn announce(title: &str, detail: &str) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("{}", banner());
    println!("{BOLD}{title}{RESET} [{now}]");
    println!("{detail}");
    println!();
}

/// Full help text: every action with its aliases and a one-line
/// description, plus usage examples.
pub fn help() -> String {
    let mut text = String::new();
    text.push_str(&banner());
    text.push_str("\nUsage: factor-console [COMMAND]\n\n");
    text.push_str(&format!("{BOLD}Commands:{RESET}\n"));

    for action in Action::ALL {
        let aliases = action.aliases().join(" | ");
        text.push_str(&format!(
            "  {CYAN}{aliases:<38}{RESET} {}\n",
            action.summary()
        ));
    }

    text.push_str(&format!(
        "\n{BOLD}Examples:{RESET}\n  \
         factor-console              # run the full factor analysis\n  \
         factor-console status       # check system health\n  \
         factor-console setup        # first-run environment setup\n  \
         factor-console dashboard    # serve the dashboard on localhost:8050\n"
    ));
    text
}

pub fn print_help() {
    print!("{}", help());
}
