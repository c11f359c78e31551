//! `status` action: aggregate read-only health probes.
//!
//! Every probe is independent and non-fatal: a probe that cannot
//! complete degrades to a placeholder value instead of failing the
//! report. Nothing is cached; each invocation probes fresh.

use std::{env, fs, path::Path, process::Command};

use tracing::instrument;

use crate::config::Settings;
use crate::ui;

#[instrument(skip_all)]
pub fn run(settings: &Settings) -> i32 {
    println!("{}", ui::banner());
    println!("{}SYSTEM STATUS{}", ui::BOLD, ui::RESET);
    println!("{}", ui::thin_rule());

    println!(
        "Install home:         {} (interpreter: {})",
        settings.home.display(),
        settings.interpreter
    );
    println!("Environment file:     {}", env_file_probe(&settings.env_file));
    println!("Database:             {}", database_probe(&settings.db_file));
    println!("Virtual environment:  {}", virtualenv_probe());
    println!("Interpreter version:  {}", interpreter_version(&settings.interpreter));

    // Only meaningful once the collector has created the database.
    if settings.db_file.exists() {
        println!(
            "Last data collection: {}",
            last_collection(&settings.db_file)
        );
    }

    println!("{}", ui::rule());
    0
}

fn env_file_probe(path: &Path) -> String {
    if path.exists() {
        format!("{}Found{}", ui::GREEN, ui::RESET)
    } else {
        format!("{}Missing{} (run `factor-console setup`)", ui::YELLOW, ui::RESET)
    }
}

fn database_probe(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => format!(
            "{}Found{} ({})",
            ui::GREEN,
            ui::RESET,
            human_size(meta.len())
        ),
        Err(_) => format!("{}Not created yet{}", ui::YELLOW, ui::RESET),
    }
}

/// Absence of an active virtualenv is a warning, not an error.
fn virtualenv_probe() -> String {
    match env::var("VIRTUAL_ENV") {
        Ok(path) if !path.is_empty() => {
            let name = Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            format!("{}Active{} ({name})", ui::GREEN, ui::RESET)
        }
        _ => format!("{}Not active{}", ui::YELLOW, ui::RESET),
    }
}

/// Second whitespace token of `<interpreter> --version`, e.g. `3.11.4`
/// out of `Python 3.11.4`. Older interpreters print to stderr.
fn interpreter_version(interpreter: &str) -> String {
    let output = match Command::new(interpreter).arg("--version").output() {
        Ok(output) => output,
        Err(_) => return "Unknown".to_string(),
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stdout.trim().is_empty() { stderr } else { stdout };

    text.split_whitespace()
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Newest `date` in the `factor_data` table, via the sqlite3 CLI. Any
/// failure (no sqlite3, no table, empty table) reports `Never`.
fn last_collection(db: &Path) -> String {
    let output = Command::new("sqlite3")
        .arg(db)
        .arg("SELECT MAX(date) FROM factor_data;")
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let value = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if value.is_empty() {
                "Never".to_string()
            } else {
                value
            }
        }
        _ => "Never".to_string(),
    }
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
