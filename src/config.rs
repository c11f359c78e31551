//! Runtime configuration for factor-console.

use std::{env, path::PathBuf};

/// Resolved settings for one invocation, read from `.env` and the
/// environment with defaults. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Install home: the directory holding the toolkit scripts, the
    /// `.env` file and the database. Defaults to the directory the
    /// console binary itself lives in, not the caller's working
    /// directory.
    pub home: PathBuf,
    /// Interpreter used to run the toolkit scripts.
    pub interpreter: String,
    /// Environment-configuration file, created only by `setup`.
    pub env_file: PathBuf,
    /// Factor database owned by the collection scripts.
    pub db_file: PathBuf,
}

impl Settings {
    /// Load configuration from environment with defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let home = env::var("FACTOR_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(exe_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let interpreter = env::var("FACTOR_PYTHON").unwrap_or_else(|_| "python3".to_string());
        let db_name = env::var("FACTOR_DB").unwrap_or_else(|_| "factor_data.db".to_string());

        Self {
            env_file: home.join(".env"),
            db_file: home.join(db_name),
            home,
            interpreter,
        }
    }
}

fn exe_dir() -> Option<PathBuf> {
    env::current_exe().ok()?.parent().map(PathBuf::from)
}
