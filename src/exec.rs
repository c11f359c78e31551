//! Synchronous launch seam for the toolkit's external programs.
//!
//! Every delegated program is opaque: it is run with no arguments,
//! inherits the console's stdio, and reports back a single exit code.
//! Handlers go through the [`Launcher`] trait so tests can substitute a
//! recorded exit code for the real scripts.

use std::{io, path::PathBuf, process::Command};

use thiserror::Error;
use tracing::{error, info};

use crate::config::Settings;

/// The closed set of external programs the console can delegate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Program {
    Analysis,
    SchwabEnhanced,
    Diagnostics,
    EmailTest,
    SchwabTest,
    DataCollection,
    Dashboard,
    DatabaseSetup,
}

impl Program {
    /// Script basename, resolved under the install home at launch time.
    pub fn script(self) -> &'static str {
        match self {
            Program::Analysis => "run_analysis.py",
            Program::SchwabEnhanced => "schwab_factor_system.py",
            Program::Diagnostics => "run_diagnostics.py",
            Program::EmailTest => "test_email.py",
            Program::SchwabTest => "test_schwab_connection.py",
            Program::DataCollection => "factor_data_collection.py",
            Program::Dashboard => "monitoring_dashboard.py",
            Program::DatabaseSetup => "setup_database.py",
        }
    }
}

/// A delegated program that never produced an exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("interpreter `{interpreter}` not found while launching {script}")]
    InterpreterMissing { interpreter: String, script: &'static str },
    #[error("failed to start {script}: {source}")]
    Spawn {
        script: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Run one named external program to completion.
pub trait Launcher {
    fn launch(&self, program: Program) -> Result<i32, LaunchError>;
}

/// Production launcher: `<interpreter> <home>/<script>`, stdio inherited.
pub struct ScriptLauncher {
    interpreter: String,
    home: PathBuf,
}

impl ScriptLauncher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            interpreter: settings.interpreter.clone(),
            home: settings.home.clone(),
        }
    }
}

impl Launcher for ScriptLauncher {
    fn launch(&self, program: Program) -> Result<i32, LaunchError> {
        let script = self.home.join(program.script());
        info!(script = %script.display(), "launching");

        let status = Command::new(&self.interpreter)
            .arg(&script)
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => LaunchError::InterpreterMissing {
                    interpreter: self.interpreter.clone(),
                    script: program.script(),
                },
                _ => LaunchError::Spawn {
                    script: program.script(),
                    source,
                },
            })?;

        // A signal-terminated child has no code; count it as failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Delegate to `program` and reduce any launch failure to a printed line
/// plus a non-zero exit code.
pub fn delegate(launcher: &dyn Launcher, program: Program) -> i32 {
    match launcher.launch(program) {
        Ok(code) => code,
        Err(err) => {
            error!(script = program.script(), %err, "launch failed");
            eprintln!("Error: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn launcher(interpreter: &str) -> ScriptLauncher {
        ScriptLauncher {
            interpreter: interpreter.to_string(),
            home: Path::new(".").to_path_buf(),
        }
    }

    #[test]
    fn exit_code_is_propagated() {
        assert_eq!(launcher("true").launch(Program::Analysis).unwrap(), 0);
        assert_eq!(launcher("false").launch(Program::Analysis).unwrap(), 1);
    }

    #[test]
    fn missing_interpreter_is_a_launch_error() {
        let err = launcher("no-such-interpreter-for-factor-console")
            .launch(Program::Diagnostics)
            .unwrap_err();
        assert!(matches!(err, LaunchError::InterpreterMissing { .. }));
    }

    #[test]
    fn delegate_reduces_launch_failure_to_one() {
        let code = delegate(
            &launcher("no-such-interpreter-for-factor-console"),
            Program::Dashboard,
        );
        assert_eq!(code, 1);
    }

    #[test]
    fn every_program_has_a_distinct_script() {
        let programs = [
            Program::Analysis,
            Program::SchwabEnhanced,
            Program::Diagnostics,
            Program::EmailTest,
            Program::SchwabTest,
            Program::DataCollection,
            Program::Dashboard,
            Program::DatabaseSetup,
        ];
        let mut scripts: Vec<_> = programs.iter().map(|p| p.script()).collect();
        scripts.sort_unstable();
        scripts.dedup();
        assert_eq!(scripts.len(), programs.len());
    }
}
