//! Subprocess execution.

use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an external program and captures its stdout.
///
/// Fragment providers go through this trait so tests can stand in for `git`
/// and `g4clients` without touching the real binaries.
pub trait Runner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<String, Error>;
}

/// Spawns real processes. Blocks until the child exits; there is no timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<String, Error> {
        tracing::trace!(program, ?args, dir = %dir.display(), "spawning");

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::Spawn(format!("{program}: {e}")))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(Error::Failed(format!(
                "{program} {} ({})",
                args.join(" "),
                output.status
            )))
        }
    }
}

/// Errors from running a subprocess.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to execute: {0}")]
    Spawn(String),

    #[error("{0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let err = SystemRunner
            .run("promptline-no-such-binary", &[], Path::new("."))
            .unwrap_err();
        assert!(matches!(err, Error::Spawn(_)));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let out = SystemRunner
            .run("sh", &["-c", "echo hello"], Path::new("."))
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failed() {
        let err = SystemRunner
            .run("sh", &["-c", "echo partial; exit 3"], Path::new("."))
            .unwrap_err();
        assert!(matches!(err, Error::Failed(_)));
    }
}
