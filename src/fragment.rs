//! Fragment providers.
//!
//! Every provider returns `Option<String>`. `None` means the fragment has
//! nothing to say and is left out of the prompt; lookup failures end up
//! here too, after a debug log line.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::exec::Runner;
use crate::git::Git;

/// Format used for the date fragment.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The configured hostname, if any.
pub fn host(name: &str) -> Option<String> {
    (!name.is_empty()).then(|| name.to_string())
}

/// The current time as `YYYY-MM-DD HH:MM:SS`.
pub fn date(clock: &dyn Clock) -> Option<String> {
    Some(clock.now().format(DATE_FORMAT).to_string())
}

/// `git` for a clean checkout in `dir`, `git unclean` for one with changes.
pub fn vcs(dir: &Path, runner: &dyn Runner) -> Option<String> {
    let git = Git::open(dir, runner)?;

    match git.is_unclean() {
        Ok(false) => Some("git".to_string()),
        Ok(true) => Some("git unclean".to_string()),
        Err(e) => {
            tracing::debug!(error = %e, "git status unavailable");
            None
        }
    }
}

/// The last `/`-separated component of the working directory.
///
/// A failed lookup is reported inline as `cwd:<error>`.
pub fn cwd_tail(cwd: &io::Result<PathBuf>) -> Option<String> {
    let text = match cwd {
        Ok(path) => {
            let path = path.to_string_lossy();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
        Err(e) => {
            tracing::debug!(error = %e, "working directory unavailable");
            format!("cwd:{e}")
        }
    };
    (!text.is_empty()).then_some(text)
}

/// The current g4 client id, as `[ id ]`.
pub fn client(dir: &Path, runner: &dyn Runner) -> Option<String> {
    let output = match runner.run("g4clients", &["--current"], dir) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "g4 client unavailable");
            return None;
        }
    };

    let first = output.split('\n').next().unwrap_or_default();
    (!first.is_empty()).then(|| format!("[ {first} ]"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::exec::Error;

    struct Canned(Result<&'static str, &'static str>);

    impl Runner for Canned {
        fn run(&self, _program: &str, _args: &[&str], _dir: &Path) -> Result<String, Error> {
            self.0
                .map(str::to_string)
                .map_err(|e| Error::Failed(e.to_string()))
        }
    }

    struct Fixed(NaiveDateTime);

    impl Clock for Fixed {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn checkout() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join(".git")).expect("mkdir .git");
        dir
    }

    #[test]
    fn host_passthrough() {
        assert_eq!(host(""), None);
        assert_eq!(host("devbox").as_deref(), Some("devbox"));
    }

    #[test]
    fn date_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(date(&Fixed(at)).as_deref(), Some("2024-03-05 07:08:09"));
    }

    #[test]
    fn system_clock_formats_to_fixed_width() {
        let text = date(&SystemClock).unwrap();
        assert_eq!(text.len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn vcs_without_metadata() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        assert_eq!(vcs(dir.path(), &Canned(Ok(" M a\n"))), None);
    }

    #[test]
    fn vcs_clean_when_output_is_one_line() {
        let dir = checkout();
        assert_eq!(vcs(dir.path(), &Canned(Ok(""))).as_deref(), Some("git"));
        assert_eq!(
            vcs(dir.path(), &Canned(Ok("no newline"))).as_deref(),
            Some("git")
        );
    }

    #[test]
    fn vcs_unclean_when_output_has_lines() {
        let dir = checkout();
        assert_eq!(
            vcs(dir.path(), &Canned(Ok(" M src/main.rs\n?? notes.txt\n"))).as_deref(),
            Some("git unclean")
        );
    }

    #[test]
    fn vcs_failure_is_silent() {
        let dir = checkout();
        assert_eq!(vcs(dir.path(), &Canned(Err("exit status: 128"))), None);
    }

    #[test]
    fn cwd_tail_takes_last_component() {
        let cwd = Ok(PathBuf::from("/home/alice/project"));
        assert_eq!(cwd_tail(&cwd).as_deref(), Some("project"));
    }

    #[test]
    fn cwd_root_is_empty() {
        assert_eq!(cwd_tail(&Ok(PathBuf::from("/"))), None);
    }

    #[test]
    fn cwd_error_is_shown() {
        let cwd = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(cwd_tail(&cwd).as_deref(), Some("cwd:gone"));
    }

    #[test]
    fn client_wraps_first_line() {
        let dir = Path::new(".");
        assert_eq!(
            client(dir, &Canned(Ok("alice-main\nextra\n"))).as_deref(),
            Some("[ alice-main ]")
        );
    }

    #[test]
    fn client_empty_or_failed() {
        let dir = Path::new(".");
        assert_eq!(client(dir, &Canned(Ok(""))), None);
        assert_eq!(client(dir, &Canned(Ok("\nsecond\n"))), None);
        assert_eq!(client(dir, &Canned(Err("not found"))), None);
    }
}
