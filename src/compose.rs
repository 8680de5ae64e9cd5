//! Prompt assembly.

use std::io;
use std::path::PathBuf;

use crate::config::PromptConfig;
use crate::escape;
use crate::exec::{Runner, SystemRunner};
use crate::fragment::{self, Clock, SystemClock};
use crate::palette::{FragmentKind, Palette};

/// Everything outside the configuration that composing a prompt reads.
pub struct Env<'a> {
    /// Directory that is checked for `.git` and that subprocesses run in.
    pub dir: PathBuf,

    /// The resolved working directory, used for the cwd fragment.
    pub cwd: io::Result<PathBuf>,

    pub runner: &'a dyn Runner,
    pub clock: &'a dyn Clock,
    pub palette: Palette,
}

impl Env<'static> {
    /// The real process environment.
    pub fn system(palette: Palette) -> Self {
        Self {
            dir: PathBuf::from("."),
            cwd: std::env::current_dir(),
            runner: &SystemRunner,
            clock: &SystemClock,
            palette,
        }
    }
}

/// Append `text` to `prompt` in the style for `kind`.
///
/// Empty text leaves `prompt` untouched. Otherwise a single space separates
/// it from what came before, unless `prompt` is empty or ends in a newline.
pub fn append(prompt: &mut String, palette: Palette, kind: FragmentKind, text: &str) {
    if text.is_empty() {
        return;
    }
    if !prompt.is_empty() && !prompt.ends_with('\n') {
        prompt.push(' ');
    }
    prompt.push_str(&palette.paint(kind, text));
}

/// Build the prompt text for `config`.
///
/// Fragments always appear in the same order: host, date, git status,
/// working directory, g4 client, then the closer.
pub fn compose(config: &PromptConfig, env: &Env<'_>) -> String {
    let palette = env.palette;
    let mut prompt = escape::resolve(&config.prepend);

    let fragments = [
        (FragmentKind::Host, fragment::host(&config.host)),
        (
            FragmentKind::Date,
            config.date.then(|| fragment::date(env.clock)).flatten(),
        ),
        (
            FragmentKind::Vcs,
            config
                .git
                .then(|| fragment::vcs(&env.dir, env.runner))
                .flatten(),
        ),
        (
            FragmentKind::Cwd,
            config.cwd.then(|| fragment::cwd_tail(&env.cwd)).flatten(),
        ),
        (
            FragmentKind::Client,
            config
                .g4client
                .then(|| fragment::client(&env.dir, env.runner))
                .flatten(),
        ),
    ];

    for (kind, text) in fragments {
        tracing::debug!(?kind, text = text.as_deref(), "fragment");
        if let Some(text) = text {
            append(&mut prompt, palette, kind, &text);
        }
    }

    append(
        &mut prompt,
        palette,
        FragmentKind::Closer,
        &escape::resolve(&config.append),
    );
    prompt
}
