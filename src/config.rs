//! Prompt configuration.

/// Which fragments to include and how to frame them.
///
/// Built once by the binary from its command line and handed to
/// [`compose`](crate::compose).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptConfig {
    /// Hostname text; empty leaves the fragment out.
    pub host: String,

    /// Include the current local date and time.
    pub date: bool,

    /// Include the git clean/unclean marker.
    pub git: bool,

    /// Include the last component of the working directory.
    pub cwd: bool,

    /// Include the current g4 client id.
    pub g4client: bool,

    /// Opening text, before escape resolution.
    pub prepend: String,

    /// Closing text, before escape resolution.
    pub append: String,

    /// Colorize even when stdout is not a terminal.
    pub always_color: bool,
}

/// The default framing: a literal backslash-n, resolved to a newline later.
pub const DEFAULT_FRAME: &str = "\\n";

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            date: true,
            git: true,
            cwd: true,
            g4client: true,
            prepend: DEFAULT_FRAME.to_string(),
            append: DEFAULT_FRAME.to_string(),
            always_color: false,
        }
    }
}

impl PromptConfig {
    /// A configuration with every optional fragment turned off.
    pub fn bare() -> Self {
        Self {
            date: false,
            git: false,
            cwd: false,
            g4client: false,
            ..Self::default()
        }
    }
}
