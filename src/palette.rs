//! Per-fragment colors.

use std::io::IsTerminal;

use crossterm::style::{Attribute, Color, ContentStyle, StyledContent};

/// The kinds of text that make up a prompt. Each one has its own style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    Host,
    Date,
    Vcs,
    Cwd,
    Client,
    Closer,
}

impl FragmentKind {
    /// The terminal style used for this kind of fragment.
    pub fn style(self) -> ContentStyle {
        let (color, underline) = match self {
            FragmentKind::Host => (Color::Cyan, true),
            FragmentKind::Date => (Color::Yellow, false),
            FragmentKind::Vcs => (Color::DarkRed, false),
            FragmentKind::Cwd => (Color::Green, false),
            FragmentKind::Client => (Color::Blue, false),
            FragmentKind::Closer => (Color::Grey, false),
        };

        let mut style = ContentStyle {
            foreground_color: Some(color),
            ..ContentStyle::default()
        };
        if underline {
            style.attributes.set(Attribute::Underlined);
        }
        style
    }
}

/// Decides whether fragments are rendered with escape sequences at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that always emits styles.
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// A palette that never emits styles.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Pick a palette for stdout.
    ///
    /// Styles are used when stdout is a terminal, or unconditionally when
    /// `always_color` is set. Forcing also overrides `NO_COLOR`.
    pub fn detect(always_color: bool) -> Self {
        if always_color {
            crossterm::style::force_color_output(true);
            return Self::colored();
        }

        let enabled = std::io::stdout().is_terminal();
        tracing::trace!(enabled, "stdout color detection");
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Render `text` in the style for `kind`.
    pub fn paint(self, kind: FragmentKind, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        StyledContent::new(kind.style(), text).to_string()
    }
}
