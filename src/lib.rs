//! Promptline: a readable shell prompt on stdout.
//!
//! The prompt is a row of optional fragments (hostname, date and time, git
//! status, working directory, g4 client), each in its own color, framed by
//! configurable opening and closing text.
//!
//! # Architecture
//!
//! - **Config**: [`PromptConfig`], resolved once by the binary
//! - **Fragment**: one provider per fragment, each returning `Option<String>`
//! - **Compose**: joins fragments with spaces in a fixed order
//! - **Palette**: per-fragment colors and the on/off decision

mod compose;
mod config;
mod escape;
mod exec;
mod fragment;
mod git;
mod palette;

pub use compose::{Env, append, compose};
pub use config::{DEFAULT_FRAME, PromptConfig};
pub use escape::resolve as resolve_escapes;
pub use exec::{Error, Runner, SystemRunner};
pub use fragment::{Clock, DATE_FORMAT, SystemClock};
pub use git::Git;
pub use palette::{FragmentKind, Palette};
