//! Terminal session state machine and typewriter reveal.
//!
//! The session owns everything the presentation layer observes -- the
//! scrollback, command history, current directory, active theme, and the
//! input lock -- and drives the command interpreter from raw input lines.

mod reveal;
mod session;

/// An in-progress reveal of one output text.
pub use reveal::Reveal;
/// Per-character timing for a reveal.
pub use reveal::RevealPacing;
/// One interactive terminal session.
pub use session::Session;
