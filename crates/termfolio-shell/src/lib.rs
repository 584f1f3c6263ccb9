//! Command interpreter for the portfolio terminal.
//!
//! A registry-based dispatch system: commands implement the [`Command`]
//! trait and are registered by name. The interpreter parses input lines,
//! resolves the command name case-insensitively, and dispatches
//! `execute()`. Handlers never fail -- rejected input comes back as an
//! error-kind reply, never as an `Err`.

pub mod clock;
mod commands;
mod fun_commands;
mod info_commands;
mod interpreter;
mod pkg_commands;
mod system_commands;
mod theme_commands;

/// Wall-clock service injected into command environments.
pub use clock::{Clock, SystemClock};
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
