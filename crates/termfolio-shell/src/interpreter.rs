//! Command trait, registry, and dispatch logic.
//!
//! Input lines are tokenized on whitespace: the first token is the command
//! name (case-insensitive), the rest are positional arguments (case
//! preserved). No quoting, no escaping. Unknown names come back as
//! error-kind replies synthesized here, not as handler invocations.

use std::collections::HashMap;

use termfolio_content::ContentStore;
use termfolio_types::outcome::CommandReply;
use termfolio_types::path::Directory;

use crate::clock::Clock;
use crate::pkg_commands::{self, PkgFlavor};

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// The session's current virtual directory.
    pub cwd: Directory,
    /// The portfolio content store.
    pub content: &'a ContentStore,
    /// Wall-clock service for time-parameterized commands.
    pub clock: &'a dyn Clock,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[directory\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandReply;
}

/// Registry of available commands with dispatch.
///
/// Built once at startup and immutable afterwards. The package-manager
/// aliases and `help` are intercepted here rather than registered, because
/// they need read access to sibling commands by name.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

/// Commands the registry intercepts before handler lookup.
const INTERCEPTED: [(&str, &str, &str); 4] = [
    ("help", "List available commands", "general"),
    ("npm", "Install and run portfolio packages (npm style)", "package"),
    ("yarn", "Run portfolio packages (yarn style)", "package"),
    ("pip", "Install and run portfolio packages (pip style)", "package"),
];

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a registry with all built-in commands registered.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::commands::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Whether `name` resolves to a command (registered or intercepted).
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        self.commands.contains_key(&lower) || INTERCEPTED.iter().any(|(n, _, _)| *n == lower)
    }

    /// Parse and execute a command line.
    ///
    /// Returns `None` for input that is empty after trimming (a no-op:
    /// nothing to record, nothing to report). Never fails: unknown commands
    /// and bad arguments come back as error-kind replies.
    pub fn interpret(&self, line: &str, env: &Environment<'_>) -> Option<CommandReply> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let typed_name = tokens.next()?;
        let args: Vec<&str> = tokens.collect();

        Some(self.dispatch(typed_name, &args, env))
    }

    /// Resolve a command name and run its handler.
    pub fn dispatch(&self, typed_name: &str, args: &[&str], env: &Environment<'_>) -> CommandReply {
        let name = typed_name.to_ascii_lowercase();
        log::debug!("dispatch '{name}' with {} arg(s)", args.len());

        // Intercepted commands that need registry access.
        match name.as_str() {
            "help" => return self.execute_help(),
            "npm" => return pkg_commands::execute_pkg(self, PkgFlavor::Npm, args, env),
            "yarn" => return pkg_commands::execute_pkg(self, PkgFlavor::Yarn, args, env),
            "pip" => return pkg_commands::execute_pkg(self, PkgFlavor::Pip, args, env),
            _ => {},
        }

        match self.commands.get(name.as_str()) {
            Some(cmd) => cmd.execute(args, env),
            None => {
                log::warn!("unknown command: {typed_name}");
                CommandReply::error(format!(
                    "Command '{typed_name}' not found. Type 'help' for available commands."
                ))
            },
        }
    }

    /// Run a registered command by name with empty arguments at the root
    /// path, returning its output text.
    ///
    /// This is the narrow lookup capability the package-manager aliases
    /// delegate through. Package-manager names themselves are not eligible
    /// targets, which bounds the delegation depth at one level.
    pub(crate) fn delegate_output(&self, target: &str, env: &Environment<'_>) -> Option<String> {
        if pkg_commands::is_pkg_name(target) {
            return None;
        }
        if target == "help" {
            return Some(self.execute_help().output);
        }
        let cmd = self.commands.get(target)?;
        let root_env = Environment {
            cwd: Directory::Root,
            content: env.content,
            clock: env.clock,
        };
        Some(cmd.execute(&[], &root_env).output)
    }

    /// Built-in help with access to the registry listing.
    fn execute_help(&self) -> CommandReply {
        // Group commands by category.
        let mut categories: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
        for (name, desc, category) in INTERCEPTED {
            categories.entry(category).or_default().push((name, desc));
        }
        for cmd in self.commands.values() {
            categories
                .entry(cmd.category())
                .or_default()
                .push((cmd.name(), cmd.description()));
        }

        let mut cats: Vec<&str> = categories.keys().copied().collect();
        cats.sort();

        let total: usize = categories.values().map(|v| v.len()).sum();
        let mut out = format!("Available commands ({total}):\n");
        for cat in &cats {
            let mut cmds = categories[cat].clone();
            cmds.sort_by_key(|(name, _)| *name);
            out.push_str(&format!("\n[{cat}]\n"));
            for (name, desc) in &cmds {
                out.push_str(&format!("  {name:16} {desc}\n"));
            }
        }
        out.push_str(
            "\nTips:\n  \
             Tab completes a command name\n  \
             Up/Down arrows recall command history\n  \
             Ctrl+L clears the screen",
        );
        CommandReply::info(out)
    }

    /// Return a sorted list of all resolvable command names.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.extend(INTERCEPTED.iter().map(|(n, _, _)| n.to_string()));
        names.sort();
        names
    }

    /// Return completions for a partial command name.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_ascii_lowercase();
        let mut matches: Vec<String> = self
            .command_names()
            .into_iter()
            .filter(|name| name.starts_with(&lower))
            .collect();
        matches.sort();
        matches
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
