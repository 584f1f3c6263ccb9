//! Built-in navigation commands and registry wiring.

use termfolio_types::outcome::CommandReply;
use termfolio_types::path::Directory;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
///
/// `help` and the package-manager aliases (`npm`, `yarn`, `pip`) are not
/// registered here; the registry intercepts them because they need access
/// to sibling commands.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(ClearCmd));
    crate::info_commands::register_info_commands(reg);
    crate::system_commands::register_system_commands(reg);
    crate::theme_commands::register_theme_commands(reg);
    crate::fun_commands::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

/// Files shown alongside the section directories. Purely decorative; there
/// is no file content behind them.
const ROOT_FILES: [&str; 3] = ["README.md", "package.json", ".gitignore"];

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        let mut out = String::from("Directories:\n");
        for dir in Directory::SECTIONS {
            out.push_str(&format!("  {}/\n", dir.name()));
        }
        out.push_str("\nFiles:\n");
        for file in ROOT_FILES {
            out.push_str(&format!("  {file}\n"));
        }
        out.push_str("\nUse 'cd <directory>' to navigate.");
        CommandReply::info(out)
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [directory]"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandReply {
        match args.first().copied() {
            None => CommandReply::info(format!(
                "Current directory: {}",
                Directory::Root.display_path()
            ))
            .with_path(Directory::Root),
            Some(token) => match Directory::parse(token) {
                Some(dir) => CommandReply::success(format!(
                    "Changed directory to: {}",
                    dir.display_path()
                ))
                .with_path(dir),
                None => CommandReply::error(format!(
                    "Directory '{token}' not found\nAvailable directories: {}",
                    Directory::section_list()
                )),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandReply {
        CommandReply::info(format!("Current directory: {}", env.cwd.display_path()))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        CommandReply::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use termfolio_content::ContentStore;
    use termfolio_types::outcome::OutcomeKind;
    use termfolio_types::timestamp::Timestamp;

    struct FixedClock;
    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            Timestamp::from_unix_secs(0)
        }
    }

    fn make_env(content: &ContentStore) -> Environment<'_> {
        Environment {
            cwd: Directory::Root,
            content,
            clock: &FixedClock,
        }
    }

    #[test]
    fn ls_lists_sections_and_files() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = LsCmd.execute(&[], &env);
        assert_eq!(reply.kind, OutcomeKind::Info);
        for dir in Directory::SECTIONS {
            assert!(reply.output.contains(dir.name()));
        }
        assert!(reply.output.contains("README.md"));
    }

    #[test]
    fn cd_no_args_resets_to_root_as_info() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = CdCmd.execute(&[], &env);
        assert_eq!(reply.kind, OutcomeKind::Info);
        assert_eq!(reply.path, Some(Directory::Root));
    }

    #[test]
    fn cd_valid_directory_succeeds() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = CdCmd.execute(&["projects"], &env);
        assert_eq!(reply.kind, OutcomeKind::Success);
        assert_eq!(reply.path, Some(Directory::Projects));
        assert!(reply.output.contains("/portfolio/projects"));
    }

    #[test]
    fn cd_dotdot_and_slash_reset_to_root() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        for token in ["..", "/"] {
            let reply = CdCmd.execute(&[token], &env);
            assert_eq!(reply.kind, OutcomeKind::Success);
            assert_eq!(reply.path, Some(Directory::Root));
        }
    }

    #[test]
    fn cd_invalid_directory_errors_without_path() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = CdCmd.execute(&["nowhere"], &env);
        assert_eq!(reply.kind, OutcomeKind::Error);
        assert!(reply.path.is_none());
        assert!(reply.output.contains("'nowhere'"));
        assert!(reply.output.contains("skills"));
    }

    #[test]
    fn pwd_prints_current_path() {
        let content = ContentStore::builtin();
        let mut env = make_env(&content);
        env.cwd = Directory::Projects;
        let reply = PwdCmd.execute(&[], &env);
        assert_eq!(reply.kind, OutcomeKind::Info);
        assert!(reply.output.contains("/portfolio/projects"));
    }

    #[test]
    fn clear_signals_truncation() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = ClearCmd.execute(&[], &env);
        assert_eq!(reply.kind, OutcomeKind::Clear);
        assert!(reply.output.is_empty());
    }
}
