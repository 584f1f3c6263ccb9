//! Theme selection command.
//!
//! The handler only validates the requested name and describes the result;
//! the active theme itself is session state, switched by the session when it
//! sees a successful `theme` invocation.

use termfolio_types::outcome::CommandReply;
use termfolio_types::theme::Theme;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register the theme command.
pub fn register_theme_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ThemeCmd));
}

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Change terminal theme"
    }
    fn usage(&self) -> &str {
        "theme [name]"
    }
    fn category(&self) -> &str {
        "appearance"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandReply {
        match args.first().copied() {
            Some(name) => match Theme::parse(name) {
                Some(theme) => CommandReply::success(format!(
                    "Theme changed to: {theme}\nAvailable themes: {}",
                    Theme::list()
                )),
                None => CommandReply::error(format!(
                    "Unknown theme: {name}\nAvailable themes: {}",
                    Theme::list()
                )),
            },
            None => {
                let mut out = String::from("Available themes:\n");
                for theme in Theme::ALL {
                    out.push_str(&format!("  {theme}\n"));
                }
                out.push_str("\nUsage: theme <name>");
                CommandReply::info(out)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use termfolio_content::ContentStore;
    use termfolio_types::outcome::OutcomeKind;
    use termfolio_types::path::Directory;
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
    fn valid_theme_confirms_name() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = ThemeCmd.execute(&["cyberpunk"], &env);
        assert_eq!(reply.kind, OutcomeKind::Success);
        assert!(reply.output.contains("cyberpunk"));
    }

    #[test]
    fn invalid_theme_lists_valid_names() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = ThemeCmd.execute(&["neon"], &env);
        assert_eq!(reply.kind, OutcomeKind::Error);
        assert!(reply.output.contains("neon"));
        for theme in Theme::ALL {
            assert!(reply.output.contains(theme.as_str()));
        }
    }

    #[test]
    fn no_args_lists_themes_as_info() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let reply = ThemeCmd.execute(&[], &env);
        assert_eq!(reply.kind, OutcomeKind::Info);
        assert!(reply.output.contains("vscode"));
        assert!(reply.output.contains("Usage"));
    }

    #[test]
    fn theme_never_sets_a_path() {
        let content = ContentStore::builtin();
        let env = make_env(&content);
        assert!(ThemeCmd.execute(&["retro"], &env).path.is_none());
        assert!(ThemeCmd.execute(&[], &env).path.is_none());
    }
}
