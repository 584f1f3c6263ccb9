//! System-flavored commands: whoami, date, uname, history, about, readme.

use termfolio_types::outcome::CommandReply;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register the system command set.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(UnameCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ReadmeCmd));
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        CommandReply::info(
            "Current user: alex-moreau\n\
             Senior Full Stack Developer\n\
             Meridian Labs, Toronto",
        )
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandReply {
        let now = env.clock.now();
        CommandReply::info(format!(
            "Current date and time: {}, {} {}, {} {} UTC",
            now.weekday_name(),
            now.month_name(),
            now.day,
            now.year,
            now.time_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// uname
// ---------------------------------------------------------------------------

struct UnameCmd;
impl Command for UnameCmd {
    fn name(&self) -> &str {
        "uname"
    }
    fn description(&self) -> &str {
        "System information"
    }
    fn usage(&self) -> &str {
        "uname"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        CommandReply::info(format!(
            "termfolio v{}\n\
             An interactive portfolio terminal\n\
             Built with Rust\n\
             Scrollback driven by a registry-based command interpreter",
            env!("CARGO_PKG_VERSION"),
        ))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        // History lives in the session, not the registry; this command
        // describes the recall feature instead of printing entries.
        CommandReply::info(
            "Command history is active for this session.\n\
             Use the Up/Down arrow keys to walk through previous commands.",
        )
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "About this terminal"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        CommandReply::success(
            "termfolio - an interactive terminal portfolio\n\
             \n\
             Developer: Alex Moreau\n\
             Company:   Meridian Labs, Toronto\n\
             Contact:   alex@moreau.dev\n\
             Role:      Senior Full Stack Developer\n\
             \n\
             This terminal showcases professional experience, featured\n\
             projects, technical skills, and contact information.\n\
             Type 'help' for the full command list.",
        )
    }
}

// ---------------------------------------------------------------------------
// readme
// ---------------------------------------------------------------------------

struct ReadmeCmd;
impl Command for ReadmeCmd {
    fn name(&self) -> &str {
        "readme"
    }
    fn description(&self) -> &str {
        "Quick start guide"
    }
    fn usage(&self) -> &str {
        "readme"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandReply {
        CommandReply::info(
            "# Interactive Terminal Portfolio\n\
             \n\
             ## Quick start\n\
             - Type 'help' to see all available commands\n\
             - Try package manager style: 'npm install skills'\n\
             - Tab completes command names\n\
             \n\
             ## Featured sections\n\
             - summary     professional overview\n\
             - skills      technical expertise\n\
             - experience  work history\n\
             - projects    featured work\n\
             - contact     get in touch",
        )
    }
}
